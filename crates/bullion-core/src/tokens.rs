//! `{{TOKEN}}` placeholders for content prose.
//!
//! Content authors write `{{CAPITAL_REQUIREMENT}}` instead of a hard-coded
//! dollar amount; [`resolve_tokens`] swaps each recognized token for a value
//! derived from the live ask price. Without usable price data every token
//! becomes the configured fallback phrase, so prose never shows a made-up
//! number. Unrecognized `{{NAME}}` markers are left exactly as written.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::format::format_currency_whole;
use crate::{QuoteSummary, ValidationError};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
const APPROX_PREFIX: &str = "~";

/// Recognized placeholder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `~$40`: ask rounded to the increment.
    CapitalRequirement,
    /// `~$30–$40`: ask ± premium band, each bound rounded.
    CapitalRequirementRange,
    /// `~$40+`
    CapitalRequirementPlus,
    /// `~$40+`, worded for liquidity context.
    LiquidityThreshold,
}

impl TokenKind {
    pub const ALL: [Self; 4] = [
        Self::CapitalRequirement,
        Self::CapitalRequirementRange,
        Self::CapitalRequirementPlus,
        Self::LiquidityThreshold,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CapitalRequirement => "CAPITAL_REQUIREMENT",
            Self::CapitalRequirementRange => "CAPITAL_REQUIREMENT_RANGE",
            Self::CapitalRequirementPlus => "CAPITAL_REQUIREMENT_PLUS",
            Self::LiquidityThreshold => "LIQUIDITY_THRESHOLD",
        }
    }

    /// The token as it appears in content, e.g. `{{CAPITAL_REQUIREMENT}}`.
    pub fn placeholder(self) -> String {
        format!("{OPEN}{}{CLOSE}", self.as_str())
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownToken {
                value: value.to_owned(),
            })
    }
}

/// Options for token display values.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenConfig {
    /// Spread around the ask used by the range token, in percent.
    pub premium_band_percent: f64,
    /// Dollar increment displayed values are rounded to.
    pub rounding_increment: f64,
    /// Text used for every recognized token when no price is available.
    pub fallback_phrase: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            premium_band_percent: 5.0,
            rounding_increment: 10.0,
            fallback_phrase: String::from("current market price"),
        }
    }
}

impl TokenConfig {
    pub fn with_premium_band_percent(mut self, premium_band_percent: f64) -> Self {
        self.premium_band_percent = premium_band_percent;
        self
    }

    pub fn with_rounding_increment(mut self, rounding_increment: f64) -> Self {
        self.rounding_increment = rounding_increment;
        self
    }

    pub fn with_fallback_phrase(mut self, fallback_phrase: impl Into<String>) -> Self {
        self.fallback_phrase = fallback_phrase.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let band = self.premium_band_percent;
        if !band.is_finite() || !(0.0..100.0).contains(&band) {
            return Err(ValidationError::InvalidPremiumBand { value: band });
        }

        let increment = self.rounding_increment;
        if !increment.is_finite() || increment <= 0.0 {
            return Err(ValidationError::InvalidRoundingIncrement { value: increment });
        }

        Ok(())
    }
}

/// Display value for a single token.
pub fn resolve_token(
    kind: TokenKind,
    summary: Option<&QuoteSummary>,
    config: &TokenConfig,
) -> String {
    let Some(ask) = summary.map(QuoteSummary::ask).filter(|ask| *ask > 0.0) else {
        return config.fallback_phrase.clone();
    };

    let increment = config.rounding_increment;
    let rounded_ask = round_to_increment(ask, increment);

    match kind {
        TokenKind::CapitalRequirement => approx(rounded_ask),
        TokenKind::CapitalRequirementRange => {
            let band = config.premium_band_percent / 100.0;
            let low = round_to_increment(ask * (1.0 - band), increment);
            let high = round_to_increment(ask * (1.0 + band), increment);
            format!("{}–{}", approx(low), format_currency_whole(high))
        }
        TokenKind::CapitalRequirementPlus | TokenKind::LiquidityThreshold => {
            format!("{}+", approx(rounded_ask))
        }
    }
}

/// Replace every recognized `{{TOKEN}}` in `text`.
pub fn resolve_tokens(text: &str, summary: Option<&QuoteSummary>, config: &TokenConfig) -> String {
    let mut resolved = String::with_capacity(text.len());
    let mut rest = text;

    while let Some((before, kind, after)) = next_token(rest) {
        resolved.push_str(before);
        resolved.push_str(&resolve_token(kind, summary, config));
        rest = after;
    }

    resolved.push_str(rest);
    resolved
}

pub fn has_tokens(text: &str) -> bool {
    next_token(text).is_some()
}

/// Tokens in order of appearance, duplicates included.
pub fn find_tokens(text: &str) -> Vec<TokenKind> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some((_, kind, after)) = next_token(rest) {
        found.push(kind);
        rest = after;
    }

    found
}

/// Split `text` around its first recognized token.
///
/// Only known names are tried after each `{{`, so a marker costs at most the
/// longest name to reject and the whole scan stays linear.
fn next_token(text: &str) -> Option<(&str, TokenKind, &str)> {
    let mut offset = 0;

    while let Some(found) = text[offset..].find(OPEN) {
        let start = offset + found;
        let after_open = &text[start + OPEN.len()..];
        let candidate = TokenKind::ALL.into_iter().find_map(|kind| {
            let rest = after_open.strip_prefix(kind.as_str())?.strip_prefix(CLOSE)?;
            Some((kind, rest))
        });

        if let Some((kind, rest)) = candidate {
            return Some((&text[..start], kind, rest));
        }

        // Step past one brace so runs like `{{{{NAME}}` still match the inner token.
        offset = start + 1;
    }

    None
}

/// Nearest multiple of `increment`, halves rounded up; non-positive increments leave the value as is.
fn round_to_increment(value: f64, increment: f64) -> f64 {
    if !increment.is_finite() || increment <= 0.0 {
        return value;
    }
    crate::format::round_half_up(value / increment) * increment
}

fn approx(value: f64) -> String {
    format!("{APPROX_PREFIX}{}", format_currency_whole(value))
}
