//! Feed configuration.
//!
//! Passed explicitly to [`crate::QuoteFeed`]; there is no global state.
//! Defaults point at the Monex spot summary endpoint with the American Silver
//! Eagle product symbol and the silver spot index.

use crate::{Symbol, ValidationError};

pub const DEFAULT_API_BASE: &str = "https://api.monex.com/api/v2/Metals/spot/summary";
pub const DEFAULT_PRODUCT_SYMBOL: &str = "SAEV";
pub const DEFAULT_SPOT_SYMBOL: &str = "SBSPOT";

pub const ENV_API_BASE: &str = "BULLION_API_BASE";
pub const ENV_PRODUCT_SYMBOL: &str = "BULLION_PRODUCT_SYMBOL";
pub const ENV_SPOT_SYMBOL: &str = "BULLION_SPOT_SYMBOL";
pub const ENV_TIMEOUT_MS: &str = "BULLION_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Summary endpoint; the symbol is appended as `?metals=SYMBOL`.
    pub api_base: String,
    /// Sellable product priced off the ask.
    pub product_symbol: Symbol,
    /// Raw metal spot index priced off the last trade.
    pub spot_symbol: Symbol,
    /// `None` keeps the transport default.
    pub timeout_ms: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base: String::from(DEFAULT_API_BASE),
            product_symbol: Symbol::from_static(DEFAULT_PRODUCT_SYMBOL),
            spot_symbol: Symbol::from_static(DEFAULT_SPOT_SYMBOL),
            timeout_ms: None,
        }
    }
}

impl FeedConfig {
    /// Defaults overridden by any `BULLION_*` variables that are set.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`FeedConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_base) = lookup(ENV_API_BASE) {
            config = config.with_api_base(api_base)?;
        }
        if let Some(symbol) = lookup(ENV_PRODUCT_SYMBOL) {
            config.product_symbol = Symbol::parse(&symbol)?;
        }
        if let Some(symbol) = lookup(ENV_SPOT_SYMBOL) {
            config.spot_symbol = Symbol::parse(&symbol)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let timeout_ms = raw.trim().parse::<u64>().map_err(|_| {
                ValidationError::InvalidEnvValue {
                    name: ENV_TIMEOUT_MS,
                    value: raw.clone(),
                }
            })?;
            config.timeout_ms = Some(timeout_ms);
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Result<Self, ValidationError> {
        let api_base = api_base.into();
        let trimmed = api_base.trim();
        let has_scheme = trimmed.starts_with("https://") || trimmed.starts_with("http://");
        let has_host = trimmed
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());
        if !has_scheme || !has_host {
            return Err(ValidationError::InvalidApiBase { value: api_base });
        }

        self.api_base = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Full summary URL for `symbol`.
    pub fn endpoint_for(&self, symbol: &Symbol) -> String {
        let separator = if self.api_base.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}metals={}",
            self.api_base,
            urlencoding::encode(symbol.as_str())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_endpoint_embeds_symbol() {
        let config = FeedConfig::default();
        assert_eq!(
            config.endpoint_for(&config.product_symbol),
            "https://api.monex.com/api/v2/Metals/spot/summary?metals=SAEV"
        );
    }

    #[test]
    fn default_symbols_are_normalized() {
        let config = FeedConfig::default();
        assert_eq!(
            Symbol::parse(DEFAULT_PRODUCT_SYMBOL).as_ref(),
            Ok(&config.product_symbol)
        );
        assert_eq!(Symbol::parse(DEFAULT_SPOT_SYMBOL).as_ref(), Ok(&config.spot_symbol));
    }

    #[test]
    fn endpoint_appends_to_existing_query() {
        let config = FeedConfig::default()
            .with_api_base("https://example.test/summary?format=json")
            .expect("valid base");
        let symbol = Symbol::parse("SBSPOT").expect("valid");
        assert_eq!(
            config.endpoint_for(&symbol),
            "https://example.test/summary?format=json&metals=SBSPOT"
        );
    }

    #[test]
    fn env_overrides_are_applied() {
        let vars = HashMap::from([
            (ENV_API_BASE, "http://localhost:8080/summary"),
            (ENV_PRODUCT_SYMBOL, "gaek"),
            (ENV_TIMEOUT_MS, "2500"),
        ]);
        let config =
            FeedConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string())).expect("valid");

        assert_eq!(config.api_base, "http://localhost:8080/summary");
        assert_eq!(config.product_symbol.as_str(), "GAEK");
        assert_eq!(config.spot_symbol.as_str(), DEFAULT_SPOT_SYMBOL);
        assert_eq!(config.timeout_ms, Some(2500));
    }

    #[test]
    fn invalid_env_values_are_rejected() {
        let bad_timeout = FeedConfig::from_lookup(|name| {
            (name == ENV_TIMEOUT_MS).then(|| String::from("soon"))
        });
        assert!(matches!(
            bad_timeout,
            Err(ValidationError::InvalidEnvValue { .. })
        ));

        let bad_base =
            FeedConfig::from_lookup(|name| (name == ENV_API_BASE).then(|| String::from("ftp://x")));
        assert!(matches!(bad_base, Err(ValidationError::InvalidApiBase { .. })));
    }
}
