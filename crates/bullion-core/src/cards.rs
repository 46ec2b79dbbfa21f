//! Price card view models.
//!
//! Plain data for the presentation layer: every string is already formatted,
//! and a missing quote produces the explicit unavailable variant instead of
//! an empty or zero-filled card.

use serde::Serialize;

use crate::format::{format_change, format_currency, format_currency_whole, format_stat, format_timestamp};
use crate::{QuoteSummary, Symbol};

/// Direction of the change badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

/// Open/high/low/previous close, `-` where upstream had no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketStats {
    pub open: String,
    pub high: String,
    pub low: String,
    pub previous_close: String,
}

impl MarketStats {
    fn from_summary(summary: &QuoteSummary) -> Self {
        Self {
            open: format_stat(summary.open()),
            high: format_stat(summary.high()),
            low: format_stat(summary.low()),
            previous_close: format_stat(summary.previous_close()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidAsk {
    pub bid: String,
    pub ask: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceCardBody {
    pub title: String,
    pub subtitle: String,
    pub headline_label: String,
    pub headline: String,
    pub unit_label: String,
    pub change: String,
    pub direction: ChangeDirection,
    /// Product cards only.
    pub bid_ask: Option<BidAsk>,
    pub stats: MarketStats,
    pub as_of: String,
}

/// Live product or spot price card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceCard {
    Available(PriceCardBody),
    Unavailable { message: String },
}

impl PriceCard {
    /// Card for a sellable product, headlined by the ask.
    pub fn product(summary: Option<&QuoteSummary>, symbol: &Symbol) -> Self {
        let Some(summary) = summary else {
            return Self::Unavailable {
                message: format!("Product pricing ({symbol}) is temporarily unavailable."),
            };
        };

        Self::Available(PriceCardBody {
            title: String::from("Product Price"),
            subtitle: format!("Product pricing ({symbol})"),
            headline_label: String::from("Current Ask Price"),
            headline: format_currency(summary.ask()),
            unit_label: String::from("per unit"),
            change: format_change(summary.change(), summary.change_percent()),
            direction: ChangeDirection::of(summary.change()),
            bid_ask: Some(BidAsk {
                bid: format_currency(summary.bid()),
                ask: format_currency(summary.ask()),
            }),
            stats: MarketStats::from_summary(summary),
            as_of: format_timestamp(summary.timestamp()),
        })
    }

    /// Card for the raw metal spot index, headlined by the last trade.
    pub fn spot(summary: Option<&QuoteSummary>, symbol: &Symbol) -> Self {
        let Some(summary) = summary else {
            return Self::Unavailable {
                message: format!("Spot pricing ({symbol}) is temporarily unavailable."),
            };
        };

        Self::Available(PriceCardBody {
            title: String::from("Spot Price"),
            subtitle: format!("Raw spot index ({symbol})"),
            headline_label: String::from("Current Spot"),
            headline: format_currency(summary.last()),
            unit_label: String::from("per troy ounce (spot)"),
            change: format_change(summary.change(), summary.change_percent()),
            direction: ChangeDirection::of(summary.change()),
            bid_ask: None,
            stats: MarketStats::from_summary(summary),
            as_of: format_timestamp(summary.timestamp()),
        })
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Approximate capital needed for a single unit of the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CapitalRequirementCard {
    Available {
        caption: String,
        amount: String,
        footnote: String,
    },
    Unavailable {
        caption: String,
        message: String,
        hint: String,
    },
}

impl CapitalRequirementCard {
    pub fn new(summary: Option<&QuoteSummary>, symbol: &Symbol) -> Self {
        match summary.filter(|summary| summary.ask() > 0.0) {
            Some(summary) => Self::Available {
                caption: format!("Based on current product ({symbol}) ask price:"),
                amount: format!("≈ {}", format_currency_whole(summary.ask())),
                footnote: format!("{symbol} pricing varies with spot and dealer premiums"),
            },
            None => Self::Unavailable {
                caption: String::from("To purchase a single unit:"),
                message: String::from("Market pricing unavailable"),
                hint: String::from("Please check back later"),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}
