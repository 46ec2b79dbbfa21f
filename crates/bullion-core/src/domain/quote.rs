use serde::Serialize;

/// Which field stands in for "current price" when computing change.
///
/// Product quotes are priced off the dealer ask; spot index quotes off the
/// last trade. When the preferred field is zero the other one is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricePreference {
    Ask,
    Last,
}

/// Record pulled out of an upstream payload, before validation.
///
/// Numeric fields use `0.0` for "absent".
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRecord {
    pub symbol: String,
    pub base_currency: String,
    pub last: f64,
    pub bid: f64,
    pub ask: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub previous_close: f64,
    pub timestamp: String,
}

impl QuoteRecord {
    /// At least one of bid/ask/last carries a price.
    pub fn has_price(&self) -> bool {
        self.bid != 0.0 || self.ask != 0.0 || self.last != 0.0
    }
}

/// Canonical quote snapshot with derived change fields.
///
/// Only [`crate::build_summary`] constructs one, and only when the record has
/// a non-zero bid, ask or last.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    pub(crate) symbol: String,
    pub(crate) base_currency: String,
    pub(crate) last: f64,
    pub(crate) bid: f64,
    pub(crate) ask: f64,
    pub(crate) high: f64,
    pub(crate) low: f64,
    pub(crate) open: f64,
    pub(crate) previous_close: f64,
    pub(crate) timestamp: String,
    pub(crate) change: f64,
    pub(crate) change_percent: f64,
}

impl QuoteSummary {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn last(&self) -> f64 {
        self.last
    }

    pub fn bid(&self) -> f64 {
        self.bid
    }

    pub fn ask(&self) -> f64 {
        self.ask
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn previous_close(&self) -> f64 {
        self.previous_close
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn change(&self) -> f64 {
        self.change
    }

    pub fn change_percent(&self) -> f64 {
        self.change_percent
    }
}
