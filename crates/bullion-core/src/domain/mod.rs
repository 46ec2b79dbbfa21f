//! # Domain Models
//!
//! Canonical types shared by the feed pipeline, formatters and cards.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated instrument symbol |
//! | [`UtcDateTime`] | Leniently parsed UTC instant |
//! | [`QuoteRecord`] | Fields extracted from an upstream payload |
//! | [`QuoteSummary`] | Immutable quote with derived change fields |
//! | [`PricePreference`] | Ask vs last as the "current price" |

mod quote;
mod symbol;
mod timestamp;

pub use quote::{PricePreference, QuoteRecord, QuoteSummary};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
