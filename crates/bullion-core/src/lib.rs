//! # Bullion Core
//!
//! Live price plumbing for precious-metals content sites.
//!
//! ## Overview
//!
//! - **Fetch** one quote per render from a market-data endpoint whose JSON
//!   shape is not fixed
//! - **Normalize** whatever shape arrives into a [`QuoteRecord`]
//! - **Build** an immutable [`QuoteSummary`] with derived change fields
//! - **Format** prices, changes and timestamps for display
//! - **Resolve** `{{TOKEN}}` placeholders in prose from the summary
//!
//! Every stage that can fail returns `Result`/`Option`; the [`QuoteFeed`]
//! surface logs failures and hands back `None` so pages render their
//! "pricing unavailable" branch instead of breaking.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builder`] | Summary validation and change derivation |
//! | [`cards`] | Price card view models |
//! | [`config`] | Feed endpoint and symbol configuration |
//! | [`domain`] | Symbol, timestamp and quote types |
//! | [`error`] | Validation errors |
//! | [`feed`] | Product and spot quote surface |
//! | [`fetcher`] | Single-shot JSON fetch |
//! | [`format`] | Display formatting |
//! | [`http_client`] | HTTP transport seam |
//! | [`normalizer`] | Payload shape detection and field extraction |
//! | [`tokens`] | Content token resolution |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bullion_core::{resolve_tokens, FeedConfig, QuoteFeed, TokenConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let feed = QuoteFeed::with_reqwest(FeedConfig::default());
//!     let quote = feed.configured_product_quote().await;
//!
//!     let prose = "A single coin costs about {{CAPITAL_REQUIREMENT}}.";
//!     println!("{}", resolve_tokens(prose, quote.as_ref(), &TokenConfig::default()));
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   GET    ┌──────────────┐
//! │  QuoteFeed  │────────▶│ QuoteFetcher │──▶ HttpClient (reqwest)
//! └──────┬──────┘          └──────────────┘
//!        │ serde_json::Value
//!        ▼
//! ┌─────────────┐  QuoteRecord  ┌──────────────┐
//! │ normalizer  │─────────────▶│   builder    │──▶ Option<QuoteSummary>
//! └─────────────┘               └──────────────┘
//!                                        │
//!                       ┌────────────────┼────────────────┐
//!                       ▼                ▼                ▼
//!                    format            cards           tokens
//! ```

pub mod builder;
pub mod cards;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod fetcher;
pub mod format;
pub mod http_client;
pub mod normalizer;
pub mod tokens;

pub use builder::build_summary;
pub use cards::{BidAsk, CapitalRequirementCard, ChangeDirection, MarketStats, PriceCard, PriceCardBody};
pub use config::FeedConfig;
pub use domain::{PricePreference, QuoteRecord, QuoteSummary, Symbol, UtcDateTime};
pub use error::ValidationError;
pub use feed::QuoteFeed;
pub use fetcher::{FetchError, QuoteFetcher};
pub use format::{
    format_change, format_currency, format_currency_whole, format_stat, format_timestamp,
    format_timestamp_in,
};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use normalizer::normalize;
pub use tokens::{find_tokens, has_tokens, resolve_token, resolve_tokens, TokenConfig, TokenKind};
