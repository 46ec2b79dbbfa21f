//! Consumer-facing quote surface.
//!
//! Each call runs fetch → normalize → build exactly once and absorbs every
//! failure into `None`, logging it where it happened. Callers render their
//! "pricing unavailable" branch on `None`.

use std::sync::Arc;

use crate::fetcher::QuoteFetcher;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::{build_summary, normalizer, FeedConfig, PricePreference, QuoteSummary, Symbol};

#[derive(Clone)]
pub struct QuoteFeed {
    fetcher: QuoteFetcher,
    config: FeedConfig,
}

impl QuoteFeed {
    pub fn new(http_client: Arc<dyn HttpClient>, config: FeedConfig) -> Self {
        Self {
            fetcher: QuoteFetcher::new(http_client).with_timeout_ms(config.timeout_ms),
            config,
        }
    }

    /// Feed backed by the reqwest transport.
    pub fn with_reqwest(config: FeedConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Product quote; change is measured from the ask.
    pub async fn product_quote(&self, symbol: &Symbol) -> Option<QuoteSummary> {
        self.quote(symbol, PricePreference::Ask).await
    }

    /// Spot index quote; change is measured from the last trade.
    pub async fn spot_index(&self, symbol: &Symbol) -> Option<QuoteSummary> {
        self.quote(symbol, PricePreference::Last).await
    }

    pub async fn configured_product_quote(&self) -> Option<QuoteSummary> {
        self.product_quote(&self.config.product_symbol).await
    }

    pub async fn configured_spot_index(&self) -> Option<QuoteSummary> {
        self.spot_index(&self.config.spot_symbol).await
    }

    /// One fetch for `symbol`, normalized and built with `preference`.
    pub async fn quote(&self, symbol: &Symbol, preference: PricePreference) -> Option<QuoteSummary> {
        let endpoint = self.config.endpoint_for(symbol);
        let payload = match self.fetcher.fetch(&endpoint, symbol).await {
            Ok(payload) => payload,
            Err(error) => {
                log::error!("{symbol} quote fetch failed: {error}");
                return None;
            }
        };

        let record = normalizer::normalize(&payload, symbol)?;
        build_summary(record, preference)
    }
}
