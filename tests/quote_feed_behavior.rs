//! Behavior-driven tests for the quote feed
//!
//! These tests verify HOW a page render gets its price data: one request per
//! call, tolerant payload parsing, and a quiet `None` whenever upstream lets
//! us down.

use bullion_core::{
    format_change, CapitalRequirementCard, FeedConfig, HttpClient, HttpError, HttpRequest,
    HttpResponse, NoopHttpClient, PriceCard, QuoteFeed, Symbol,
};
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    fn responding(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn json(body: serde_json::Value) -> Arc<Self> {
        Self::responding(Ok(HttpResponse::ok_json(body.to_string())))
    }

    fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

fn feed_with(client: Arc<RecordingHttpClient>) -> QuoteFeed {
    QuoteFeed::new(client, FeedConfig::default())
}

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

fn saev_payload() -> serde_json::Value {
    json!({
        "symbol": "SAEV",
        "baseCurrency": "USD",
        "last": 34.9,
        "bid": 34.8,
        "ask": 35.0,
        "high": 35.2,
        "low": 34.6,
        "open": 34.9,
        "previousClose": 34.5,
        "timestamp": "2025-12-12 17:18:12Z"
    })
}

// =============================================================================
// Quote Feed: Request Contract
// =============================================================================

#[tokio::test]
async fn when_product_quote_is_requested_exactly_one_json_get_is_sent() {
    // Given: An upstream that answers with a product array
    let client = RecordingHttpClient::json(json!([saev_payload()]));
    let feed = feed_with(client.clone());

    // When: A page render asks for the product quote
    let quote = feed.product_quote(&symbol("SAEV")).await;

    // Then: One request went out, asking for JSON about the symbol
    assert!(quote.is_some());
    let requests = client.recorded_requests();
    assert_eq!(requests.len(), 1, "no retries or follow-up calls");
    assert_eq!(
        requests[0].url,
        "https://api.monex.com/api/v2/Metals/spot/summary?metals=SAEV"
    );
    assert_eq!(
        requests[0].headers.get("accept").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(requests[0].headers.len(), 1, "only the Accept header is sent");
    assert_eq!(requests[0].timeout_ms, None);
}

#[tokio::test]
async fn when_timeout_is_configured_it_reaches_the_transport() {
    // Given: A feed configured with an explicit timeout
    let client = RecordingHttpClient::json(json!([saev_payload()]));
    let feed = QuoteFeed::new(
        client.clone(),
        FeedConfig::default().with_timeout_ms(Some(1_500)),
    );

    // When: A quote is fetched
    let _ = feed.configured_product_quote().await;

    // Then: The request carries it
    assert_eq!(client.recorded_requests()[0].timeout_ms, Some(1_500));
}

// =============================================================================
// Quote Feed: Derived Fields
// =============================================================================

#[tokio::test]
async fn when_product_quote_arrives_change_is_measured_from_ask() {
    // Given: ask 35.00 against a 34.50 previous close
    let feed = feed_with(RecordingHttpClient::json(json!({"data": [saev_payload()]})));

    // When: The product quote is built
    let quote = feed
        .product_quote(&symbol("SAEV"))
        .await
        .expect("quote should be available");

    // Then: Change uses the ask and formats for the price card
    assert!((quote.change() - 0.50).abs() < 1e-9);
    assert!((quote.change_percent() - 1.449).abs() < 1e-3);
    assert_eq!(
        format_change(quote.change(), quote.change_percent()),
        "+$0.50 (+1.45%)"
    );
}

#[tokio::test]
async fn when_spot_index_arrives_change_is_measured_from_last() {
    // Given: A spot payload keyed by symbol where last and ask differ
    let feed = feed_with(RecordingHttpClient::json(json!({
        "SBSPOT": {"metal": "SBSPOT", "last": 31.0, "ask": 31.4, "previousClose": 30.0}
    })));

    // When: The spot index is fetched
    let quote = feed
        .spot_index(&symbol("SBSPOT"))
        .await
        .expect("quote should be available");

    // Then: Change follows the last trade, not the ask
    assert!((quote.change() - 1.0).abs() < 1e-9);
    assert_eq!(quote.symbol(), "SBSPOT");
}

#[tokio::test]
async fn when_previous_close_is_missing_change_is_zero() {
    // Given: A quote without any previous close
    let feed = feed_with(RecordingHttpClient::json(json!({"ask": 35.0, "last": 34.9})));

    // When: The product quote is built
    let quote = feed
        .product_quote(&symbol("SAEV"))
        .await
        .expect("quote should be available");

    // Then: No change is implied
    assert_eq!(quote.change(), 0.0);
    assert_eq!(quote.change_percent(), 0.0);
    assert_eq!(quote.base_currency(), "USD");
}

// =============================================================================
// Quote Feed: Failure Absorption
// =============================================================================

#[tokio::test]
async fn when_upstream_returns_500_the_product_card_is_unavailable() {
    // Given: An upstream outage
    let feed = feed_with(RecordingHttpClient::responding(Ok(HttpResponse::new(
        500,
        "internal error",
    ))));

    // When: The page fetches and renders its card
    let quote = feed.product_quote(&symbol("SAEV")).await;
    let card = PriceCard::product(quote.as_ref(), &symbol("SAEV"));

    // Then: The unavailable branch renders, nothing panics
    assert!(quote.is_none());
    assert!(!card.is_available());
    assert!(!CapitalRequirementCard::new(quote.as_ref(), &symbol("SAEV")).is_available());
}

#[tokio::test]
async fn when_request_times_out_the_quote_is_none() {
    // Given: A transport that times out
    let feed = feed_with(RecordingHttpClient::responding(Err(HttpError::timeout(
        "request timeout",
    ))));

    // When/Then: The feed absorbs it
    assert!(feed.product_quote(&symbol("SAEV")).await.is_none());
    assert!(feed.spot_index(&symbol("SBSPOT")).await.is_none());
}

#[tokio::test]
async fn when_body_is_not_json_the_quote_is_none() {
    // Given: An HTML error page served with 200
    let feed = feed_with(RecordingHttpClient::responding(Ok(HttpResponse::ok_json(
        "<html>maintenance</html>",
    ))));

    // When/Then
    assert!(feed.product_quote(&symbol("SAEV")).await.is_none());
}

#[tokio::test]
async fn when_payload_shape_is_unrecognized_the_quote_is_none() {
    // Given: Valid JSON with nothing that looks like a quote
    let feed = QuoteFeed::new(Arc::new(NoopHttpClient), FeedConfig::default());

    // When/Then
    assert!(feed.configured_product_quote().await.is_none());
}

#[tokio::test]
async fn when_all_prices_are_zero_the_quote_is_none() {
    // Given: A record with highs and lows but zero bid/ask/last
    let feed = feed_with(RecordingHttpClient::json(json!([{
        "symbol": "SAEV",
        "bid": 0,
        "ask": 0,
        "last": 0,
        "high": 35.2,
        "low": 34.6,
        "previousClose": 34.5
    }])));

    // When/Then: No zero-filled summary leaks out
    assert!(feed.product_quote(&symbol("SAEV")).await.is_none());
}

// =============================================================================
// Quote Feed: Shape Tolerance
// =============================================================================

#[tokio::test]
async fn when_upstream_changes_shape_the_summary_stays_the_same() {
    // Given: The same quote in each accepted shape
    let shapes = [
        json!([saev_payload()]),
        saev_payload(),
        json!({"data": [saev_payload()]}),
        json!({"data": {"SAEV": saev_payload()}}),
    ];

    // When: Each is fetched through the feed
    let mut summaries = Vec::new();
    for shape in shapes {
        let feed = feed_with(RecordingHttpClient::json(shape));
        summaries.push(
            feed.product_quote(&symbol("SAEV"))
                .await
                .expect("every shape should resolve"),
        );
    }

    // Then: Every summary is identical
    for summary in &summaries[1..] {
        assert_eq!(summary, &summaries[0]);
    }
}
