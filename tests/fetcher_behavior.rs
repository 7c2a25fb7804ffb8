//! Behavior-driven tests for the Alpha Vantage fetcher
//!
//! These tests verify HOW a provider payload becomes a series, and how each
//! failure mode surfaces, without touching the network.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tickertape_core::{
    AlphaVantageFetcher, ApiKey, DailySeriesSource, FetchError, FetchErrorKind, HttpClient,
    HttpError, HttpRequest, HttpResponse, ProviderConfig,
};

struct ScriptedHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    fn new(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn request_count(&self) -> usize {
        self.requests.lock().expect("lock").len()
    }

    fn last_url(&self) -> Option<String> {
        self.requests
            .lock()
            .expect("lock")
            .last()
            .map(|request| request.url.clone())
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests.lock().expect("lock").push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

fn fetcher_with(client: &Arc<ScriptedHttpClient>, key: Option<&str>) -> AlphaVantageFetcher {
    let config =
        ProviderConfig::new(key.and_then(ApiKey::new)).with_base_url("https://provider.test");
    AlphaVantageFetcher::new(config, Arc::clone(client) as Arc<dyn HttpClient>)
}

fn daily_payload(days: &[(&str, f64, f64, f64, f64, u64)]) -> String {
    let entries = days
        .iter()
        .map(|(date, open, high, low, close, volume)| {
            format!(
                r#""{date}": {{"1. open": "{open:.4}", "2. high": "{high:.4}", "3. low": "{low:.4}", "4. close": "{close:.4}", "5. volume": "{volume}"}}"#
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{"Meta Data": {{"1. Information": "Daily Prices", "2. Symbol": "IBM"}}, "Time Series (Daily)": {{{entries}}}}}"#
    )
}

// =============================================================================
// Fetcher: Valid Payloads
// =============================================================================

#[tokio::test]
async fn when_provider_returns_n_days_fetcher_returns_n_parsed_records() {
    // Given: A provider payload with four trading days
    let days = [
        ("2025-08-21", 242.11, 242.88, 240.34, 242.55, 3_240_064),
        ("2025-08-20", 241.5, 243.0, 240.0, 241.8, 3_000_000),
        ("2025-08-19", 240.2, 241.5, 239.0, 240.5, 2_800_000),
        ("2025-08-18", 239.75, 240.9, 238.125, 240.0, 2_950_100),
    ];
    let client = ScriptedHttpClient::new(Ok(HttpResponse::ok_json(daily_payload(&days))));
    let fetcher = fetcher_with(&client, Some("demo-key"));

    // When: The fetcher loads the daily series
    let series = fetcher.fetch_daily("IBM").await.expect("valid payload");

    // Then: Every entry round-trips to the original numbers, in document order
    assert_eq!(series.len(), days.len());
    for (record, (date, open, high, low, close, volume)) in series.iter().zip(days) {
        assert_eq!(record.date, date);
        assert_eq!(record.open, open);
        assert_eq!(record.high, high);
        assert_eq!(record.low, low);
        assert_eq!(record.close, close);
        assert_eq!(record.volume, volume);
    }
}

#[tokio::test]
async fn when_fetching_through_the_source_trait_the_request_targets_time_series_daily() {
    // Given: The fetcher used behind the source trait
    let client = ScriptedHttpClient::new(Ok(HttpResponse::ok_json(daily_payload(&[]))));
    let source: Arc<dyn DailySeriesSource> = Arc::new(fetcher_with(&client, Some("demo-key")));

    // When: A symbol is requested
    let series = source.daily_series("MSFT").await.expect("empty series is valid");

    // Then: One GET is issued carrying function, symbol, and key
    assert!(series.is_empty());
    assert_eq!(client.request_count(), 1);
    assert_eq!(
        client.last_url().as_deref(),
        Some("https://provider.test/query?function=TIME_SERIES_DAILY&symbol=MSFT&apikey=demo-key")
    );
}

// =============================================================================
// Fetcher: Failure Modes
// =============================================================================

#[tokio::test]
async fn when_api_key_is_missing_no_request_is_sent() {
    // Given: A fetcher without a credential
    let client = ScriptedHttpClient::new(Ok(HttpResponse::ok_json(daily_payload(&[]))));
    let fetcher = fetcher_with(&client, None);

    // When: A fetch is attempted
    let error = fetcher.fetch_daily("IBM").await.expect_err("must fail");

    // Then: It fails with a configuration error before touching the transport
    assert_eq!(error.kind(), FetchErrorKind::Configuration);
    assert_eq!(error.to_string(), "Missing Alpha Vantage API key");
    assert_eq!(client.request_count(), 0);
}

#[tokio::test]
async fn when_one_volume_is_malformed_fetcher_keeps_every_entry() {
    // Given: Two days, one with a decimal volume string
    let body = r#"{"Time Series (Daily)": {
        "2025-08-21": {"1. open": "242.11", "2. high": "242.88", "3. low": "240.34", "4. close": "242.55", "5. volume": "3240064.0"},
        "2025-08-20": {"1. open": "241.50", "2. high": "243.00", "3. low": "240.00", "4. close": "241.80", "5. volume": "3000000"}
    }}"#;
    let client = ScriptedHttpClient::new(Ok(HttpResponse::ok_json(body)));
    let fetcher = fetcher_with(&client, Some("demo-key"));

    // When: The fetch completes
    let series = fetcher.fetch_daily("IBM").await.expect("series survives");

    // Then: Both entries are kept and the volume reads its leading digits
    assert_eq!(series.len(), 2);
    assert_eq!(series.records()[0].volume, 3_240_064);
    assert_eq!(series.records()[1].date, "2025-08-20");
    assert_eq!(series.records()[1].volume, 3_000_000);
}

#[tokio::test]
async fn when_time_series_field_is_absent_fetcher_reports_unexpected_shape() {
    for body in [
        r#"{}"#,
        r#"{"Information": "The **demo** API key is for demo purposes only."}"#,
        r#"{"Error Message": "Invalid API call."}"#,
        r#"{"Meta Data": {"2. Symbol": "IBM"}}"#,
    ] {
        // Given: A successful HTTP status with no time series
        let client = ScriptedHttpClient::new(Ok(HttpResponse::ok_json(body)));
        let fetcher = fetcher_with(&client, Some("demo-key"));

        // When: The fetch completes
        let error = fetcher.fetch_daily("IBM").await.expect_err("no series");

        // Then: The failure is classified as a shape error
        assert_eq!(error.kind(), FetchErrorKind::UnexpectedShape, "body: {body}");
        assert!(error.to_string().starts_with("Unexpected API response"));
    }
}

#[tokio::test]
async fn when_provider_returns_error_status_fetcher_carries_the_code() {
    let client = ScriptedHttpClient::new(Ok(HttpResponse::new(429, "{}")));
    let fetcher = fetcher_with(&client, Some("demo-key"));

    let error = fetcher.fetch_daily("IBM").await.expect_err("status fails");

    assert_eq!(error, FetchError::UpstreamStatus { status: 429 });
    assert_eq!(error.to_string(), "API request failed: 429");
}

#[tokio::test]
async fn when_network_fails_fetcher_reports_transport_error() {
    let client = ScriptedHttpClient::new(Err(HttpError::new("connection failed: refused")));
    let fetcher = fetcher_with(&client, Some("demo-key"));

    let error = fetcher.fetch_daily("IBM").await.expect_err("transport fails");

    assert_eq!(error.kind(), FetchErrorKind::Transport);
    assert_eq!(error.to_string(), "connection failed: refused");
    assert_eq!(client.request_count(), 1, "no retries");
}
