use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::data_source::DailySeriesSource;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{DailyRecord, FetchError, ProviderConfig, Series};

const UNEXPECTED_RESPONSE: &str = "Unexpected API response";

/// Fetches `TIME_SERIES_DAILY` from Alpha Vantage and reshapes it into a [`Series`].
#[derive(Clone)]
pub struct AlphaVantageFetcher {
    config: ProviderConfig,
    http_client: Arc<dyn HttpClient>,
}

impl AlphaVantageFetcher {
    pub fn new(config: ProviderConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Fetcher backed by the default reqwest transport.
    pub fn with_config(config: ProviderConfig) -> Self {
        Self::new(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub async fn fetch_daily(&self, symbol: &str) -> Result<Series, FetchError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(FetchError::missing_api_key)?;

        tracing::debug!(
            symbol,
            url = %self.daily_url(symbol, "***"),
            "requesting daily series"
        );

        let request = HttpRequest::get(self.daily_url(symbol, api_key.expose()));
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| FetchError::Transport(e.message().to_owned()))?;

        if !response.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: response.status,
            });
        }

        let series = normalize_daily_series(&response.body)?;
        tracing::debug!(symbol, records = series.len(), "normalized daily series");
        Ok(series)
    }

    fn daily_url(&self, symbol: &str, api_key: &str) -> String {
        format!(
            "{}/query?function=TIME_SERIES_DAILY&symbol={}&apikey={}",
            self.config.base_url,
            urlencoding::encode(symbol),
            api_key
        )
    }
}

impl std::fmt::Debug for AlphaVantageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageFetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DailySeriesSource for AlphaVantageFetcher {
    fn daily_series<'a>(
        &'a self,
        symbol: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Series, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch_daily(symbol))
    }
}

/// Parses a `TIME_SERIES_DAILY` body, keeping the document's entry order.
pub fn normalize_daily_series(body: &str) -> Result<Series, FetchError> {
    let response: AlphaVantageDailyResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::UnexpectedShape(format!("{UNEXPECTED_RESPONSE}: {e}")))?;

    let Some(time_series) = response.time_series else {
        return Err(FetchError::UnexpectedShape(match response.notice() {
            Some(notice) => format!("{UNEXPECTED_RESPONSE}: {notice}"),
            None => String::from(UNEXPECTED_RESPONSE),
        }));
    };

    time_series
        .into_iter()
        .map(|(date, value)| normalize_entry(date, value))
        .collect()
}

fn normalize_entry(date: String, value: Value) -> Result<DailyRecord, FetchError> {
    let bar: AlphaVantageDailyBar = serde_json::from_value(value).map_err(|e| {
        FetchError::UnexpectedShape(format!("{UNEXPECTED_RESPONSE}: entry {date}: {e}"))
    })?;

    Ok(DailyRecord {
        open: parse_price(&bar.open),
        high: parse_price(&bar.high),
        low: parse_price(&bar.low),
        close: parse_price(&bar.close),
        volume: parse_volume(&bar.volume),
        date,
    })
}

// Unparsable prices become NaN instead of failing the whole series.
fn parse_price(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

// Reads the leading run of digits ("3240064.0" is 3240064). No digits reads as 0,
// and a run too long for u64 saturates.
fn parse_volume(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match &unsigned[..digits_end] {
        "" => 0,
        digits => digits.parse().unwrap_or(u64::MAX),
    }
}

#[derive(Debug, Deserialize)]
struct AlphaVantageDailyResponse {
    #[serde(rename = "Time Series (Daily)", default)]
    time_series: Option<Map<String, Value>>,
    #[serde(rename = "Note", default)]
    note: Option<String>,
    #[serde(rename = "Information", default)]
    information: Option<String>,
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
}

impl AlphaVantageDailyResponse {
    fn notice(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AlphaVantageDailyBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}
