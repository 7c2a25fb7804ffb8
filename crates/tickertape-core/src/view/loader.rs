use serde_json::Value;

use crate::http_client::{HttpClient, HttpRequest};
use crate::view::state::ViewState;
use crate::Series;

/// Proxy endpoint URL for `symbol`.
pub fn proxy_url(endpoint: &str, symbol: &str) -> String {
    format!("{endpoint}?symbol={}", urlencoding::encode(symbol))
}

/// Performs the view's single load against the proxy endpoint.
///
/// Never fails: transport errors, undecodable bodies, and `{"error": ..}`
/// payloads all end in [`ViewStatus::Error`](crate::view::ViewStatus::Error)
/// with the sample series. The HTTP status is not consulted.
pub async fn load_view(client: &dyn HttpClient, endpoint: &str, symbol: &str) -> ViewState {
    let outcome = fetch_series(client, &proxy_url(endpoint, symbol)).await;
    if let Err(message) = &outcome {
        tracing::warn!(symbol, error = %message, "stock load failed, showing sample data");
    }
    ViewState::loading().resolve(outcome)
}

async fn fetch_series(client: &dyn HttpClient, url: &str) -> Result<Series, String> {
    let response = client
        .execute(HttpRequest::get(url))
        .await
        .map_err(|e| e.message().to_owned())?;
    decode_proxy_body(&response.body)
}

/// Decodes a proxy response body into records or the reported error text.
pub fn decode_proxy_body(body: &str) -> Result<Series, String> {
    let payload: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;

    match payload.get("error") {
        Some(Value::Null) | None => {}
        Some(Value::String(message)) => return Err(message.clone()),
        Some(other) => return Err(other.to_string()),
    }

    serde_json::from_value(payload).map_err(|e| e.to_string())
}
