use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tickertape_core::{Series, DEFAULT_SYMBOL};

use crate::error::ApiError;
use crate::state::AppState;

/// Raw `/api/stocks` query pairs. Repeated keys are allowed; the first
/// `symbol` wins.
#[derive(Debug, Default)]
pub struct StocksQuery {
    pairs: Vec<(String, String)>,
}

impl StocksQuery {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Missing and empty values both fall back to the default symbol.
    pub fn resolved_symbol(&self) -> &str {
        self.pairs
            .iter()
            .find(|(key, _)| key == "symbol")
            .map(|(_, value)| value.as_str())
            .filter(|symbol| !symbol.is_empty())
            .unwrap_or(DEFAULT_SYMBOL)
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/stocks", get(api_stocks))
}

async fn api_stocks(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Series>, ApiError> {
    let query = StocksQuery::new(pairs);
    let symbol = query.resolved_symbol();

    let series = state.source.daily_series(symbol).await.map_err(|error| {
        tracing::warn!(symbol, kind = ?error.kind(), %error, "daily series fetch failed");
        ApiError(error)
    })?;

    tracing::info!(symbol, records = series.len(), "served daily series");
    Ok(Json(series))
}
