use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tickertape_core::{load_view, SortState};

use crate::error::PageError;
use crate::state::AppState;

/// Sort carried by header links, e.g. `/?sort=close&dir=asc`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    dir: Option<String>,
}

impl PageQuery {
    /// `None` unless both parameters parse; the view then keeps its default sort.
    pub fn sort_state(&self) -> Option<SortState> {
        let key = self.sort.as_deref()?.parse().ok()?;
        let direction = self.dir.as_deref()?.parse().ok()?;
        Some(SortState::new(key, direction))
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(stock_page))
}

async fn stock_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let view = load_view(state.view_client.as_ref(), &state.proxy_endpoint, &state.symbol).await;
    let view = match query.sort_state() {
        Some(sort) => view.with_sort(sort),
        None => view,
    };
    state
        .renderer
        .render_page(&view, &state.symbol)
        .map(Html)
        .map_err(PageError)
}
