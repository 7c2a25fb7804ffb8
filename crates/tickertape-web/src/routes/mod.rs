pub mod page;
pub mod stocks;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Assemble the page and API routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(page::routes()).merge(stocks::routes())
}
