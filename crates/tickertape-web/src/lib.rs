//! # Tickertape Web
//!
//! axum server with two routes:
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /api/stocks?symbol=<SYMBOL>` | 200 JSON records, or 500 `{"error": ..}` |
//! | `GET /?sort=<field>&dir=<asc\|desc>` | HTML table and closing-price chart |

pub mod cli;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, PageError, WebError};
pub use state::AppState;

/// Full application router with request tracing.
pub fn app(state: Arc<AppState>) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
