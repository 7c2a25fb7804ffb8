use std::sync::Arc;

use tickertape_core::{DailySeriesSource, HttpClient};

use crate::error::WebError;
use crate::render::PageRenderer;

/// Shared, read-only application state handed to every handler.
pub struct AppState {
    /// Backs `/api/stocks`.
    pub source: Arc<dyn DailySeriesSource>,
    /// Used by the page to call the proxy endpoint.
    pub view_client: Arc<dyn HttpClient>,
    pub proxy_endpoint: String,
    /// Symbol shown on the page.
    pub symbol: String,
    pub renderer: PageRenderer,
}

impl AppState {
    pub fn new(
        source: Arc<dyn DailySeriesSource>,
        view_client: Arc<dyn HttpClient>,
        proxy_endpoint: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<Arc<Self>, WebError> {
        Ok(Arc::new(Self {
            source,
            view_client,
            proxy_endpoint: proxy_endpoint.into(),
            symbol: symbol.into(),
            renderer: PageRenderer::new()?,
        }))
    }
}
