//! Adapter contract for daily price providers.
//!
//! The proxy endpoint only sees this trait, so tests can swap the Alpha
//! Vantage fetcher for an in-memory source.

use std::future::Future;
use std::pin::Pin;

use crate::{FetchError, Series};

/// Symbol used whenever a caller does not name one.
pub const DEFAULT_SYMBOL: &str = "IBM";

pub trait DailySeriesSource: Send + Sync {
    /// Fetches the full daily series for `symbol`. One attempt, no caching.
    fn daily_series<'a>(
        &'a self,
        symbol: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Series, FetchError>> + Send + 'a>>;
}
