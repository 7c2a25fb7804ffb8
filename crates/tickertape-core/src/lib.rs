//! # Tickertape Core
//!
//! Daily stock prices from Alpha Vantage, normalized into a fixed record
//! shape, plus the view model behind the sortable table and price chart.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Alpha Vantage `TIME_SERIES_DAILY` fetcher |
//! | [`config`] | Provider configuration injected at start-up |
//! | [`data_source`] | Daily series source trait |
//! | [`domain`] | `DailyRecord`, `RecordField`, `Series` |
//! | [`error`] | Fetch and validation errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`view`] | View state machine, sorting, chart series |
//!
//! ## Data flow
//!
//! ```text
//! view::load_view ──▶ GET /api/stocks ──▶ DailySeriesSource ──▶ Alpha Vantage
//!        ▲                                        │
//!        └──────────── JSON records ◀─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickertape_core::{AlphaVantageFetcher, ApiKey, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProviderConfig::new(ApiKey::new(std::env::var("ALPHA_VANTAGE_API_KEY")?));
//!     let fetcher = AlphaVantageFetcher::with_config(config);
//!
//!     let series = fetcher.fetch_daily("IBM").await?;
//!     for record in &series {
//!         println!("{} close={:.2}", record.date, record.close);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod view;

pub use adapters::{normalize_daily_series, AlphaVantageFetcher};
pub use config::{ApiKey, ProviderConfig, DEFAULT_PROVIDER_URL};
pub use data_source::{DailySeriesSource, DEFAULT_SYMBOL};
pub use domain::{DailyRecord, RecordField, Series};
pub use error::{FetchError, FetchErrorKind, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use view::{
    load_view, ChartSeries, SortDirection, SortState, ViewState, ViewStatus, READY_ROW_LIMIT,
};
