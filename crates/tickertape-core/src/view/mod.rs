//! Table/chart view model.
//!
//! A [`ViewState`] moves `Loading -> Ready` or `Loading -> Error` once, via
//! [`load_view`], and afterwards only changes its [`SortState`] in response
//! to header clicks. Rendering reads [`ViewState::sorted_records`] and
//! [`ViewState::chart_series`].

mod chart;
mod loader;
mod sort;
mod state;

pub use chart::{ChartSeries, CLOSE_PRICE_LABEL};
pub use loader::{decode_proxy_body, load_view, proxy_url};
pub use sort::{sort_records, SortDirection, SortState};
pub use state::{ViewState, ViewStatus, READY_ROW_LIMIT};
