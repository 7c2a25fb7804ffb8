//! Provider adapters.
//!
//! | Adapter | Provider endpoint |
//! |---------|-------------------|
//! | [`AlphaVantageFetcher`] | Alpha Vantage `TIME_SERIES_DAILY` |

pub mod alphavantage;

pub use alphavantage::{normalize_daily_series, AlphaVantageFetcher};
