//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DailyRecord`] | One trading day of OHLCV prices |
//! | [`RecordField`] | Column key of a record, used for sorting and headers |
//! | [`Series`] | Ordered, date-unique records for one symbol |
//!
//! Records are plain values: nothing here validates price bounds, so
//! whatever the provider sends (including `NaN` prices) flows through.

mod record;
mod series;

pub use record::{DailyRecord, RecordField};
pub use series::Series;
