use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// One trading day of OHLCV data.
///
/// `low <= open, close <= high` is expected from the provider but not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// `YYYY-MM-DD`, unique within a series.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl DailyRecord {
    pub fn new(
        date: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            date: date.into(),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Numeric value of `field`, or `None` for the textual `date` column.
    pub fn numeric(&self, field: RecordField) -> Option<f64> {
        match field {
            RecordField::Date => None,
            RecordField::Open => Some(self.open),
            RecordField::High => Some(self.high),
            RecordField::Low => Some(self.low),
            RecordField::Close => Some(self.close),
            RecordField::Volume => Some(self.volume as f64),
        }
    }

    /// Textual representation of `field`, as used for string comparison.
    pub fn text(&self, field: RecordField) -> String {
        match field {
            RecordField::Date => self.date.clone(),
            RecordField::Volume => self.volume.to_string(),
            other => self.numeric(other).map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

/// Column key of a [`DailyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Date,
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl RecordField {
    /// Table column order.
    pub const ALL: [RecordField; 6] = [
        Self::Date,
        Self::Open,
        Self::High,
        Self::Low,
        Self::Close,
        Self::Volume,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Open => "OPEN",
            Self::High => "HIGH",
            Self::Low => "LOW",
            Self::Close => "CLOSE",
            Self::Volume => "VOLUME",
        }
    }

    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Date)
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidField {
                value: value.to_owned(),
            })
    }
}
