use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DailyRecord, RecordField, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Suffix appended to the active column header.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Ascending => " ▲",
            Self::Descending => " ▼",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(ValidationError::InvalidDirection {
                value: other.to_owned(),
            }),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub key: RecordField,
    pub direction: SortDirection,
}

impl SortState {
    pub const fn new(key: RecordField, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sort that results from clicking the header of `key`: the active
    /// column flips direction, any other column starts ascending.
    pub fn after_click(self, key: RecordField) -> Self {
        if self.key == key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(RecordField::Date, SortDirection::Descending)
    }
}

/// Returns a sorted copy of `records`. The sort is stable in both
/// directions, so equal rows keep their input order.
pub fn sort_records(records: &[DailyRecord], sort: SortState) -> Vec<DailyRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match sort.direction {
        SortDirection::Ascending => compare_field(a, b, sort.key),
        SortDirection::Descending => compare_field(b, a, sort.key),
    });
    sorted
}

fn compare_field(a: &DailyRecord, b: &DailyRecord, key: RecordField) -> Ordering {
    match (a.numeric(key), b.numeric(key)) {
        // total_cmp places NaN after every number and keeps the order total
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => a.text(key).cmp(&b.text(key)),
    }
}
