use serde::{Deserialize, Serialize};

use crate::DailyRecord;

/// Ordered daily records for one symbol, keyed by unique `date`.
///
/// Order is whatever the producer supplied until a caller sorts a copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    records: Vec<DailyRecord>,
}

impl Series {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    /// Built-in rows shown when live data cannot be loaded.
    pub fn sample() -> Self {
        Self::new(vec![
            DailyRecord::new("2025-08-21", 242.11, 242.88, 240.34, 242.55, 3_240_064),
            DailyRecord::new("2025-08-20", 241.5, 243.0, 240.0, 241.8, 3_000_000),
            DailyRecord::new("2025-08-19", 240.2, 241.5, 239.0, 240.5, 2_800_000),
        ])
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    /// Keeps the first `limit` records in their current order.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.records.truncate(limit);
        self
    }
}

impl From<Vec<DailyRecord>> for Series {
    fn from(records: Vec<DailyRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<DailyRecord> for Series {
    fn from_iter<I: IntoIterator<Item = DailyRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Series {
    type Item = DailyRecord;
    type IntoIter = std::vec::IntoIter<DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
