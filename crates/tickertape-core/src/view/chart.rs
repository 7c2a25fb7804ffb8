use serde::Serialize;

use crate::DailyRecord;

pub const CLOSE_PRICE_LABEL: &str = "Close Price";

/// Line-chart input: one x label and one closing price per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Builds the closing-price series from the table's sorted rows,
    /// reading them back to front.
    pub fn from_sorted(records: &[DailyRecord]) -> Self {
        let (labels, values) = records
            .iter()
            .rev()
            .map(|record| (record.date.clone(), record.close))
            .unzip();

        Self {
            label: String::from(CLOSE_PRICE_LABEL),
            labels,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lowest and highest finite value, or `None` when nothing is plottable.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((low, high)) => Some((low.min(value), high.max(value))),
            })
    }
}
