use crate::view::chart::ChartSeries;
use crate::view::sort::{sort_records, SortState};
use crate::{DailyRecord, RecordField, Series};

/// Rows kept from a successful load.
pub const READY_ROW_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Ready,
    /// Load failed; the sample series is displayed instead.
    Error { message: String },
}

/// Everything the table and chart render from.
///
/// Values are never mutated in place: every fetch outcome or header click
/// produces a new `ViewState`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    records: Series,
    sort: SortState,
    status: ViewStatus,
}

impl ViewState {
    /// Initial state: no rows, newest dates first.
    pub fn loading() -> Self {
        Self {
            records: Series::default(),
            sort: SortState::default(),
            status: ViewStatus::Loading,
        }
    }

    /// Applies a load outcome, keeping the current sort.
    pub fn resolve(self, outcome: Result<Series, String>) -> Self {
        match outcome {
            Ok(series) => Self {
                records: series.truncated(READY_ROW_LIMIT),
                status: ViewStatus::Ready,
                ..self
            },
            Err(message) => Self {
                records: Series::sample(),
                status: ViewStatus::Error { message },
                ..self
            },
        }
    }

    pub fn with_header_click(self, key: RecordField) -> Self {
        let sort = self.sort.after_click(key);
        self.with_sort(sort)
    }

    pub fn with_sort(self, sort: SortState) -> Self {
        Self { sort, ..self }
    }

    /// Rows in load order; sorting never touches them.
    pub fn records(&self) -> &Series {
        &self.records
    }

    pub const fn sort(&self) -> SortState {
        self.sort
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            ViewStatus::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn sorted_records(&self) -> Vec<DailyRecord> {
        sort_records(self.records.records(), self.sort)
    }

    // Reversal is fixed: chronological only while the table is sorted by date descending.
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries::from_sorted(&self.sorted_records())
    }

    pub fn header_label(&self, key: RecordField) -> String {
        if self.sort.key == key {
            format!("{}{}", key.label(), self.sort.direction.marker())
        } else {
            key.label().to_owned()
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::sort::SortDirection;

    fn days(count: usize) -> Series {
        (0..count)
            .map(|day| {
                let date = format!("2025-07-{:02}", 31 - day);
                DailyRecord::new(date, 1.0, 1.0, 1.0, day as f64, 1)
            })
            .collect()
    }

    #[test]
    fn loading_starts_empty_and_sorted_by_date_descending() {
        let state = ViewState::loading();
        assert!(state.is_loading());
        assert!(state.records().is_empty());
        assert_eq!(state.sort(), SortState::new(RecordField::Date, SortDirection::Descending));
        assert!(state.chart_series().is_empty());
    }

    #[test]
    fn ready_keeps_the_first_ten_rows() {
        let state = ViewState::loading().resolve(Ok(days(15)));
        assert_eq!(state.status(), &ViewStatus::Ready);
        assert_eq!(state.records().len(), 10);
        assert_eq!(state.records().records()[0].date, "2025-07-31");
        assert_eq!(state.records().records()[9].date, "2025-07-22");
    }

    #[test]
    fn failure_swaps_in_the_sample() {
        let state = ViewState::loading().resolve(Err(String::from("boom")));
        assert_eq!(state.error_message(), Some("boom"));
        assert_eq!(state.records(), &Series::sample());
    }

    #[test]
    fn sorting_leaves_held_records_alone() {
        let state = ViewState::loading()
            .resolve(Ok(Series::sample()))
            .with_header_click(RecordField::Volume);

        let sorted = state.sorted_records();
        assert_eq!(sorted[0].date, "2025-08-19");
        assert_eq!(state.records().records()[0].date, "2025-08-21");
    }

    #[test]
    fn header_label_marks_only_the_active_column() {
        let state = ViewState::loading();
        assert_eq!(state.header_label(RecordField::Date), "DATE ▼");
        assert_eq!(state.header_label(RecordField::Close), "CLOSE");

        let state = state.with_header_click(RecordField::Close);
        assert_eq!(state.header_label(RecordField::Close), "CLOSE ▲");
        assert_eq!(state.header_label(RecordField::Date), "DATE");
    }

    #[test]
    fn chart_is_chronological_for_default_sort() {
        let state = ViewState::loading().resolve(Ok(Series::sample()));
        assert_eq!(
            state.chart_series().labels,
            ["2025-08-19", "2025-08-20", "2025-08-21"]
        );
    }

    #[test]
    fn chart_follows_reversed_table_order_for_other_keys() {
        let state = ViewState::loading()
            .resolve(Ok(days(3)))
            .with_header_click(RecordField::Close)
            .with_header_click(RecordField::Close);

        // close descending puts 2025-07-29 (close 2.0) first; the chart reverses it
        assert_eq!(
            state.chart_series().labels,
            ["2025-07-31", "2025-07-30", "2025-07-29"]
        );
    }
}
