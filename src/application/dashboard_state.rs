// Dashboard state container - the only mutable state behind the page
use crate::domain::dashboard::{DashboardView, Dataset};
use crate::domain::metrics::DatedMetric;
use crate::domain::pages::{sort_rows, PageRow, SortField, SortSpec};
use crate::domain::range::{filter_range, DateInterval};
use std::sync::Arc;

const TITLE: &str = "Analytics Dashboard";

/// Holds the selected range and sort spec. Derived views are recomputed from
/// the immutable dataset on every read.
#[derive(Debug, Clone)]
pub struct DashboardState {
    dataset: Arc<Dataset>,
    range: DateInterval,
    sort: SortSpec,
}

impl DashboardState {
    pub fn new(dataset: Arc<Dataset>, range: DateInterval) -> Self {
        Self {
            dataset,
            range,
            sort: SortSpec::default(),
        }
    }

    pub fn set_date_interval(&mut self, interval: DateInterval) {
        self.range = interval;
    }

    /// Apply the header-click toggle rule and return the new spec.
    pub fn set_sort_field(&mut self, field: SortField) -> SortSpec {
        self.sort = self.sort.select(field);
        self.sort
    }

    pub fn visible_time_series(&self) -> Vec<DatedMetric> {
        filter_range(&self.dataset.timeseries, &self.range)
    }

    pub fn visible_page_rows(&self) -> Vec<PageRow> {
        sort_rows(&self.dataset.pages, &self.sort)
    }

    pub fn view(&self, loading: bool) -> DashboardView {
        DashboardView {
            title: TITLE.to_string(),
            dataset_label: self.dataset.label.clone(),
            range: self.range,
            sort: self.sort,
            loading,
            kpis: self.dataset.kpis.clone(),
            timeseries: self.visible_time_series(),
            sources: self.dataset.sources.clone(),
            pages: self.visible_page_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pages::SortDirection;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn dataset() -> Arc<Dataset> {
        Arc::new(Dataset {
            label: "2025-01-01..2025-01-05".to_string(),
            timeseries: (1..=5).map(|d| DatedMetric::new(date(d), 300 + d as u64)).collect(),
            pages: vec![
                PageRow::new("/".to_string(), 8200, 72, 0.42),
                PageRow::new("/pricing".to_string(), 3100, 51, 0.48),
                PageRow::new("/docs".to_string(), 2600, 180, 0.31),
            ],
            ..Dataset::default()
        })
    }

    #[test]
    fn test_range_change_recomputes_series() {
        let mut state = DashboardState::new(dataset(), DateInterval::new(date(1), date(5)));
        assert_eq!(state.visible_time_series().len(), 5);

        state.set_date_interval(DateInterval::new(date(2), date(3)));
        let dates: Vec<NaiveDate> = state.visible_time_series().iter().map(|m| m.date).collect();
        assert_eq!(dates, vec![date(2), date(3)]);
    }

    #[test]
    fn test_sort_field_toggles_and_reorders() {
        let mut state = DashboardState::new(dataset(), DateInterval::new(date(1), date(5)));
        let paths = |state: &DashboardState| -> Vec<String> {
            state.visible_page_rows().into_iter().map(|r| r.path).collect()
        };
        assert_eq!(paths(&state), vec!["/", "/pricing", "/docs"]);

        let spec = state.set_sort_field(SortField::Views);
        assert_eq!(spec.direction, SortDirection::Ascending);
        assert_eq!(paths(&state), vec!["/docs", "/pricing", "/"]);

        let spec = state.set_sort_field(SortField::AvgTime);
        assert_eq!(spec, SortSpec::new(SortField::AvgTime, SortDirection::Descending));
        assert_eq!(paths(&state), vec!["/docs", "/", "/pricing"]);
    }

    #[test]
    fn test_view_carries_state() {
        let state = DashboardState::new(dataset(), DateInterval::new(date(4), date(5)));
        let view = state.view(true);

        assert!(view.loading);
        assert_eq!(view.title, "Analytics Dashboard");
        assert_eq!(view.dataset_label, "2025-01-01..2025-01-05");
        assert_eq!(view.timeseries.len(), 2);
        assert_eq!(view.pages.len(), 3);
        assert_eq!(view.sort, SortSpec::default());
    }
}
