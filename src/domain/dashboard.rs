// Dashboard domain model - source dataset, computed views and stream events
use super::metrics::{DatedMetric, KpiSummary, TrafficSource};
use super::pages::{PageRow, SortSpec};
use super::range::DateInterval;
use std::collections::HashSet;

/// Static data the dashboard is computed from. Loaded once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub label: String,
    pub kpis: KpiSummary,
    pub timeseries: Vec<DatedMetric>,
    pub sources: Vec<TrafficSource>,
    pub pages: Vec<PageRow>,
}

impl Dataset {
    /// First page path that appears more than once, if any.
    pub fn duplicate_page_path(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.pages
            .iter()
            .map(|page| page.path.as_str())
            .find(|path| !seen.insert(*path))
    }
}

/// Everything a renderer needs to draw the page at one point in time.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub title: String,
    pub dataset_label: String,
    pub range: DateInterval,
    pub sort: SortSpec,
    pub loading: bool,
    pub kpis: KpiSummary,
    pub timeseries: Vec<DatedMetric>,
    pub sources: Vec<TrafficSource>,
    pub pages: Vec<PageRow>,
}

/// Placeholder layout shown while a range change is settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonLayout {
    pub kpi_cards: usize,
    pub charts: usize,
    pub table_rows: usize,
}

impl SkeletonLayout {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            kpi_cards: 4,
            charts: 2,
            table_rows: dataset.pages.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DashboardEvent {
    Skeleton(SkeletonLayout),
    Snapshot(Box<DashboardView>),
    Complete { duration_ms: i64 },
}
