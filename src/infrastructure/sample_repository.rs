// Built-in sample dataset used when no dataset file is configured
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dashboard::Dataset;
use crate::domain::metrics::{DatedMetric, KpiDeltas, KpiSummary, TrafficSource};
use crate::domain::pages::PageRow;
use async_trait::async_trait;
use chrono::NaiveDate;

const DAILY_ACTIVE_USERS: [(u32, u64); 30] = [
    (1, 320),
    (2, 305),
    (3, 285),
    (4, 310),
    (5, 295),
    (6, 340),
    (7, 355),
    (8, 330),
    (9, 315),
    (10, 325),
    (11, 345),
    (12, 360),
    (13, 375),
    (14, 350),
    (15, 365),
    (16, 380),
    (17, 395),
    (18, 385),
    (19, 370),
    (20, 390),
    (21, 405),
    (22, 420),
    (23, 410),
    (24, 425),
    (25, 440),
    (26, 435),
    (27, 450),
    (28, 465),
    (29, 455),
    (30, 470),
];

const SOURCES: [(&str, u64); 5] = [
    ("Direct", 5200),
    ("Organic", 4700),
    ("Paid", 3600),
    ("Referral", 2100),
    ("Social", 1300),
];

const PAGES: [(&str, u64, u64, f64); 6] = [
    ("/", 8200, 72, 0.42),
    ("/pricing", 3100, 51, 0.48),
    ("/docs", 2600, 180, 0.31),
    ("/features", 2100, 95, 0.38),
    ("/about", 1800, 65, 0.45),
    ("/contact", 1200, 45, 0.52),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDatasetRepository;

#[async_trait]
impl DatasetRepository for SampleDatasetRepository {
    async fn load_dataset(&self) -> anyhow::Result<Dataset> {
        Ok(sample_dataset())
    }
}

/// Thirty days of January 2025 traffic.
pub fn sample_dataset() -> Dataset {
    let timeseries = DAILY_ACTIVE_USERS
        .iter()
        .filter_map(|&(day, dau)| {
            NaiveDate::from_ymd_opt(2025, 1, day).map(|date| DatedMetric::new(date, dau))
        })
        .collect();

    let sources = SOURCES
        .iter()
        .map(|&(name, sessions)| TrafficSource::new(name.to_string(), sessions))
        .collect();

    let pages = PAGES
        .iter()
        .map(|&(path, views, avg_time, bounce)| {
            PageRow::new(path.to_string(), views, avg_time, bounce)
        })
        .collect();

    Dataset {
        label: "2025-01-01..2025-01-30".to_string(),
        kpis: KpiSummary {
            total_users: 12450,
            active_users: 3120,
            sessions: 18900,
            conversion: 3.7,
            deltas: KpiDeltas {
                total_users: 5.1,
                active_users: -1.2,
                sessions: 2.3,
                conversion: 0.4,
            },
        },
        timeseries,
        sources,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_dataset_shape() {
        let dataset = SampleDatasetRepository.load_dataset().await.unwrap();

        assert_eq!(dataset.timeseries.len(), 30);
        assert_eq!(dataset.sources.len(), 5);
        assert_eq!(dataset.pages.len(), 6);
        assert_eq!(dataset.duplicate_page_path(), None);
        assert_eq!(
            dataset.timeseries.first().map(|m| m.date),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(dataset.timeseries.last().map(|m| m.value), Some(470));
    }
}
