// File-backed dataset repository (JSON or TOML, picked by extension)
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dashboard::Dataset;
use crate::domain::metrics::{DatedMetric, KpiDeltas, KpiSummary, TrafficSource};
use crate::domain::pages::PageRow;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML dataset: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported dataset format {0:?}, expected .json or .toml")]
    UnsupportedFormat(String),

    #[error("page path {0:?} appears more than once")]
    DuplicatePage(String),

    #[error("bounce rate {bounce} for page {path:?} is outside [0, 1]")]
    BounceOutOfRange { path: String, bounce: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    #[serde(default)]
    range: String,
    kpis: RawKpis,
    #[serde(default)]
    timeseries: Vec<RawPoint>,
    #[serde(default)]
    sources: Vec<RawSource>,
    #[serde(default)]
    pages: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKpis {
    total_users: u64,
    active_users: u64,
    sessions: u64,
    conversion: f64,
    #[serde(default)]
    deltas: RawDeltas,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDeltas {
    #[serde(default)]
    total_users: f64,
    #[serde(default)]
    active_users: f64,
    #[serde(default)]
    sessions: f64,
    #[serde(default)]
    conversion: f64,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    date: NaiveDate,
    dau: u64,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: String,
    sessions: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    path: String,
    views: u64,
    avg_time: u64,
    bounce: f64,
}

impl RawDataset {
    fn into_dataset(self) -> Result<Dataset, DatasetError> {
        if let Some(page) = self.pages.iter().find(|p| !(0.0..=1.0).contains(&p.bounce)) {
            return Err(DatasetError::BounceOutOfRange {
                path: page.path.clone(),
                bounce: page.bounce,
            });
        }

        let dataset = Dataset {
            label: self.range,
            kpis: KpiSummary {
                total_users: self.kpis.total_users,
                active_users: self.kpis.active_users,
                sessions: self.kpis.sessions,
                conversion: self.kpis.conversion,
                deltas: KpiDeltas {
                    total_users: self.kpis.deltas.total_users,
                    active_users: self.kpis.deltas.active_users,
                    sessions: self.kpis.deltas.sessions,
                    conversion: self.kpis.deltas.conversion,
                },
            },
            timeseries: self
                .timeseries
                .into_iter()
                .map(|p| DatedMetric::new(p.date, p.dau))
                .collect(),
            sources: self
                .sources
                .into_iter()
                .map(|s| TrafficSource::new(s.name, s.sessions))
                .collect(),
            pages: self
                .pages
                .into_iter()
                .map(|p| PageRow::new(p.path, p.views, p.avg_time, p.bounce))
                .collect(),
        };

        if let Some(path) = dataset.duplicate_page_path() {
            return Err(DatasetError::DuplicatePage(path.to_string()));
        }

        Ok(dataset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatasetFormat {
    Json,
    Toml,
}

impl DatasetFormat {
    fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(DatasetError::UnsupportedFormat(extension)),
        }
    }
}

/// Parse dataset text in the given format.
fn parse_dataset(contents: &str, format: DatasetFormat) -> Result<Dataset, DatasetError> {
    let raw: RawDataset = match format {
        DatasetFormat::Json => serde_json::from_str(contents)?,
        DatasetFormat::Toml => toml::from_str(contents)?,
    };
    raw.into_dataset()
}

#[derive(Debug, Clone)]
pub struct FileDatasetRepository {
    path: PathBuf,
}

impl FileDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<Dataset, DatasetError> {
        let format = DatasetFormat::from_path(&self.path)?;
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DatasetError::Io {
                path: self.path.clone(),
                source,
            })?;

        parse_dataset(&contents, format)
    }
}

#[async_trait]
impl DatasetRepository for FileDatasetRepository {
    async fn load_dataset(&self) -> anyhow::Result<Dataset> {
        let dataset = self.read().await?;
        tracing::info!(
            "Loaded dataset {:?} from {}: {} points, {} pages",
            dataset.label,
            self.path.display(),
            dataset.timeseries.len(),
            dataset.pages.len()
        );
        Ok(dataset)
    }
}
