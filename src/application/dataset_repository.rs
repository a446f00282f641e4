// Repository trait for loading the dashboard dataset
use crate::domain::dashboard::Dataset;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Load the full dataset the dashboard is computed from
    async fn load_dataset(&self) -> anyhow::Result<Dataset>;
}
