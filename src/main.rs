// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::clock::{Clock, FixedClock, SystemClock};
use crate::application::dashboard_service::DashboardService;
use crate::application::dataset_repository::DatasetRepository;
use crate::application::loading::LoadingTimer;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::file_repository::FileDatasetRepository;
use crate::infrastructure::sample_repository::SampleDatasetRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;
    let initial_preset = config.dashboard.initial_preset()?;

    // Load the dataset (infrastructure layer)
    let repository: Arc<dyn DatasetRepository> = match &config.dashboard.dataset_path {
        Some(path) => Arc::new(FileDatasetRepository::new(path)),
        None => {
            tracing::info!("No dataset_path configured, using the built-in sample dataset");
            Arc::new(SampleDatasetRepository)
        }
    };
    let dataset = Arc::new(repository.load_dataset().await?);

    let clock: Arc<dyn Clock> = match config.dashboard.anchor_date {
        Some(date) => {
            tracing::info!("Anchoring range presets at {}", date);
            Arc::new(FixedClock(date))
        }
        None => Arc::new(SystemClock),
    };

    // Create services (application layer)
    let dashboard_service = DashboardService::new(
        dataset,
        initial_preset,
        LoadingTimer::new(config.dashboard.loading_delay()),
        clock,
    );

    // Build router (presentation layer)
    let router = build_router(Arc::new(AppState::new(dashboard_service)));

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!("Starting traffic-dashboard service on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
