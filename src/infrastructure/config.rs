use crate::domain::range::RangePreset;
use anyhow::Context;
use chrono::NaiveDate;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOADING_DELAY_MS: i64 = 500;
const DEFAULT_INITIAL_PRESET: &str = "30";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub loading_delay_ms: u64,
    pub initial_preset: String,
    /// JSON or TOML dataset file; the built-in sample is used when unset.
    #[serde(default)]
    pub dataset_path: Option<String>,
    /// Pin "today" to a fixed date instead of the local clock.
    #[serde(default)]
    pub anchor_date: Option<NaiveDate>,
}

impl DashboardSettings {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn initial_preset(&self) -> anyhow::Result<RangePreset> {
        RangePreset::parse(&self.initial_preset).with_context(|| {
            format!(
                "dashboard.initial_preset must be one of 7, 30 or 90, got {:?}",
                self.initial_preset
            )
        })
    }
}

/// Load `config/dashboard.*` (optional) overlaid with `DASHBOARD__*` env vars.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        );

    build_app_config(builder)
}

fn build_app_config(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<AppConfig> {
    let settings = builder
        .set_default("server.bind_address", DEFAULT_BIND_ADDRESS)?
        .set_default("dashboard.loading_delay_ms", DEFAULT_LOADING_DELAY_MS)?
        .set_default("dashboard.initial_preset", DEFAULT_INITIAL_PRESET)?
        .build()?;

    Ok(settings.try_deserialize()?)
}
