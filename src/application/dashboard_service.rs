// Dashboard service - Use cases behind the dashboard's interactive controls
use crate::application::clock::Clock;
use crate::application::dashboard_state::DashboardState;
use crate::application::loading::LoadingTimer;
use crate::domain::dashboard::{DashboardView, Dataset, SkeletonLayout};
use crate::domain::metrics::DatedMetric;
use crate::domain::pages::{PageRow, SortField, SortSpec};
use crate::domain::range::{resolve_preset, CalendarSelection, DateInterval, RangePreset};
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

#[derive(Clone)]
pub struct DashboardService {
    state: Arc<RwLock<DashboardState>>,
    loading: Arc<LoadingTimer>,
    clock: Arc<dyn Clock>,
    skeleton: SkeletonLayout,
}

impl DashboardService {
    pub fn new(
        dataset: Arc<Dataset>,
        initial_preset: RangePreset,
        loading: LoadingTimer,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let range = initial_preset.resolve(clock.today());
        let skeleton = SkeletonLayout::for_dataset(&dataset);

        tracing::info!(
            "Dashboard initialised with {} days ({} to {})",
            initial_preset.days(),
            range.from,
            range.to
        );

        Self {
            state: Arc::new(RwLock::new(DashboardState::new(dataset, range))),
            loading: Arc::new(loading),
            clock,
            skeleton,
        }
    }

    pub async fn snapshot(&self) -> DashboardView {
        let state = self.state.read().await;
        state.view(self.loading.is_loading())
    }

    pub async fn visible_time_series(&self) -> Vec<DatedMetric> {
        self.state.read().await.visible_time_series()
    }

    pub async fn visible_page_rows(&self) -> Vec<PageRow> {
        self.state.read().await.visible_page_rows()
    }

    pub fn skeleton(&self) -> SkeletonLayout {
        self.skeleton
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Apply a quick-range preset. Unknown tags leave the range untouched and
    /// return `None`.
    pub async fn apply_preset(&self, tag: &str) -> Option<DateInterval> {
        let Some(interval) = resolve_preset(tag, self.clock.today()) else {
            tracing::warn!("Ignoring unknown range preset {:?}", tag);
            return None;
        };

        let mut state = self.state.write().await;
        state.set_date_interval(interval);
        // Raised under the write guard so no reader sees the new range idle.
        self.loading.start();
        tracing::debug!(
            "Preset {} selected, {} points visible",
            tag,
            state.visible_time_series().len()
        );
        drop(state);

        tracing::info!("Range set to {} to {}", interval.from, interval.to);
        Some(interval)
    }

    /// Replace the range directly. Any pending loading placeholder is dropped.
    pub async fn set_date_interval(&self, interval: DateInterval) {
        let mut state = self.state.write().await;
        state.set_date_interval(interval);
        self.loading.cancel();
        drop(state);
        tracing::info!("Range set to {} to {}", interval.from, interval.to);
    }

    /// Commit a calendar selection if both ends are present.
    pub async fn select_calendar_range(&self, selection: CalendarSelection) -> Option<DateInterval> {
        match selection.commit() {
            Some(interval) => {
                self.set_date_interval(interval).await;
                Some(interval)
            }
            None => {
                tracing::debug!("Partial calendar selection ignored: {:?}", selection);
                None
            }
        }
    }

    pub async fn set_sort_field(&self, field: SortField) -> SortSpec {
        let spec = self.state.write().await.set_sort_field(field);
        tracing::info!("Pages sorted by {} {}", spec.field.key(), spec.direction.key());
        spec
    }
}
