// Streaming dashboard service - Skeleton first, snapshot once loading settles
use crate::application::dashboard_service::DashboardService;
use crate::domain::dashboard::DashboardEvent;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard: DashboardService) -> Self {
        Self { dashboard }
    }

    /// Emit a skeleton while the loading flag is up, then the computed view,
    /// then a completion event.
    pub fn stream_dashboard(&self) -> mpsc::Receiver<DashboardEvent> {
        let (tx, rx) = mpsc::channel(8);
        let dashboard = self.dashboard.clone();
        let start_time = Instant::now();

        tokio::spawn(async move {
            let mut loading = dashboard.subscribe_loading();

            let is_loading = *loading.borrow_and_update();
            if is_loading {
                tracing::debug!("Dashboard loading, sending skeleton");
                if tx.send(DashboardEvent::Skeleton(dashboard.skeleton())).await.is_err() {
                    return;
                }
                if loading.wait_for(|is_loading| !*is_loading).await.is_err() {
                    tracing::warn!("Loading timer dropped before settling");
                }
            }

            let view = dashboard.snapshot().await;
            if tx.send(DashboardEvent::Snapshot(Box::new(view))).await.is_err() {
                return;
            }

            let duration_ms = start_time.elapsed().as_millis() as i64;
            let _ = tx.send(DashboardEvent::Complete { duration_ms }).await;
        });

        rx
    }
}
