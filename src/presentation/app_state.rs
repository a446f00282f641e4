// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::renderer::DashboardRenderer;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::json_mapper::JsonRenderer;
use crate::infrastructure::text_renderer::TextRenderer;
use crate::presentation::error::ApiError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub streaming_service: StreamingDashboardService,
    pub json_renderer: Arc<dyn DashboardRenderer>,
    pub text_renderer: Arc<dyn DashboardRenderer>,
}

impl AppState {
    pub fn new(dashboard_service: DashboardService) -> Self {
        let streaming_service = StreamingDashboardService::new(dashboard_service.clone());
        Self {
            dashboard_service,
            streaming_service,
            json_renderer: Arc::new(JsonRenderer),
            text_renderer: Arc::new(TextRenderer),
        }
    }

    pub fn renderer(&self, format: Option<&str>) -> Result<Arc<dyn DashboardRenderer>, ApiError> {
        match format.unwrap_or("json") {
            "json" => Ok(self.json_renderer.clone()),
            "text" => Ok(self.text_renderer.clone()),
            other => Err(ApiError::UnknownFormat(other.to_string())),
        }
    }
}
