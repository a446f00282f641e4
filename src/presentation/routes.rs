// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    apply_preset, get_dashboard, get_pages, get_timeseries, health_check, select_range,
    sort_pages, stream_dashboard,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/timeseries", get(get_timeseries))
        .route("/pages", get(get_pages))
        .route("/range", post(select_range))
        .route("/range/preset/:preset", post(apply_preset))
        .route("/sort/:field", post(sort_pages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
