// HTTP request handlers
use crate::domain::pages::SortField;
use crate::domain::range::CalendarSelection;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, bytes_response, json_response};
use crate::infrastructure::json_mapper::{
    page_to_dto, point_to_dto, range_to_dto, sort_to_dto, PageDto, RangeDto, SortDto,
};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct FormatQuery {
    pub format: Option<String>,
}

#[derive(Deserialize)]
pub struct RangeSelection {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct RangeChange {
    pub applied: bool,
    pub range: RangeDto,
}

#[derive(Serialize)]
pub struct SortedPages {
    pub sort: SortDto,
    pub pages: Vec<PageDto>,
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Response {
    match json_response(data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard, rendered as JSON or plain text
pub async fn get_dashboard(
    Query(query): Query<FormatQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let renderer = state.renderer(query.format.as_deref())?;
    let view = state.dashboard_service.snapshot().await;
    let bytes = renderer.render(&view)?;

    Ok(
        match bytes_response(bytes, renderer.content_type(), accepts_brotli(&headers)).await {
            Ok(response) => response,
            Err(status) => status.into_response(),
        },
    )
}

/// Stream the dashboard: skeleton while loading, then the snapshot
pub async fn stream_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let rx = state.streaming_service.stream_dashboard();
    stream_from_receiver(rx, accepts_brotli(&headers))
}

pub async fn get_timeseries(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let points: Vec<_> = state
        .dashboard_service
        .visible_time_series()
        .await
        .iter()
        .map(point_to_dto)
        .collect();

    respond(&points, &headers).await
}

pub async fn get_pages(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let view = state.dashboard_service.snapshot().await;

    respond(
        &SortedPages {
            sort: sort_to_dto(&view.sort),
            pages: view.pages.iter().map(page_to_dto).collect(),
        },
        &headers,
    )
    .await
}

/// Apply a quick-range preset; unknown presets leave the range as it was
pub async fn apply_preset(
    Path(preset): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let applied = state.dashboard_service.apply_preset(&preset).await;
    let range = match applied {
        Some(range) => range,
        None => state.dashboard_service.snapshot().await.range,
    };

    respond(
        &RangeChange {
            applied: applied.is_some(),
            range: range_to_dto(&range),
        },
        &headers,
    )
    .await
}

/// Commit a calendar selection; both ends must be present
pub async fn select_range(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(selection): Json<RangeSelection>,
) -> Response {
    let selection = CalendarSelection {
        from: selection.from,
        to: selection.to,
    };
    let applied = state.dashboard_service.select_calendar_range(selection).await;
    let range = match applied {
        Some(range) => range,
        None => state.dashboard_service.snapshot().await.range,
    };

    respond(
        &RangeChange {
            applied: applied.is_some(),
            range: range_to_dto(&range),
        },
        &headers,
    )
    .await
}

/// Header click on a table column
pub async fn sort_pages(
    Path(field): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let field = SortField::parse(&field).ok_or(ApiError::UnknownSortField(field))?;
    let sort = state.dashboard_service.set_sort_field(field).await;
    let pages = state
        .dashboard_service
        .visible_page_rows()
        .await
        .iter()
        .map(page_to_dto)
        .collect();

    Ok(respond(
        &SortedPages {
            sort: sort_to_dto(&sort),
            pages,
        },
        &headers,
    )
    .await)
}
