// Mapper to convert domain models to JSON transfer types
use crate::application::renderer::DashboardRenderer;
use crate::domain::dashboard::{DashboardEvent, DashboardView, SkeletonLayout};
use crate::domain::format::{
    format_axis_date, format_conversion, format_number, format_percentage, format_range,
    format_time, format_tooltip_date, BounceBadge, DeltaIndicator,
};
use crate::domain::metrics::{DatedMetric, KpiSummary, TrafficSource};
use crate::domain::pages::{PageRow, SortSpec};
use crate::domain::range::DateInterval;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardDto {
    pub title: String,
    pub dataset: String,
    pub range: RangeDto,
    pub sort: SortDto,
    pub loading: bool,
    pub kpis: Vec<KpiCardDto>,
    pub timeseries: Vec<PointDto>,
    pub sources: Vec<SourceDto>,
    pub pages: Vec<PageDto>,
}

#[derive(Debug, Serialize)]
pub struct RangeDto {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct SortDto {
    pub field: &'static str,
    pub direction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct KpiCardDto {
    pub id: &'static str,
    pub title: &'static str,
    pub value: f64,
    pub display: String,
    pub delta: DeltaDto,
}

#[derive(Debug, Serialize)]
pub struct DeltaDto {
    pub value: f64,
    pub trend: &'static str,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct PointDto {
    pub date: NaiveDate,
    pub value: u64,
    pub axis_label: String,
    pub tooltip_label: String,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct SourceDto {
    pub name: String,
    pub sessions: u64,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct PageDto {
    pub path: String,
    pub views: u64,
    pub avg_time_seconds: u64,
    pub bounce_rate: f64,
    pub views_display: String,
    pub avg_time_display: String,
    pub bounce_display: String,
    pub badge: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkeletonDto {
    pub kpi_cards: usize,
    pub charts: usize,
    pub table_rows: usize,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamMessageDto {
    Skeleton(SkeletonDto),
    Snapshot(Box<DashboardDto>),
    Complete { duration_ms: i64 },
}

pub fn dashboard_to_dto(view: &DashboardView) -> DashboardDto {
    DashboardDto {
        title: view.title.clone(),
        dataset: view.dataset_label.clone(),
        range: range_to_dto(&view.range),
        sort: sort_to_dto(&view.sort),
        loading: view.loading,
        kpis: kpis_to_dto(&view.kpis),
        timeseries: view.timeseries.iter().map(point_to_dto).collect(),
        sources: view.sources.iter().map(source_to_dto).collect(),
        pages: view.pages.iter().map(page_to_dto).collect(),
    }
}

pub fn event_to_dto(event: &DashboardEvent) -> StreamMessageDto {
    match event {
        DashboardEvent::Skeleton(layout) => StreamMessageDto::Skeleton(skeleton_to_dto(layout)),
        DashboardEvent::Snapshot(view) => StreamMessageDto::Snapshot(Box::new(dashboard_to_dto(view))),
        DashboardEvent::Complete { duration_ms } => StreamMessageDto::Complete {
            duration_ms: *duration_ms,
        },
    }
}

pub fn range_to_dto(range: &DateInterval) -> RangeDto {
    RangeDto {
        from: range.from,
        to: range.to,
        label: format_range(range),
    }
}

pub fn sort_to_dto(sort: &SortSpec) -> SortDto {
    SortDto {
        field: sort.field.key(),
        direction: sort.direction.key(),
    }
}

pub fn point_to_dto(point: &DatedMetric) -> PointDto {
    PointDto {
        date: point.date,
        value: point.value,
        axis_label: format_axis_date(point.date),
        tooltip_label: format_tooltip_date(point.date),
        display: format_number(point.value),
    }
}

pub fn page_to_dto(page: &PageRow) -> PageDto {
    PageDto {
        path: page.path.clone(),
        views: page.views,
        avg_time_seconds: page.avg_time_seconds,
        bounce_rate: page.bounce_rate,
        views_display: format_number(page.views),
        avg_time_display: format_time(page.avg_time_seconds),
        bounce_display: format_percentage(page.bounce_rate),
        badge: BounceBadge::for_rate(page.bounce_rate).key(),
    }
}

fn source_to_dto(source: &TrafficSource) -> SourceDto {
    SourceDto {
        name: source.name.clone(),
        sessions: source.sessions,
        display: format_number(source.sessions),
    }
}

fn skeleton_to_dto(layout: &SkeletonLayout) -> SkeletonDto {
    SkeletonDto {
        kpi_cards: layout.kpi_cards,
        charts: layout.charts,
        table_rows: layout.table_rows,
    }
}

fn kpis_to_dto(kpis: &KpiSummary) -> Vec<KpiCardDto> {
    vec![
        count_card("total_users", "Total Users", kpis.total_users, kpis.deltas.total_users),
        count_card("active_users", "Active Users", kpis.active_users, kpis.deltas.active_users),
        count_card("sessions", "Sessions", kpis.sessions, kpis.deltas.sessions),
        KpiCardDto {
            id: "conversion",
            title: "Conversion Rate",
            value: kpis.conversion,
            display: format_conversion(kpis.conversion),
            delta: delta_to_dto(kpis.deltas.conversion),
        },
    ]
}

fn count_card(id: &'static str, title: &'static str, value: u64, delta: f64) -> KpiCardDto {
    KpiCardDto {
        id,
        title,
        value: value as f64,
        display: format_number(value),
        delta: delta_to_dto(delta),
    }
}

fn delta_to_dto(delta: f64) -> DeltaDto {
    let indicator = DeltaIndicator::new(delta);
    DeltaDto {
        value: delta,
        trend: indicator.trend.key(),
        label: indicator.label(),
    }
}

/// Renders the dashboard as the JSON document above.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl DashboardRenderer for JsonRenderer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn render(&self, view: &DashboardView) -> anyhow::Result<Vec<u8>> {
        Ok(serde_json::to_vec(&dashboard_to_dto(view))?)
    }
}
