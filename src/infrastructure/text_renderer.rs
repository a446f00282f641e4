// Plain-text dashboard renderer for terminals and curl
use crate::application::renderer::DashboardRenderer;
use crate::domain::dashboard::DashboardView;
use crate::domain::format::{
    format_axis_date, format_conversion, format_number, format_percentage, format_range,
    format_time, DeltaIndicator, Trend,
};
use crate::domain::pages::{SortDirection, SortField};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn delta(delta: f64) -> String {
        let indicator = DeltaIndicator::new(delta);
        let arrow = match indicator.trend {
            Trend::Up => '↑',
            Trend::Down => '↓',
        };
        format!("{} {}", arrow, indicator.label())
    }

    fn header(view: &DashboardView, field: SortField) -> String {
        if view.sort.field != field {
            return field.label().to_string();
        }
        let arrow = match view.sort.direction {
            SortDirection::Descending => '↓',
            SortDirection::Ascending => '↑',
        };
        format!("{} {}", field.label(), arrow)
    }

    fn write_view(view: &DashboardView, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", view.title)?;
        writeln!(out, "{}", format_range(&view.range))?;

        if view.loading {
            writeln!(out)?;
            writeln!(out, "Loading...")?;
            return Ok(());
        }

        let kpis = &view.kpis;
        writeln!(out)?;
        let cards = [
            ("Total Users", format_number(kpis.total_users), kpis.deltas.total_users),
            ("Active Users", format_number(kpis.active_users), kpis.deltas.active_users),
            ("Sessions", format_number(kpis.sessions), kpis.deltas.sessions),
            ("Conversion Rate", format_conversion(kpis.conversion), kpis.deltas.conversion),
        ];
        for (title, value, delta) in cards {
            writeln!(out, "{:<16} {:>10}  {}", title, value, Self::delta(delta))?;
        }

        writeln!(out)?;
        writeln!(out, "Daily Active Users")?;
        if view.timeseries.is_empty() {
            writeln!(out, "  (no data in range)")?;
        }
        for point in &view.timeseries {
            writeln!(out, "  {}  {:>8}", format_axis_date(point.date), format_number(point.value))?;
        }

        writeln!(out)?;
        writeln!(out, "Sessions by Source")?;
        for source in &view.sources {
            writeln!(out, "  {:<10} {:>8}", source.name, format_number(source.sessions))?;
        }

        writeln!(out)?;
        writeln!(out, "Top Pages")?;
        writeln!(
            out,
            "  {:<12} {:>10} {:>12} {:>14}",
            "Page",
            Self::header(view, SortField::Views),
            Self::header(view, SortField::AvgTime),
            Self::header(view, SortField::Bounce)
        )?;
        for page in &view.pages {
            writeln!(
                out,
                "  {:<12} {:>10} {:>12} {:>14}",
                page.path,
                format_number(page.views),
                format_time(page.avg_time_seconds),
                format_percentage(page.bounce_rate)
            )?;
        }

        Ok(())
    }
}

impl DashboardRenderer for TextRenderer {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn render(&self, view: &DashboardView) -> anyhow::Result<Vec<u8>> {
        let mut out = String::new();
        Self::write_view(view, &mut out)?;
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_state::DashboardState;
    use crate::domain::range::DateInterval;
    use crate::infrastructure::sample_repository::sample_dataset;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn state() -> DashboardState {
        let range = DateInterval::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        );
        DashboardState::new(Arc::new(sample_dataset()), range)
    }

    fn render(state: &DashboardState, loading: bool) -> String {
        String::from_utf8(TextRenderer.render(&state.view(loading)).unwrap()).unwrap()
    }

    #[test]
    fn test_render_text() {
        let text = render(&state(), false);

        assert!(text.starts_with("Analytics Dashboard\nJan 01, 2025 - Jan 03, 2025\n"));
        assert!(text.contains("12,450"));
        assert!(text.contains("↓ 1.2%"));
        assert!(text.contains("\n  Jan 01       320\n"));
        assert!(text.contains("\n  Jan 03       285\n"));
        assert!(!text.contains("Jan 04"));
        assert!(text.contains("Views ↓"));
        assert!(text.contains("3:00"));
    }

    #[test]
    fn test_render_loading_placeholder() {
        let text = render(&state(), true);

        assert!(text.contains("Loading..."));
        assert!(!text.contains("Top Pages"));
    }

    #[test]
    fn test_sort_arrow_follows_field() {
        let mut state = state();
        state.set_sort_field(SortField::Bounce);
        state.set_sort_field(SortField::Bounce);
        let text = render(&state, false);

        assert!(text.contains("Bounce Rate ↑"));
        assert!(!text.contains("Views ↓"));
    }
}
