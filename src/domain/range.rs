// Date range domain model - intervals, presets and range filtering
use chrono::{Duration, NaiveDate};

use super::metrics::DatedMetric;

/// Inclusive calendar interval.
///
/// Intervals built from presets always satisfy `from <= to`. Intervals coming
/// straight from a calendar selection are taken as-is; a reversed interval
/// simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateInterval {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn is_reversed(&self) -> bool {
        self.from > self.to
    }
}

/// Quick-range presets offered next to the calendar picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    Last7Days,
    Last30Days,
    Last90Days,
}

impl RangePreset {
    /// Parse a preset tag ("7", "30" or "90"). Anything else is not a preset.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "7" => Some(Self::Last7Days),
            "30" => Some(Self::Last30Days),
            "90" => Some(Self::Last90Days),
            _ => None,
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last90Days => 90,
        }
    }

    /// The last `days()` calendar days, ending with and including `today`.
    pub fn resolve(&self, today: NaiveDate) -> DateInterval {
        DateInterval::new(today - Duration::days(self.days() - 1), today)
    }
}

/// Resolve a raw preset tag against `today`. Unknown tags yield `None` and the
/// caller keeps whatever interval it already had.
pub fn resolve_preset(tag: &str, today: NaiveDate) -> Option<DateInterval> {
    RangePreset::parse(tag).map(|preset| preset.resolve(today))
}

/// A possibly incomplete selection from the calendar picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarSelection {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl CalendarSelection {
    /// Only a selection with both ends set can replace the current range.
    pub fn commit(&self) -> Option<DateInterval> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(DateInterval::new(from, to)),
            _ => None,
        }
    }
}

/// Keep the records dated inside `interval` (both bounds inclusive), in input order.
pub fn filter_range(records: &[DatedMetric], interval: &DateInterval) -> Vec<DatedMetric> {
    if interval.is_reversed() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| interval.contains(record.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn series() -> Vec<DatedMetric> {
        vec![
            DatedMetric::new(date("2025-01-03"), 285),
            DatedMetric::new(date("2025-01-01"), 320),
            DatedMetric::new(date("2025-01-05"), 295),
            DatedMetric::new(date("2025-01-02"), 305),
            DatedMetric::new(date("2025-01-04"), 310),
        ]
    }

    #[test]
    fn test_filter_keeps_bounds_and_order() {
        let interval = DateInterval::new(date("2025-01-02"), date("2025-01-04"));
        let filtered = filter_range(&series(), &interval);

        let dates: Vec<NaiveDate> = filtered.iter().map(|m| m.date).collect();
        assert_eq!(dates, vec![date("2025-01-03"), date("2025-01-02"), date("2025-01-04")]);
    }

    #[test]
    fn test_filter_matches_predicate_exactly() {
        let records = series();
        let interval = DateInterval::new(date("2025-01-02"), date("2025-01-03"));
        let filtered = filter_range(&records, &interval);

        assert!(filtered.iter().all(|m| interval.contains(m.date)));
        let expected = records.iter().filter(|m| interval.contains(m.date)).count();
        assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn test_filter_single_day() {
        let interval = DateInterval::new(date("2025-01-05"), date("2025-01-05"));
        let filtered = filter_range(&series(), &interval);

        assert_eq!(filtered, vec![DatedMetric::new(date("2025-01-05"), 295)]);
    }

    #[test]
    fn test_filter_reversed_interval_is_empty() {
        let interval = DateInterval::new(date("2025-01-05"), date("2025-01-01"));
        assert!(filter_range(&series(), &interval).is_empty());
    }

    #[test]
    fn test_filter_empty_records() {
        let interval = DateInterval::new(date("2025-01-01"), date("2025-12-31"));
        assert!(filter_range(&[], &interval).is_empty());
    }

    #[test]
    fn test_resolve_presets() {
        let today = date("2025-01-30");

        assert_eq!(
            resolve_preset("7", today),
            Some(DateInterval::new(date("2025-01-24"), today))
        );
        assert_eq!(
            resolve_preset("30", today),
            Some(DateInterval::new(date("2025-01-01"), today))
        );
        assert_eq!(
            resolve_preset("90", today),
            Some(DateInterval::new(date("2024-11-02"), today))
        );
    }

    #[test]
    fn test_preset_yields_one_point_per_day() {
        let today = date("2025-01-30");
        let daily: Vec<DatedMetric> = (1..=30)
            .map(|d| DatedMetric::new(NaiveDate::from_ymd_opt(2025, 1, d).unwrap(), 300))
            .collect();

        let week = filter_range(&daily, &RangePreset::Last7Days.resolve(today));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date("2025-01-24"));

        let month = filter_range(&daily, &RangePreset::Last30Days.resolve(today));
        assert_eq!(month.len(), 30);
    }

    #[test]
    fn test_unknown_preset_resolves_to_nothing() {
        let today = date("2025-01-30");
        assert_eq!(resolve_preset("14", today), None);
        assert_eq!(resolve_preset("", today), None);
        assert_eq!(resolve_preset("7d", today), None);
    }

    #[test]
    fn test_partial_calendar_selection_is_not_committed() {
        let only_from = CalendarSelection {
            from: Some(date("2025-01-01")),
            to: None,
        };
        assert_eq!(only_from.commit(), None);
        assert_eq!(CalendarSelection::default().commit(), None);

        let full = CalendarSelection {
            from: Some(date("2025-01-01")),
            to: Some(date("2025-01-10")),
        };
        assert_eq!(
            full.commit(),
            Some(DateInterval::new(date("2025-01-01"), date("2025-01-10")))
        );
    }
}
