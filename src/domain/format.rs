// Display formatting for KPI cards, chart labels and the pages table
use chrono::NaiveDate;

use super::range::DateInterval;

/// Group digits in thousands: 12450 -> "12,450".
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Render a ratio as a percentage with one decimal: 0.42 -> "42.0%".
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Render seconds as minutes and zero-padded seconds: 125 -> "2:05".
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Conversion is stored in percent already: 3.7 -> "3.7%".
pub fn format_conversion(percent: f64) -> String {
    format!("{}%", percent)
}

pub fn format_axis_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

pub fn format_tooltip_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Header label for the selected range: "Jan 01, 2025 - Jan 30, 2025".
pub fn format_range(interval: &DateInterval) -> String {
    format!(
        "{} - {}",
        format_tooltip_date(interval.from),
        format_tooltip_date(interval.to)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Arrow and magnitude shown under each KPI value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaIndicator {
    pub trend: Trend,
    pub magnitude: f64,
}

impl DeltaIndicator {
    /// Zero counts as a decline; only strictly positive deltas point up.
    pub fn new(delta: f64) -> Self {
        let trend = if delta > 0.0 { Trend::Up } else { Trend::Down };
        Self {
            trend,
            magnitude: delta.abs(),
        }
    }

    pub fn label(&self) -> String {
        format!("{}%", self.magnitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceBadge {
    Default,
    Secondary,
    Destructive,
}

impl BounceBadge {
    pub fn for_rate(bounce_rate: f64) -> Self {
        if bounce_rate > 0.5 {
            Self::Destructive
        } else if bounce_rate > 0.4 {
            Self::Secondary
        } else {
            Self::Default
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(125), "2:05");
        assert_eq!(format_time(45), "0:45");
        assert_eq!(format_time(180), "3:00");
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(8200), "8,200");
        assert_eq!(format_number(12450), "12,450");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.42), "42.0%");
        assert_eq!(format_percentage(0.31), "31.0%");
        assert_eq!(format_percentage(1.0), "100.0%");
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(format_conversion(3.7), "3.7%");
    }

    #[test]
    fn test_date_labels() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_axis_date(date), "Jan 05");
        assert_eq!(format_tooltip_date(date), "Jan 05, 2025");

        let interval = DateInterval::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), date);
        assert_eq!(format_range(&interval), "Jan 01, 2025 - Jan 05, 2025");
    }

    #[test]
    fn test_delta_indicator() {
        let up = DeltaIndicator::new(5.1);
        assert_eq!(up.trend, Trend::Up);
        assert_eq!(up.label(), "5.1%");

        let down = DeltaIndicator::new(-1.2);
        assert_eq!(down.trend, Trend::Down);
        assert_eq!(down.label(), "1.2%");

        assert_eq!(DeltaIndicator::new(0.0).trend, Trend::Down);
    }

    #[test]
    fn test_bounce_badge_thresholds() {
        assert_eq!(BounceBadge::for_rate(0.52), BounceBadge::Destructive);
        assert_eq!(BounceBadge::for_rate(0.5), BounceBadge::Secondary);
        assert_eq!(BounceBadge::for_rate(0.42), BounceBadge::Secondary);
        assert_eq!(BounceBadge::for_rate(0.4), BounceBadge::Default);
        assert_eq!(BounceBadge::for_rate(0.31), BounceBadge::Default);
    }
}
