// Metric domain models - time series, traffic sources and KPI summary
use chrono::NaiveDate;

/// One day of the daily-active-users series.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedMetric {
    pub date: NaiveDate,
    pub value: u64,
}

impl DatedMetric {
    pub fn new(date: NaiveDate, value: u64) -> Self {
        Self { date, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSource {
    pub name: String,
    pub sessions: u64,
}

impl TrafficSource {
    pub fn new(name: String, sessions: u64) -> Self {
        Self { name, sessions }
    }
}

/// Period-over-period change of each KPI, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KpiDeltas {
    pub total_users: f64,
    pub active_users: f64,
    pub sessions: f64,
    pub conversion: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiSummary {
    pub total_users: u64,
    pub active_users: u64,
    pub sessions: u64,
    /// Conversion rate, already in percent (3.7 means 3.7%).
    pub conversion: f64,
    pub deltas: KpiDeltas,
}
