// Page performance domain model - rows, sort spec and column sorting
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct PageRow {
    pub path: String,
    pub views: u64,
    pub avg_time_seconds: u64,
    /// Fraction of single-page sessions, in [0, 1].
    pub bounce_rate: f64,
}

impl PageRow {
    pub fn new(path: String, views: u64, avg_time_seconds: u64, bounce_rate: f64) -> Self {
        Self {
            path,
            views,
            avg_time_seconds,
            bounce_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Views,
    AvgTime,
    Bounce,
}

impl SortField {
    /// Column keys as they appear in URLs: `views`, `avg_time`, `bounce`.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "views" => Some(Self::Views),
            "avg_time" => Some(Self::AvgTime),
            "bounce" => Some(Self::Bounce),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::AvgTime => "avg_time",
            Self::Bounce => "bounce",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Views => "Views",
            Self::AvgTime => "Avg. Time",
            Self::Bounce => "Bounce Rate",
        }
    }

    fn compare(&self, a: &PageRow, b: &PageRow) -> Ordering {
        match self {
            Self::Views => a.views.cmp(&b.views),
            Self::AvgTime => a.avg_time_seconds.cmp(&b.avg_time_seconds),
            Self::Bounce => a.bounce_rate.total_cmp(&b.bounce_rate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Views,
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: same column flips direction, a new column starts descending.
    pub fn select(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Descending)
        }
    }
}

/// Return a sorted copy of `rows`. The source slice is never reordered.
pub fn sort_rows(rows: &[PageRow], spec: &SortSpec) -> Vec<PageRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = spec.field.compare(a, b);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<PageRow> {
        vec![
            PageRow::new("/".to_string(), 8200, 72, 0.42),
            PageRow::new("/pricing".to_string(), 3100, 51, 0.48),
            PageRow::new("/docs".to_string(), 2600, 180, 0.31),
        ]
    }

    fn paths(rows: &[PageRow]) -> Vec<&str> {
        rows.iter().map(|r| r.path.as_str()).collect()
    }

    #[test]
    fn test_sort_by_bounce_descending() {
        let sorted = sort_rows(&rows(), &SortSpec::new(SortField::Bounce, SortDirection::Descending));
        assert_eq!(paths(&sorted), vec!["/pricing", "/", "/docs"]);
    }

    #[test]
    fn test_sort_by_avg_time_ascending() {
        let sorted = sort_rows(&rows(), &SortSpec::new(SortField::AvgTime, SortDirection::Ascending));
        assert_eq!(paths(&sorted), vec!["/pricing", "/", "/docs"]);
    }

    #[test]
    fn test_ascending_is_reverse_of_descending() {
        for field in [SortField::Views, SortField::AvgTime, SortField::Bounce] {
            let mut ascending = sort_rows(&rows(), &SortSpec::new(field, SortDirection::Ascending));
            let descending = sort_rows(&rows(), &SortSpec::new(field, SortDirection::Descending));
            ascending.reverse();
            assert_eq!(ascending, descending, "field {:?}", field);
        }
    }

    #[test]
    fn test_sort_leaves_source_untouched() {
        let source = rows();
        let _ = sort_rows(&source, &SortSpec::new(SortField::AvgTime, SortDirection::Descending));
        assert_eq!(paths(&source), vec!["/", "/pricing", "/docs"]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_rows(&[], &SortSpec::default()).is_empty());
    }

    #[test]
    fn test_toggle_rule() {
        let initial = SortSpec::default();
        assert_eq!(initial, SortSpec::new(SortField::Views, SortDirection::Descending));

        let once = initial.select(SortField::Views);
        assert_eq!(once, SortSpec::new(SortField::Views, SortDirection::Ascending));

        let twice = once.select(SortField::Views);
        assert_eq!(twice, initial);

        for state in [initial, once] {
            assert_eq!(
                state.select(SortField::AvgTime),
                SortSpec::new(SortField::AvgTime, SortDirection::Descending)
            );
        }
    }

    #[test]
    fn test_parse_field_keys() {
        assert_eq!(SortField::parse("views"), Some(SortField::Views));
        assert_eq!(SortField::parse("avg_time"), Some(SortField::AvgTime));
        assert_eq!(SortField::parse("bounce"), Some(SortField::Bounce));
        assert_eq!(SortField::parse("path"), None);
    }
}
