//! Type-aware, stable sorting of collection rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use contracts::shared::SortDirection;
use std::borrow::Cow;
use std::cmp::Ordering;

use super::record::Sortable;

/// Value of one record field as seen by the comparator
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    /// `None` when the raw value could not be parsed; sorts before any instant
    Date(Option<NaiveDateTime>),
}

impl<'a> SortValue<'a> {
    pub fn text(value: &'a str) -> Self {
        SortValue::Text(Cow::Borrowed(value))
    }

    pub fn number(value: impl Into<f64>) -> Self {
        SortValue::Number(value.into())
    }

    pub fn date(raw: &str) -> Self {
        SortValue::Date(parse_timestamp(raw))
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Number(_) => 0,
            SortValue::Date(_) => 1,
            SortValue::Text(_) => 2,
        }
    }
}

/// Parses the timestamp formats the backend emits. Offsets are normalised to UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Ascending comparison of two field values
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.total_cmp(y),
        (SortValue::Date(x), SortValue::Date(y)) => x.cmp(y),
        (SortValue::Text(x), SortValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        _ => a.rank().cmp(&b.rank()),
    }
}

pub fn compare<T: Sortable>(a: &T, b: &T, field: T::Field, direction: SortDirection) -> Ordering {
    direction.apply(compare_values(&a.sort_value(field), &b.sort_value(field)))
}

/// Stable in-place sort; ties keep their input order in both directions.
pub fn sort_records<T: Sortable>(rows: &mut [&T], field: T::Field, direction: SortDirection) {
    rows.sort_by(|a, b| compare(*a, *b, field, direction));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Field {
        Name,
        Total,
        Created,
    }

    #[derive(Debug)]
    struct Row {
        id: u32,
        name: &'static str,
        total: f64,
        created: &'static str,
    }

    impl Sortable for Row {
        type Field = Field;

        fn sort_value(&self, field: Field) -> SortValue<'_> {
            match field {
                Field::Name => SortValue::text(self.name),
                Field::Total => SortValue::number(self.total),
                Field::Created => SortValue::date(self.created),
            }
        }
    }

    fn row(id: u32, name: &'static str, total: f64, created: &'static str) -> Row {
        Row {
            id,
            name,
            total,
            created,
        }
    }

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_numeric_descending() {
        let data = vec![row(1, "a", 50.0, ""), row(2, "b", 200.0, "")];
        let mut rows: Vec<&Row> = data.iter().collect();
        sort_records(&mut rows, Field::Total, SortDirection::Descending);
        assert_eq!(ids(&rows), vec![2, 1]);
    }

    #[test]
    fn test_numbers_are_not_compared_as_text() {
        let data = vec![row(1, "", 100.0, ""), row(2, "", 9.5, ""), row(3, "", -3.0, "")];
        let mut rows: Vec<&Row> = data.iter().collect();
        sort_records(&mut rows, Field::Total, SortDirection::Ascending);
        assert_eq!(ids(&rows), vec![3, 2, 1]);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let data = vec![
            row(1, "banana", 0.0, ""),
            row(2, "Apple", 0.0, ""),
            row(3, "cherry", 0.0, ""),
        ];
        let mut rows: Vec<&Row> = data.iter().collect();
        sort_records(&mut rows, Field::Name, SortDirection::Ascending);
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[test]
    fn test_dates_compare_as_instants_and_unparsable_sorts_first() {
        let data = vec![
            row(1, "", 0.0, "2025-03-15T14:02:26Z"),
            row(2, "", 0.0, "not a date"),
            row(3, "", 0.0, "2025-03-15T10:00:00-08:00"),
            row(4, "", 0.0, "2024-12-31"),
            row(5, "", 0.0, "2025-03-15 09:30:00"),
        ];
        let mut rows: Vec<&Row> = data.iter().collect();
        sort_records(&mut rows, Field::Created, SortDirection::Ascending);
        // 10:00 -08:00 is 18:00 UTC, later than 14:02 UTC
        assert_eq!(ids(&rows), vec![2, 4, 5, 1, 3]);

        sort_records(&mut rows, Field::Created, SortDirection::Descending);
        assert_eq!(ids(&rows), vec![3, 1, 5, 4, 2]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let data = vec![
            row(1, "x", 10.0, ""),
            row(2, "y", 5.0, ""),
            row(3, "z", 10.0, ""),
            row(4, "w", 5.0, ""),
            row(5, "v", 10.0, ""),
        ];
        let mut rows: Vec<&Row> = data.iter().collect();
        sort_records(&mut rows, Field::Total, SortDirection::Ascending);
        assert_eq!(ids(&rows), vec![2, 4, 1, 3, 5]);

        let mut rows: Vec<&Row> = data.iter().collect();
        sort_records(&mut rows, Field::Total, SortDirection::Descending);
        assert_eq!(ids(&rows), vec![1, 3, 5, 2, 4]);

        // Re-sorting an already sorted list with ties doesn't shuffle it
        let before = ids(&rows);
        sort_records(&mut rows, Field::Total, SortDirection::Descending);
        assert_eq!(ids(&rows), before);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-03-15T14:02:26.123Z").is_some());
        assert!(parse_timestamp("2024-03-15T14:02:26").is_some());
        assert!(parse_timestamp("2024-03-15").is_some());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("15.03.2024").is_none());
    }
}
