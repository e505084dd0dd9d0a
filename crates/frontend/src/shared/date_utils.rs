/// Date and time formatting for table cells
use crate::shared::collection_view::sort::parse_timestamp;

/// "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
/// Unparseable input is shown as received.
pub fn format_datetime(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

/// "2024-03-15T14:02:26Z" -> "2024-03-15"
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => raw.to_string(),
    }
}

/// Optional timestamps render as "-" when missing
pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-03-15 09:30:00"), "2024-03-15 09:30");
        assert_eq!(format_datetime("soon"), "soon");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "2024-03-15");
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_optional_date(None), "-");
    }
}
