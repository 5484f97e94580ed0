/// Utilities for date handling in forms and filters
use chrono::{Local, NaiveDate};

/// Today in the browser's local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date for `<input type="date">`
/// Example: 2025-07-04 -> "2025-07-04"
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value of a date input; empty or malformed input gives `None`
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(to_input_value(date), "2025-07-04");
        assert_eq!(from_input_value(" 2025-07-04 "), Some(date));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("04.07.2025"), None);
    }
}
