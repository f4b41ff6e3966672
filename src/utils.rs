use chrono::NaiveDate;

use crate::errors::InputError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true when a raw text-field value holds no usable content.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Parses a `YYYY-MM-DD` calendar date from a raw field value.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(raw.to_string()))
}

/// Parses a decimal amount from a raw field value.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidAmount(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_covers_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" 0 "));
    }

    #[test]
    fn parses_calendar_dates_strictly() {
        let date = parse_date("2025-12-28").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 28).unwrap());
        assert!(parse_date("12/28/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn parses_amounts_including_negatives() {
        assert_eq!(parse_amount("115.5").unwrap(), 115.5);
        assert_eq!(parse_amount(" -12.99 ").unwrap(), -12.99);
        assert!(parse_amount("twelve").is_err());
    }
}
