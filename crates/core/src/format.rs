//! Display formatting for prices and timestamps
//!
//! The backend returns naive ISO-8601 timestamps (no offset). They are shown
//! as the wall-clock time they carry; timestamps with an offset are shown in
//! their own offset rather than converted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Currency symbol prefixed to every amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// Placeholder for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%-d %b %Y";
const DATE_TIME_FORMAT: &str = "%-d %b %Y, %I:%M %p";

/// Format an amount as rupees with two decimals, e.g. `₹299.00`
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Format a timestamp as a date, e.g. `5 Jan 2024`
#[must_use]
pub fn format_date(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || INVALID_DATE.to_string(),
        |dt| dt.format(DATE_FORMAT).to_string(),
    )
}

/// Format a timestamp with its time of day, e.g. `5 Jan 2024, 02:30 PM`
#[must_use]
pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || INVALID_DATE.to_string(),
        |dt| dt.format(DATE_TIME_FORMAT).to_string(),
    )
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(299.0), "₹299.00");
        assert_eq!(format_currency(149.5), "₹149.50");
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(1234.567), "₹1234.57");
    }

    #[test]
    fn test_format_date_backend_timestamp() {
        assert_eq!(format_date("2024-01-05T14:30:00.123456"), "5 Jan 2024");
        assert_eq!(format_date("2024-11-25T09:00:00"), "25 Nov 2024");
    }

    #[test]
    fn test_format_date_plain_date() {
        assert_eq!(format_date("2024-03-09"), "9 Mar 2024");
    }

    #[test]
    fn test_format_date_with_offset_keeps_wall_clock() {
        assert_eq!(format_date("2024-01-05T23:30:00+05:30"), "5 Jan 2024");
        assert_eq!(
            format_date_time("2024-01-05T23:30:00+05:30"),
            "5 Jan 2024, 11:30 PM"
        );
    }

    #[test]
    fn test_format_date_time() {
        assert_eq!(
            format_date_time("2024-01-05T14:30:00.123456"),
            "5 Jan 2024, 02:30 PM"
        );
        assert_eq!(format_date_time("2024-07-01T08:05"), "1 Jul 2024, 08:05 AM");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_date("yesterday"), INVALID_DATE);
        assert_eq!(format_date_time(""), INVALID_DATE);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn currency_always_has_two_decimals(amount in 0.0f64..1e9) {
                let formatted = format_currency(amount);
                let digits = formatted.strip_prefix(CURRENCY_SYMBOL).unwrap();
                let (_, decimals) = digits.split_once('.').unwrap();
                prop_assert_eq!(decimals.len(), 2);
            }

            #[test]
            fn garbage_dates_never_panic(input in "\\PC*") {
                let formatted = format_date(&input);
                prop_assert!(!formatted.is_empty());
            }
        }
    }
}
