//! Date-range string parsing.
//!
//! Recognised shapes (month names are case-insensitive, full or
//! three-letter with an optional period):
//!
//! ```text
//! October 13
//! March 10-16
//! February 24 - March 2
//! Feb. 24 - Mar. 2
//! ```

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static SINGLE_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\.?\s+(\d{1,2})$").expect("Invalid single day regex")
});

static SAME_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\.?\s+(\d{1,2})\s*[-\x{2013}\x{2014}]\s*(\d{1,2})$")
        .expect("Invalid same month regex")
});

static CROSS_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\.?\s+(\d{1,2})\s*[-\x{2013}\x{2014}]\s*([A-Za-z]+)\.?\s+(\d{1,2})$")
        .expect("Invalid cross month regex")
});

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Month number (1-12) for a full or abbreviated English month name.
fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    if name == "sept" {
        return Some(9);
    }

    MONTHS
        .iter()
        .position(|full| name == *full || name == full[..3])
        .map(|i| i as u32 + 1)
}

fn date(year: i32, month: &str, day: &str) -> Option<NaiveDate> {
    let month = month_number(month)?;
    let day = day.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a human-written observance date string for the given year.
///
/// Returns the inclusive `(start, end)` pair, or `None` if the string is
/// not in a recognised shape, names an impossible date, or ends before it
/// starts. Cross-month ranges are resolved entirely within `year`.
pub fn parse_date_range(raw: &str, year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let raw = raw.trim();

    let (start, end) = if let Some(caps) = SINGLE_DAY.captures(raw) {
        let day = date(year, &caps[1], &caps[2])?;
        (day, day)
    } else if let Some(caps) = SAME_MONTH.captures(raw) {
        (
            date(year, &caps[1], &caps[2])?,
            date(year, &caps[1], &caps[3])?,
        )
    } else if let Some(caps) = CROSS_MONTH.captures(raw) {
        (
            date(year, &caps[1], &caps[2])?,
            date(year, &caps[3], &caps[4])?,
        )
    } else {
        return None;
    };

    (start <= end).then_some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day() {
        assert_eq!(
            parse_date_range("October 13", 2025),
            Some((ymd(2025, 10, 13), ymd(2025, 10, 13)))
        );
    }

    #[test]
    fn test_same_month_range() {
        let (start, end) = parse_date_range("March 10-16", 2025).unwrap();
        assert_eq!(start, ymd(2025, 3, 10));
        assert_eq!(end, ymd(2025, 3, 16));
        assert_eq!(start.month(), end.month());
    }

    #[test]
    fn test_same_month_range_with_spaces_and_en_dash() {
        assert_eq!(
            parse_date_range("May 1 \u{2013} 31", 2025),
            Some((ymd(2025, 5, 1), ymd(2025, 5, 31)))
        );
        assert_eq!(
            parse_date_range("September 1 - 30", 2025),
            Some((ymd(2025, 9, 1), ymd(2025, 9, 30)))
        );
    }

    #[test]
    fn test_cross_month_range() {
        assert_eq!(
            parse_date_range("February 24 - March 2", 2025),
            Some((ymd(2025, 2, 24), ymd(2025, 3, 2)))
        );
    }

    #[test]
    fn test_abbreviated_months() {
        assert_eq!(
            parse_date_range("Feb. 24 - Mar. 2", 2025),
            Some((ymd(2025, 2, 24), ymd(2025, 3, 2)))
        );
        assert_eq!(
            parse_date_range("sept 10", 2025),
            Some((ymd(2025, 9, 10), ymd(2025, 9, 10)))
        );
    }

    #[test]
    fn test_case_insensitive_month() {
        assert_eq!(
            parse_date_range("  OCTOBER 1-31 ", 2025),
            Some((ymd(2025, 10, 1), ymd(2025, 10, 31)))
        );
    }

    #[test]
    fn test_leap_day_depends_on_year() {
        assert!(parse_date_range("February 29", 2024).is_some());
        assert!(parse_date_range("February 29", 2025).is_none());
    }

    #[test]
    fn test_unparseable_strings() {
        for raw in [
            "",
            "October",
            "Octember 3",
            "October 32",
            "February 30",
            "First Monday of May",
            "10/13",
            "October 13, 2025",
            "Marchuary 1-3",
        ] {
            assert_eq!(parse_date_range(raw, 2025), None, "{:?}", raw);
        }
    }

    #[test]
    fn test_reversed_ranges_are_unparseable() {
        assert_eq!(parse_date_range("March 16-10", 2025), None);
        assert_eq!(parse_date_range("December 28 - January 3", 2025), None);
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("January"), Some(1));
        assert_eq!(month_number("dec"), Some(12));
        assert_eq!(month_number("Ju"), None);
        assert_eq!(month_number("junee"), None);
    }
}
