//! some date helper functions: business day classification and weekend extraction

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

/// true for Monday to Friday
pub fn is_business_day(date: &NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// extract all non-business days (Saturdays and Sundays) within a given timeframe
///
/// # Arguments
/// * `start` - first day to inspect
/// * `end` - last day to inspect, must not be before `start`
///
pub fn non_business_days_in_range(start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
    debug_assert!(start <= end, "reversed range {start} > {end}");

    let mut dates = Vec::new();
    let mut current = *start;

    while current <= *end {
        if !is_business_day(&current) {
            dates.push(current);
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    dates
}

/// calendar date of a timestamp, taken from its own local fields (no UTC conversion)
pub fn calendar_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NaiveDate {
    timestamp.date_naive()
}

/// ISO-8601 calendar date, `YYYY-MM-DD`
pub fn to_iso(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
