//! Day-of-year arithmetic
//!
//! Day-of-year counts whole days elapsed since midnight of December 31 of the
//! preceding year, so January 1 is day 1 and December 31 is day 365 (366 in
//! leap years). The rotation index is that count minus one, clamped into the
//! bounds of the content list.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::errors::CalendarError;

/// Whole days between the end of the preceding year and `date`
pub fn day_of_year(date: NaiveDate) -> i64 {
    i64::from(date.ordinal())
}

/// Day-of-year for a local date-time, flooring partial days
pub fn day_of_year_at(moment: NaiveDateTime) -> i64 {
    let date = moment.date();
    let boundary = NaiveDate::from_ymd_opt(date.year() - 1, 12, 31)
        .and_then(|d| d.and_hms_opt(0, 0, 0));
    match boundary {
        Some(start) => (moment - start).num_days(),
        // Only reachable at the minimum representable year
        None => day_of_year(date),
    }
}

/// Rotation index for a day-of-year, saturating at both ends of the list
///
/// Day 1 maps to index 0; days past the end of the list map to the last
/// index; day 0 and negative days map to index 0.
pub fn index_for_day_of_year(day: i64, len: usize) -> Result<usize, CalendarError> {
    if len == 0 {
        return Err(CalendarError::InvalidArgument(
            "content list must not be empty".to_string(),
        ));
    }

    let last = (len - 1) as i64;
    Ok(day.saturating_sub(1).clamp(0, last) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_january_first_is_day_one() {
        assert_eq!(day_of_year(date(2026, 1, 1)), 1);
        assert_eq!(day_of_year(date(2026, 2, 1)), 32);
    }

    #[test]
    fn test_year_end() {
        assert_eq!(day_of_year(date(2025, 12, 31)), 365);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366);
    }

    #[test]
    fn test_partial_days_floor() {
        let morning = date(2026, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        let night = date(2026, 1, 1).and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(day_of_year_at(morning), 1);
        assert_eq!(day_of_year_at(night), 1);
        assert_eq!(day_of_year_at(date(2026, 3, 1).and_hms_opt(12, 0, 0).unwrap()), 60);
    }

    #[test]
    fn test_index_in_range() {
        for day in 1..=5 {
            assert_eq!(index_for_day_of_year(day, 5), Ok((day - 1) as usize));
        }
    }

    #[test]
    fn test_index_clamps() {
        assert_eq!(index_for_day_of_year(400, 5), Ok(4));
        assert_eq!(index_for_day_of_year(0, 5), Ok(0));
        assert_eq!(index_for_day_of_year(-30, 5), Ok(0));
        assert_eq!(index_for_day_of_year(i64::MIN, 5), Ok(0));
        assert_eq!(index_for_day_of_year(i64::MAX, 1), Ok(0));
    }

    #[test]
    fn test_index_empty_list() {
        assert!(matches!(
            index_for_day_of_year(1, 0),
            Err(CalendarError::InvalidArgument(_))
        ));
    }
}
