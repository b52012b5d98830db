// Test calendar-based content rotation through the public API

use chrono::{Datelike, NaiveDate};
use songbook_wasm::calendar::{index_for_day_of_year, select_for_date, select_for_today};
use songbook_wasm::{CalendarError, ContentCalendar, Verse};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_five_items_first_five_days() {
    let items = ["v1", "v2", "v3", "v4", "v5"];
    let expected = [0usize, 1, 2, 3, 4];

    for (day, idx) in (1..=5).zip(expected) {
        assert_eq!(index_for_day_of_year(day, items.len()), Ok(idx));
        assert_eq!(
            select_for_date(date(2026, 1, day as u32), &items),
            Ok(&items[idx])
        );
    }
}

#[test]
fn test_out_of_range_days_clamp() {
    assert_eq!(index_for_day_of_year(400, 5), Ok(4));
    assert_eq!(index_for_day_of_year(0, 5), Ok(0));
    assert_eq!(index_for_day_of_year(-1, 5), Ok(0));
}

#[test]
fn test_every_day_of_a_leap_year_selects_a_member() {
    let items = vec![1, 2, 3, 4, 5, 6, 7];
    let mut d = date(2024, 1, 1);
    while d.year() == 2024 {
        let picked = select_for_date(d, &items).unwrap();
        assert!(items.contains(picked));
        d = d.succ_opt().unwrap();
    }
    assert_eq!(select_for_date(date(2024, 12, 31), &items), Ok(&7));
}

#[test]
fn test_full_year_list_follows_day_of_year() {
    let items: Vec<u32> = (1..=366).collect();
    assert_eq!(select_for_date(date(2025, 3, 1), &items), Ok(&60));
    assert_eq!(select_for_date(date(2024, 3, 1), &items), Ok(&61));
    assert_eq!(select_for_date(date(2025, 12, 31), &items), Ok(&365));
}

#[test]
fn test_empty_list_is_invalid_argument() {
    let items: Vec<String> = Vec::new();
    assert!(matches!(
        select_for_date(date(2026, 6, 1), &items),
        Err(CalendarError::InvalidArgument(_))
    ));
    assert!(matches!(
        select_for_today(&items),
        Err(CalendarError::InvalidArgument(_))
    ));
}

#[test]
fn test_select_for_today_stable_within_a_day() {
    let items = ["a", "b", "c", "d"];
    let first = select_for_today(&items).unwrap();
    let second = select_for_today(&items).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_curated_calendar_from_json() {
    let json = r#"[
        {"reference": "Psalm 23:1", "text": "The LORD is my shepherd; I shall not want."},
        {"reference": "Psalm 46:10", "text": "Be still, and know that I am God."}
    ]"#;
    let calendar: ContentCalendar<Verse> = ContentCalendar::from_json(json).unwrap();

    assert_eq!(calendar.for_date(date(2026, 1, 1)).reference, "Psalm 23:1");
    assert_eq!(calendar.for_date(date(2026, 1, 2)).reference, "Psalm 46:10");
    assert_eq!(calendar.for_date(date(2026, 9, 30)).reference, "Psalm 46:10");
}
