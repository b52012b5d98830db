//! Calendar-based content rotation
//!
//! Picks one item of a fixed ordered list for a given date: day 1 of the year
//! shows the first item, day 2 the second, and so on. Lists shorter than the
//! year keep showing their last item for every remaining day.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use super::day_of_year::{day_of_year, day_of_year_at, index_for_day_of_year};
use super::errors::CalendarError;
use crate::models::verse::Verse;

const BUILTIN_VERSES_JSON: &str = include_str!("../../data/verses.json");

static BUILTIN_VERSES: Lazy<Result<ContentCalendar<Verse>, CalendarError>> =
    Lazy::new(|| ContentCalendar::from_json(BUILTIN_VERSES_JSON));

/// Select the item assigned to `date`
///
/// Fails with `InvalidArgument` only when `items` is empty.
pub fn select_for_date<T>(date: NaiveDate, items: &[T]) -> Result<&T, CalendarError> {
    let index = index_for_day_of_year(day_of_year(date), items.len())?;
    log::trace!("select_for_date: {} -> index {} of {}", date, index, items.len());
    Ok(&items[index])
}

/// Select the item assigned to a local date-time, flooring partial days
pub fn select_for_moment<T>(moment: NaiveDateTime, items: &[T]) -> Result<&T, CalendarError> {
    let index = index_for_day_of_year(day_of_year_at(moment), items.len())?;
    log::trace!("select_for_moment: {} -> index {} of {}", moment, index, items.len());
    Ok(&items[index])
}

/// Select the item assigned to the current local date
pub fn select_for_today<T>(items: &[T]) -> Result<&T, CalendarError> {
    select_for_moment(now(), items)
}

/// Current local date-time (the browser's time zone, under WASM)
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(s.to_string()))
}

/// A non-empty, immutable rotation of daily content
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCalendar<T> {
    items: Vec<T>,
}

impl<T> ContentCalendar<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CalendarError> {
        if items.is_empty() {
            log::warn!("Rejecting empty content calendar");
            return Err(CalendarError::InvalidArgument(
                "content list must not be empty".to_string(),
            ));
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn index_for_date(&self, date: NaiveDate) -> usize {
        // Never empty, so the only error case cannot occur
        index_for_day_of_year(day_of_year(date), self.items.len()).unwrap_or(0)
    }

    pub fn index_for_moment(&self, moment: NaiveDateTime) -> usize {
        index_for_day_of_year(day_of_year_at(moment), self.items.len()).unwrap_or(0)
    }

    pub fn for_date(&self, date: NaiveDate) -> &T {
        &self.items[self.index_for_date(date)]
    }

    pub fn for_today(&self) -> &T {
        &self.items[self.index_for_moment(now())]
    }
}

impl<T: DeserializeOwned> ContentCalendar<T> {
    /// Decode a curated JSON array of items
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let items: Vec<T> =
            serde_json::from_str(json).map_err(|e| CalendarError::InvalidContent(e.to_string()))?;
        Self::new(items)
    }
}

impl ContentCalendar<Verse> {
    /// The verse rotation shipped with the crate
    pub fn builtin_verses() -> Result<&'static ContentCalendar<Verse>, CalendarError> {
        match &*BUILTIN_VERSES {
            Ok(calendar) => Ok(calendar),
            Err(e) => Err(e.clone()),
        }
    }
}
