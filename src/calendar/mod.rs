//! Daily content rotation driven by the calendar date

pub mod errors;
pub mod day_of_year;
pub mod selector;

pub use errors::CalendarError;
pub use day_of_year::{day_of_year, day_of_year_at, index_for_day_of_year};
pub use selector::{select_for_date, select_for_moment, select_for_today, parse_date, now, ContentCalendar};
