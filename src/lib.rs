//! Songbook WASM Module
//!
//! Pure helpers behind the worship song catalog: chord transposition for
//! song pages and the calendar rotation that picks the verse of the day.

pub mod models;
pub mod transposition;
pub mod calendar;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use transposition::{transpose, transpose_all, transpose_chord_sheet, semitones_between, TransposeError};
pub use calendar::{select_for_date, select_for_today, ContentCalendar, CalendarError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            log::warn!("Logger already initialized");
        }
    }

    log::info!("Songbook WASM module initialized");
}
