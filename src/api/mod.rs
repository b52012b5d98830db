//! Songbook WASM API
//!
//! This module provides the JavaScript-facing API for the songbook front end.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization and error conversion
//! - `chords`: Chord and chord-sheet transposition
//! - `calendar`: Date-based content rotation (verse of the day)

pub mod helpers;
pub mod chords;
pub mod calendar;

pub use chords::{transpose_chord, transpose_chord_with_options, transpose_chord_sheet, semitones_between_keys};
pub use calendar::{select_for_date, select_for_today, verse_of_the_day};
