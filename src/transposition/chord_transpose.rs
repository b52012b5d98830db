//! Chord symbol transposition around the chromatic circle
//!
//! The root and any slash bass move; the suffix (quality, extensions) is
//! copied through byte-for-byte. Output spelling comes from the caller's
//! `prefer_flats` flag, never from the input's own spelling.

use thiserror::Error;

use crate::models::chord::ChordSymbol;
use crate::models::pitch_class::Spelling;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// Key name does not begin with a recognized root
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}

/// Transpose a chord symbol by a signed number of semitones
///
/// Strings that do not start with a recognized root are returned unchanged.
/// An offset that is a multiple of 12 is a no-op and also returns the input
/// unchanged, regardless of `prefer_flats`.
///
/// Examples:
///   ("C", 1, false)   → "C#"
///   ("C", 1, true)    → "Db"
///   ("G/B", 5, false) → "C/E"
///   ("Xyz", 3, false) → "Xyz"
pub fn transpose(chord: &str, semitones: i32, prefer_flats: bool) -> String {
    if semitones.rem_euclid(12) == 0 {
        return chord.to_string();
    }

    match ChordSymbol::parse(chord) {
        Some(symbol) => symbol
            .transposed(semitones)
            .spell(Spelling::from_prefer_flats(prefer_flats)),
        None => {
            log::trace!("transpose: no root in '{}', echoing input", chord);
            chord.to_string()
        }
    }
}

/// Transpose every chord in a list with the same offset and spelling
pub fn transpose_all<S: AsRef<str>>(chords: &[S], semitones: i32, prefer_flats: bool) -> Vec<String> {
    chords
        .iter()
        .map(|c| transpose(c.as_ref(), semitones, prefer_flats))
        .collect()
}

/// Upward offset in [0, 11] that takes the root of `from_key` to the root of `to_key`
///
/// Keys are parsed like chord symbols, so "Em" and "E" name the same root.
pub fn semitones_between(from_key: &str, to_key: &str) -> Result<i32, TransposeError> {
    let from = ChordSymbol::parse_root(from_key)
        .ok_or_else(|| TransposeError::UnknownKey(from_key.to_string()))?
        .0;
    let to = ChordSymbol::parse_root(to_key)
        .ok_or_else(|| TransposeError::UnknownKey(to_key.to_string()))?
        .0;

    Ok(from.semitones_to(to))
}
