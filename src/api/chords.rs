//! Chord operations for the WASM API
//!
//! Called by the song page whenever the user picks a new key or toggles
//! flat spelling.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, js_error};
use crate::models::options::TransposeOptions;
use crate::transposition;

/// Transpose a single chord symbol
///
/// Unrecognized chords are returned unchanged.
#[wasm_bindgen(js_name = transposeChord)]
pub fn transpose_chord(chord: &str, semitones: i32, prefer_flats: bool) -> String {
    transposition::transpose(chord, semitones, prefer_flats)
}

/// Transpose a single chord symbol using an options object
///
/// # Parameters
/// - `options`: `{ semitones?: number, preferFlats?: boolean }`
#[wasm_bindgen(js_name = transposeChordWithOptions)]
pub fn transpose_chord_with_options(chord: &str, options: JsValue) -> Result<String, JsValue> {
    let options: TransposeOptions = if options.is_undefined() || options.is_null() {
        TransposeOptions::default()
    } else {
        deserialize(options, "Invalid transpose options")?
    };

    Ok(transposition::transpose(chord, options.semitones, options.prefer_flats))
}

/// Transpose every `[chord]` in a lyric sheet
#[wasm_bindgen(js_name = transposeChordSheet)]
pub fn transpose_chord_sheet(text: &str, semitones: i32, prefer_flats: bool) -> String {
    log::debug!(
        "transposeChordSheet called ({} bytes, {} semitones, flats={})",
        text.len(),
        semitones,
        prefer_flats
    );
    transposition::transpose_chord_sheet(text, semitones, prefer_flats)
}

/// Semitone offset in [0, 11] from one key to another
#[wasm_bindgen(js_name = semitonesBetweenKeys)]
pub fn semitones_between_keys(from_key: &str, to_key: &str) -> Result<i32, JsValue> {
    transposition::semitones_between(from_key, to_key)
        .map_err(|e| js_error("semitonesBetweenKeys failed", e))
}
