//! Caller-supplied options for transposition

use serde::{Deserialize, Serialize};

use super::pitch_class::Spelling;

/// Transposition settings as sent by the song page
///
/// Missing fields fall back to `Default` (no shift, sharp spelling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransposeOptions {
    /// Signed semitone offset, any integer
    pub semitones: i32,

    /// Spell transposed roots from the flat table
    pub prefer_flats: bool,
}

impl TransposeOptions {
    pub fn new(semitones: i32, prefer_flats: bool) -> Self {
        Self {
            semitones,
            prefer_flats,
        }
    }

    pub fn spelling(&self) -> Spelling {
        Spelling::from_prefer_flats(self.prefer_flats)
    }
}
