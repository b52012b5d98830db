//! The 12 equal-tempered pitch classes, indexed 0-11 starting at C
//!
//! Each pitch class has exactly two canonical spellings:
//! - Sharp table: C C# D D# E F F# G G# A A# B
//! - Flat table:  C Db D Eb E F Gb G Ab A Bb B
//!
//! Naturals share the same text in both tables. Spellings outside these
//! tables (E#, Cb, double accidentals) are not pitch-class names here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sharp-spelled names, indexed by pitch class
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-spelled names, indexed by pitch class
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Which name table to spell output roots from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharps,
    Flats,
}

impl Spelling {
    /// Map the caller's `preferFlats` flag to a spelling
    pub fn from_prefer_flats(prefer_flats: bool) -> Self {
        if prefer_flats {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    pub fn names(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharps => &SHARP_NAMES,
            Spelling::Flats => &FLAT_NAMES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

const ALL: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
];

impl PitchClass {
    /// Position on the chromatic circle, 0 (C) to 11 (B)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for any integer, reduced into [0, 12)
    pub fn from_index(index: i64) -> PitchClass {
        ALL[index.rem_euclid(12) as usize]
    }

    /// Look up a name in either table (exact, case-sensitive)
    ///
    /// Examples:
    ///   "C"  → C
    ///   "C#" → Cs
    ///   "Db" → Cs
    ///   "E#" → None (not a canonical spelling)
    pub fn from_name(name: &str) -> Option<PitchClass> {
        SHARP_NAMES
            .iter()
            .position(|n| *n == name)
            .or_else(|| FLAT_NAMES.iter().position(|n| *n == name))
            .map(|i| ALL[i])
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        spelling.names()[self.index() as usize]
    }

    /// Move up (positive) or down (negative) by semitones, wrapping at the octave
    pub fn transpose(self, semitones: i32) -> PitchClass {
        // Reduce first so the sum cannot overflow for extreme offsets
        let offset = i64::from(semitones.rem_euclid(12));
        PitchClass::from_index(i64::from(self.index()) + offset)
    }

    /// Upward distance in semitones from `self` to `other`, in [0, 12)
    pub fn semitones_to(self, other: PitchClass) -> i32 {
        (i32::from(other.index()) - i32::from(self.index())).rem_euclid(12)
    }

    pub fn all() -> &'static [PitchClass; 12] {
        &ALL
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(Spelling::Sharps))
    }
}

impl FromStr for PitchClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s).ok_or_else(|| {
            format!(
                "Invalid pitch class: '{}'. Expected one of: {} or {}",
                s,
                SHARP_NAMES.join(", "),
                FLAT_NAMES.join(", ")
            )
        })
    }
}
