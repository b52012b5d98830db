//! Chord symbol parsing
//!
//! A chord symbol is a root (a canonical pitch-class name), an opaque suffix
//! carrying quality and extensions ("m7", "sus4", "add9"), and an optional
//! slash bass ("/B"). The suffix is never interpreted. The slash bass is the
//! only part after the root that is itself a pitch and moves with the root.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch_class::{PitchClass, Spelling};

/// Bass note written after a slash, plus anything trailing it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlashBass {
    pub note: PitchClass,
    pub tail: String,
}

/// A chord split into root, untouched suffix and optional slash bass
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordSymbol {
    pub root: PitchClass,
    pub suffix: String,
    pub bass: Option<SlashBass>,
}

impl ChordSymbol {
    /// Split `chord` into the longest valid root prefix plus the remainder
    ///
    /// The root is at most two characters: a letter A-G optionally followed
    /// by `#` or `b`, and must appear in the sharp or flat table. Returns
    /// `None` when the string does not begin with a recognized root.
    ///
    /// If the remainder contains a slash, and the text after the last slash
    /// starts with a root, that root becomes the slash bass.
    ///
    /// Examples:
    ///   "Cm7"   → (C, "m7", -)
    ///   "Bb/D"  → (A#, "", D)
    ///   "C6/9"  → (C, "6/9", -)
    ///   "E#"    → (E, "#", -)   (E# is not a canonical name)
    ///   "xyz"   → None
    pub fn parse(chord: &str) -> Option<ChordSymbol> {
        let (root, root_len) = Self::parse_root(chord)?;
        let rest = &chord[root_len..];

        if let Some(slash) = rest.rfind('/') {
            let after = &rest[slash + 1..];
            if let Some((note, len)) = Self::parse_root(after) {
                return Some(ChordSymbol {
                    root,
                    suffix: rest[..slash].to_string(),
                    bass: Some(SlashBass {
                        note,
                        tail: after[len..].to_string(),
                    }),
                });
            }
        }

        Some(ChordSymbol {
            root,
            suffix: rest.to_string(),
            bass: None,
        })
    }

    /// Parse only the root prefix, returning it with its byte length
    pub fn parse_root(chord: &str) -> Option<(PitchClass, usize)> {
        // Letters and accidentals are ASCII, so byte slicing stays on char boundaries
        let bytes = chord.as_bytes();
        if bytes.len() >= 2 && matches!(bytes[1], b'#' | b'b') {
            if let Some(pc) = PitchClass::from_name(&chord[..2]) {
                return Some((pc, 2));
            }
        }
        if !bytes.is_empty() && bytes[0].is_ascii() {
            if let Some(pc) = PitchClass::from_name(&chord[..1]) {
                return Some((pc, 1));
            }
        }
        None
    }

    /// Render with root and bass spelled from the given table
    pub fn spell(&self, spelling: Spelling) -> String {
        let mut out = format!("{}{}", self.root.name(spelling), self.suffix);
        if let Some(bass) = &self.bass {
            out.push('/');
            out.push_str(bass.note.name(spelling));
            out.push_str(&bass.tail);
        }
        out
    }

    pub fn transposed(&self, semitones: i32) -> ChordSymbol {
        ChordSymbol {
            root: self.root.transpose(semitones),
            suffix: self.suffix.clone(),
            bass: self.bass.as_ref().map(|b| SlashBass {
                note: b.note.transpose(semitones),
                tail: b.tail.clone(),
            }),
        }
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spell(Spelling::Sharps))
    }
}
