//! Core data types for chords and daily content

pub mod pitch_class;
pub mod chord;
pub mod options;
pub mod verse;

pub use pitch_class::{PitchClass, Spelling, SHARP_NAMES, FLAT_NAMES};
pub use chord::{ChordSymbol, SlashBass};
pub use options::TransposeOptions;
pub use verse::Verse;
