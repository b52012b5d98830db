pub mod chord_transpose;
pub mod chord_sheet;

pub use chord_transpose::{transpose, transpose_all, semitones_between, TransposeError};
pub use chord_sheet::{transpose_chord_sheet, extract_chords, is_chord_token};
