//! Transposition of inline chord sheets
//!
//! Catalog lyrics carry chords in square brackets directly above the
//! syllable they fall on:
//!
//!   [G]Amazing [G7]grace how [C]sweet the [G]sound
//!
//! A bracketed group is transposed only when the whole group reads as one
//! chord token. Section labels such as `[Chorus]` or `[Verse 1]`, lyric text
//! and the brackets themselves are left as they are.

use super::chord_transpose::transpose;
use crate::models::chord::ChordSymbol;

/// Quality words allowed after a root, longest first so "maj" wins over "m"
const QUALITY_WORDS: [&str; 8] = ["maj", "min", "dim", "aug", "sus", "add", "m", "M"];

/// Single characters allowed after a root
const QUALITY_CHARS: &str = "#b+-°ø()";

/// True when `group` is a single chord symbol: a root followed only by
/// quality words, digits, accidentals, parentheses and slash bass notes
///
/// Examples:
///   "C/E", "F#m7b5", "Dsus4", "C6/9" → true
///   "Chorus", "Bridge", "Verse 1", "N.C." → false
pub fn is_chord_token(group: &str) -> bool {
    let Some((_, root_len)) = ChordSymbol::parse_root(group) else {
        return false;
    };
    let mut rest = &group[root_len..];

    while let Some(c) = rest.chars().next() {
        if let Some(word) = QUALITY_WORDS.iter().find(|w| rest.starts_with(**w)) {
            rest = &rest[word.len()..];
        } else if c == '/' {
            let after = &rest[1..];
            rest = match ChordSymbol::parse_root(after) {
                Some((_, len)) => &after[len..],
                None => after,
            };
        } else if c.is_ascii_digit() || QUALITY_CHARS.contains(c) {
            rest = &rest[c.len_utf8()..];
        } else {
            return false;
        }
    }

    true
}

/// Transpose every `[chord]` group in `text`
///
/// Groups that are not a single chord token are copied verbatim, as is an
/// unterminated `[` and everything after it.
pub fn transpose_chord_sheet(text: &str, semitones: i32, prefer_flats: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut chords = 0usize;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find(']') {
            Some(close) => {
                let group = &after_open[..close];
                out.push('[');
                if is_chord_token(group) {
                    out.push_str(&transpose(group, semitones, prefer_flats));
                    chords += 1;
                } else {
                    out.push_str(group);
                }
                out.push(']');
                rest = &after_open[close + 1..];
            }
            None => {
                log::warn!("Unterminated chord bracket at byte {}", text.len() - rest.len() + open);
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    log::debug!("transpose_chord_sheet: {} chords shifted by {}", chords, semitones);
    out
}

/// Collect the chord symbols of a sheet in order of appearance, skipping labels
pub fn extract_chords(text: &str) -> Vec<&str> {
    let mut chords = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find(']') else {
            break;
        };
        let group = &after_open[..close];
        if is_chord_token(group) {
            chords.push(group);
        }
        rest = &after_open[close + 1..];
    }

    chords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transposes_bracketed_chords_only() {
        let sheet = "[G]Amazing [G7]grace how [C]sweet the [G]sound";
        assert_eq!(
            transpose_chord_sheet(sheet, 2, false),
            "[A]Amazing [A7]grace how [D]sweet the [A]sound"
        );
    }

    #[test]
    fn test_lyrics_that_look_like_chords_untouched() {
        let sheet = "A mighty [D]fortress";
        assert_eq!(transpose_chord_sheet(sheet, 1, true), "A mighty [Eb]fortress");
    }

    #[test]
    fn test_unterminated_bracket_copied() {
        let sheet = "[C]Holy, holy [F";
        assert_eq!(transpose_chord_sheet(sheet, 2, false), "[D]Holy, holy [F");
    }

    #[test]
    fn test_section_labels_untouched() {
        let sheet = "[Chorus]\n[Em]Here I [C/E]am";
        assert_eq!(
            transpose_chord_sheet(sheet, -2, true),
            "[Chorus]\n[Dm]Here I [Bb/D]am"
        );
        assert_eq!(
            transpose_chord_sheet("[Bridge]\n[G]Holy [Verse 1]", 2, false),
            "[Bridge]\n[A]Holy [Verse 1]"
        );
        assert_eq!(transpose_chord_sheet("[x2] [N.C.]", 5, false), "[x2] [N.C.]");
    }

    #[test]
    fn test_is_chord_token() {
        for chord in ["C", "C/E", "F#m7b5", "Dsus4", "C6/9", "Bbmaj7", "Eaug", "Gadd9", "Am(maj7)", "Bø7", "C°", "A7-9", "Dm/F#"] {
            assert!(is_chord_token(chord), "{} should be a chord", chord);
        }
        for label in ["Chorus", "Bridge", "Verse 1", "Amen", "N.C.", "x2", "", "C E", "Dm7 "] {
            assert!(!is_chord_token(label), "{} should not be a chord", label);
        }
    }

    #[test]
    fn test_multibyte_lyrics() {
        let sheet = "[D]Señor, [A]tú eres [Bm]santo";
        assert_eq!(
            transpose_chord_sheet(sheet, 3, false),
            "[F]Señor, [C]tú eres [Dm]santo"
        );
    }

    #[test]
    fn test_extract_chords() {
        let sheet = "[Intro][G]Amazing [D/F#]grace [Em";
        assert_eq!(extract_chords(sheet), vec!["G", "D/F#"]);
        assert!(extract_chords("no chords").is_empty());
    }
}
