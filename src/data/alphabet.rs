//! The fixed, ordered set of characters that glyphs are authored for.
//!
//! Order matters: it drives thumbnail layout, JSON export order and the
//! order of entries in generated source.

/// Uppercase, lowercase, digits, then punctuation.
pub const ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!?:;<>\\-_,.+=()/'*";

/// Number of characters in [`ALPHABET`] (all ASCII, so bytes == chars).
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Iterate the alphabet in order.
pub fn chars() -> impl Iterator<Item = char> + Clone {
    ALPHABET.chars()
}

/// Position of `c` in the alphabet, if it belongs to it.
pub fn index_of(c: char) -> Option<usize> {
    if c.is_ascii() {
        ALPHABET.find(c)
    } else {
        None
    }
}

/// Character at `index`, if in range.
pub fn char_at(index: usize) -> Option<char> {
    ALPHABET.as_bytes().get(index).map(|&b| b as char)
}

pub fn contains(c: char) -> bool {
    index_of(c).is_some()
}

/// First character; the active glyph at startup.
pub fn first() -> char {
    'A'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_ascii_and_unique() {
        assert!(ALPHABET.is_ascii());
        let mut seen = std::collections::HashSet::new();
        for c in chars() {
            assert!(seen.insert(c), "duplicate character {c:?}");
        }
        assert_eq!(seen.len(), ALPHABET_LEN);
    }

    #[test]
    fn test_alphabet_groups() {
        assert_eq!(chars().filter(|c| c.is_ascii_uppercase()).count(), 26);
        assert_eq!(chars().filter(|c| c.is_ascii_lowercase()).count(), 26);
        assert_eq!(chars().filter(|c| c.is_ascii_digit()).count(), 10);
        assert_eq!(chars().filter(|c| c.is_ascii_punctuation()).count(), 18);
        assert!(contains('\\'));
        assert!(contains('\''));
        assert!(!contains(' '));
        assert!(!contains('é'));
    }

    #[test]
    fn test_index_round_trip() {
        for (i, c) in chars().enumerate() {
            assert_eq!(index_of(c), Some(i));
            assert_eq!(char_at(i), Some(c));
        }
        assert_eq!(char_at(ALPHABET_LEN), None);
        assert_eq!(first(), char_at(0).unwrap());
    }
}
