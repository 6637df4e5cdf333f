pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Slot of `a` in a trie node's child array, or `None` for characters outside the alphabet.
pub fn get_idx(a: char) -> Option<usize> {
    if a.is_ascii_lowercase() {
        Some((a as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn letter_at(idx: usize) -> char {
    ALPHABET[idx] as char
}

pub fn is_alphabetic(s: &str) -> bool {
    s.chars().all(|c| get_idx(c).is_some())
}

/// Trims a raw dictionary line and keeps it only if it is a non-empty lowercase ASCII
/// word at least `min_word_len` long. Every backend builds from this filter.
pub fn normalize(line: &str, min_word_len: usize) -> Option<&str> {
    let word = line.trim();
    if !word.is_empty() && word.len() >= min_word_len && is_alphabetic(word) {
        Some(word)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{get_idx, is_alphabetic, letter_at, normalize, ALPHABET};

    #[test]
    fn indexes_round_trip_through_letters() {
        for idx in 0..ALPHABET.len() {
            assert_eq!(get_idx(letter_at(idx)), Some(idx));
        }
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert_eq!(get_idx('A'), None);
        assert_eq!(get_idx(' '), None);
        assert_eq!(get_idx('é'), None);
        assert!(!is_alphabetic("don't"));
        assert!(is_alphabetic("dance"));
    }

    #[test]
    fn normalize_trims_and_filters_short_lines() {
        assert_eq!(normalize("  dance \n", 2), Some("dance"));
        assert_eq!(normalize(" a ", 2), None);
        assert_eq!(normalize("", 1), None);
        assert_eq!(normalize("ab", 2), Some("ab"));
    }

    #[test]
    fn normalize_drops_empty_lines_even_without_minimum() {
        assert_eq!(normalize("", 0), None);
        assert_eq!(normalize("   ", 0), None);
        assert_eq!(normalize("a", 0), Some("a"));
    }

    #[test]
    fn normalize_drops_non_alphabetic_words() {
        assert_eq!(normalize("don't", 2), None);
        assert_eq!(normalize("Dance", 2), None);
        assert_eq!(normalize(" north ", 2), Some("north"));
    }
}
