//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary, plus loading of
//! custom lists.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WORD_SIZE;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), WORD_SIZE, "Word '{word}' is not {WORD_SIZE} letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn dictionary_knows_common_words() {
        for word in ["TESTS", "WRONG", "GUESS", "HELLO", "WORLD", "HAPPY", "CODER"] {
            assert!(DICTIONARY.contains(&word), "missing {word}");
        }
    }
}
