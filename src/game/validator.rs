//! Word-of-the-day validation
//!
//! Problems are reported as warnings, never as errors: the game runs with
//! whatever word it was given.

use crate::settings::WORD_SIZE;
use crate::wordlists::Dictionary;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordOfTheDayWarning {
    #[error("word-of-the-day \"{word}\" must have {size} characters, got {len}", size = WORD_SIZE)]
    WrongLength { word: String, len: usize },
    #[error("word-of-the-day \"{word}\" must be all in uppercase letters A-Z")]
    NotUppercase { word: String },
    #[error("word-of-the-day \"{word}\" must be a valid English word")]
    NotInDictionary { word: String },
}

/// Run every check against `word`, returning one warning per failed check
///
/// Dictionary membership is checked on the uppercased word, so a lowercase
/// dictionary word only fails the uppercase check.
#[must_use]
pub fn validate_word_of_the_day(word: &str, dictionary: &Dictionary) -> Vec<WordOfTheDayWarning> {
    let mut warnings = Vec::new();

    let len = word.chars().count();
    if len != WORD_SIZE {
        warnings.push(WordOfTheDayWarning::WrongLength {
            word: word.to_string(),
            len,
        });
    }

    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        warnings.push(WordOfTheDayWarning::NotUppercase {
            word: word.to_string(),
        });
    }

    if !dictionary.contains_text(&word.to_uppercase()) {
        warnings.push(WordOfTheDayWarning::NotInDictionary {
            word: word.to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(word: &str) -> Vec<WordOfTheDayWarning> {
        validate_word_of_the_day(word, &Dictionary::embedded())
    }

    #[test]
    fn valid_word_has_no_warnings() {
        assert!(check("TESTS").is_empty());
    }

    #[test]
    fn short_word_warns_about_length() {
        let warnings = check("FLY");
        assert!(warnings.contains(&WordOfTheDayWarning::WrongLength {
            word: "FLY".to_string(),
            len: 3,
        }));
    }

    #[test]
    fn lowercase_word_only_warns_about_case() {
        assert_eq!(
            check("tests"),
            vec![WordOfTheDayWarning::NotUppercase {
                word: "tests".to_string()
            }]
        );
    }

    #[test]
    fn unknown_word_warns_about_dictionary() {
        let warnings = check("ASDF");
        assert!(warnings.contains(&WordOfTheDayWarning::NotInDictionary {
            word: "ASDF".to_string()
        }));
        assert!(
            !warnings
                .iter()
                .any(|w| matches!(w, WordOfTheDayWarning::NotUppercase { .. }))
        );
    }

    #[test]
    fn well_formed_but_unknown_word() {
        assert_eq!(
            check("QXZQX"),
            vec![WordOfTheDayWarning::NotInDictionary {
                word: "QXZQX".to_string()
            }]
        );
    }

    #[test]
    fn every_check_can_fail_at_once() {
        assert_eq!(check("fl1").len(), 3);
    }

    #[test]
    fn warning_messages_name_the_word() {
        let warnings = check("tests");
        assert!(warnings[0].to_string().contains("\"tests\""));
    }
}
