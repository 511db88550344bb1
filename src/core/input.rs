//! Keystroke filtering for the guess input

use crate::settings::WORD_SIZE;

/// Sanitize raw input text as the player types
///
/// Drops every character that is not an ASCII letter, uppercases the rest
/// and keeps at most `WORD_SIZE` letters.
///
/// # Examples
/// ```
/// use wordle_board::core::filter_input;
///
/// assert_eq!(filter_input("H3!RT"), "HRT");
/// assert_eq!(filter_input("123"), "");
/// assert_eq!(filter_input("testsextra"), "TESTS");
/// ```
#[must_use]
pub fn filter_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .take(WORD_SIZE)
        .collect()
}
