//! Guess check command
//!
//! Scores a single guess against a target without playing a game.

use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
    pub guess_in_dictionary: bool,
    pub target_in_dictionary: bool,
}

/// Evaluate `guess` against `target`
///
/// Words outside the dictionary are still scored; the result records whether
/// each one is a dictionary word.
///
/// # Errors
///
/// Returns an error if either word is not a well-formed five-letter word.
pub fn check_guess(
    guess: &str,
    target: &str,
    dictionary: &Dictionary,
) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;

    let feedback = Feedback::calculate(&guess, &target);

    Ok(CheckResult {
        guess_in_dictionary: dictionary.contains(&guess),
        target_in_dictionary: dictionary.contains(&target),
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback;

    #[test]
    fn check_scores_guess() {
        let dictionary = Dictionary::embedded();
        let result = check_guess("wrong", "world", &dictionary).unwrap();

        assert_eq!(result.guess.text(), "WRONG");
        assert_eq!(result.feedback.get(0), LetterFeedback::Correct);
        assert_eq!(result.feedback.get(1), LetterFeedback::Almost);
        assert!(result.guess_in_dictionary);
        assert!(result.target_in_dictionary);
    }

    #[test]
    fn check_flags_unknown_words() {
        let dictionary = Dictionary::embedded();
        let result = check_guess("QXZQX", "TESTS", &dictionary).unwrap();

        assert!(!result.guess_in_dictionary);
        assert!(result.target_in_dictionary);
    }

    #[test]
    fn check_rejects_malformed_words() {
        let dictionary = Dictionary::embedded();

        let err = check_guess("ASDF", "TESTS", &dictionary).err().unwrap();
        assert!(err.starts_with("Invalid guess"));

        let err = check_guess("TESTS", "FLY", &dictionary).err().unwrap();
        assert!(err.starts_with("Invalid target"));
    }
}
