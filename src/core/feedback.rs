//! Per-letter feedback for a guess
//!
//! Each guess position is classified relative to the target:
//! - `Correct`: same letter in the same position
//! - `Almost`: letter is in the target, but elsewhere
//! - `Incorrect`: letter is not in the target (or all its occurrences are used up)

use super::Word;
use super::word::letter_counts;
use crate::settings::WORD_SIZE;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Almost,
    Incorrect,
}

impl LetterFeedback {
    /// Attribute name exposed on rendered letter cells
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Almost => "almost",
            Self::Incorrect => "incorrect",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Almost => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_SIZE]);

impl Feedback {
    /// All letters in place
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_SIZE]);

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Implements Wordle's rules for duplicate letters: a letter is credited
    /// at most as many times as it occurs in the answer.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters from what remains
    ///
    /// # Examples
    /// ```
    /// use wordle_board::core::{Feedback, LetterFeedback, Word};
    ///
    /// let guess = Word::new("WRONG").unwrap();
    /// let answer = Word::new("WORLD").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.get(0), LetterFeedback::Correct);
    /// assert_eq!(feedback.get(1), LetterFeedback::Almost);
    /// assert_eq!(feedback.get(2), LetterFeedback::Almost);
    /// assert_eq!(feedback.get(3), LetterFeedback::Incorrect);
    /// assert_eq!(feedback.get(4), LetterFeedback::Incorrect);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        Self::calculate_against(guess, answer.text())
    }

    /// Calculate feedback against raw target text
    ///
    /// The target is compared byte for byte without normalization, so it may
    /// be shorter, longer or differently cased than a valid word. Positions
    /// past the end of the target never match in place.
    #[must_use]
    pub fn calculate_against(guess: &Word, target: &str) -> Self {
        let target = target.as_bytes();
        let mut result = [LetterFeedback::Incorrect; WORD_SIZE];
        let mut available = letter_counts(target);

        // First pass: exact position matches
        for (i, &letter) in guess.chars().iter().enumerate() {
            if target.get(i) == Some(&letter) {
                result[i] = LetterFeedback::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from the remaining pool
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterFeedback::Almost;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Feedback at a position
    ///
    /// # Panics
    /// Panics if position >= `WORD_SIZE`
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> LetterFeedback {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_SIZE] {
        &self.0
    }

    /// Check if every letter is in place
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    #[must_use]
    pub fn count_almost(&self) -> usize {
        self.count(LetterFeedback::Almost)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Convert feedback to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
