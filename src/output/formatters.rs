//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use crate::game::Guess;
use colored::{ColoredString, Colorize};

/// Format one letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {letter} ");
    match feedback {
        LetterFeedback::Correct => tile.black().on_green().bold(),
        LetterFeedback::Almost => tile.black().on_yellow().bold(),
        LetterFeedback::Incorrect => tile.white().on_bright_black().bold(),
    }
}

/// Format a word as coloured tiles according to its feedback
#[must_use]
pub fn feedback_row(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .zip(feedback.letters())
        .map(|(letter, &kind)| letter_tile(letter, kind).to_string())
        .collect()
}

#[must_use]
pub fn colored_row(guess: &Guess) -> String {
    feedback_row(&guess.word, &guess.feedback)
}
