//! The playable board
//!
//! Owns the guess input and the game state for one word of the day. Front
//! ends (TUI, line mode) feed keystrokes and submissions in and render
//! [`WordleBoard::guess_views`] and [`WordleBoard::end_message`] out.

use super::state::{GameState, GameStatus, Guess, GuessRejection};
use super::validator::{WordOfTheDayWarning, validate_word_of_the_day};
use crate::core::filter_input;
use crate::settings::MAX_GUESSES_COUNT;
use crate::wordlists::Dictionary;
use log::{debug, warn};

/// One row of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessView<'b> {
    /// A recorded guess with feedback
    Submitted(&'b Guess),
    /// The row currently being typed
    Typing(&'b str),
    Empty,
}

#[derive(Debug, Clone)]
pub struct WordleBoard<'a> {
    state: GameState<'a>,
    input: String,
    warnings: Vec<WordOfTheDayWarning>,
}

impl<'a> WordleBoard<'a> {
    /// Set up a board for `word_of_the_day`
    ///
    /// A malformed word of the day logs a warning per failed check and the
    /// board is created anyway.
    #[must_use]
    pub fn mount(word_of_the_day: &str, dictionary: &'a Dictionary) -> Self {
        let warnings = validate_word_of_the_day(word_of_the_day, dictionary);
        for warning in &warnings {
            warn!("{warning}");
        }

        Self {
            state: GameState::new(word_of_the_day, dictionary),
            input: String::new(),
            warnings,
        }
    }

    /// Replace this board with a fresh one for another word
    pub fn remount(&mut self, word_of_the_day: &str) {
        *self = Self::mount(word_of_the_day, self.state.dictionary());
    }

    /// Current (filtered) input value
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input value, keeping only what the filter allows
    ///
    /// Ignored once the input is disabled.
    pub fn set_input(&mut self, raw: &str) {
        if self.is_input_disabled() {
            return;
        }
        self.input = filter_input(raw);
    }

    pub fn push_char(&mut self, c: char) {
        let mut raw = self.input.clone();
        raw.push(c);
        self.set_input(&raw);
    }

    pub fn pop_char(&mut self) {
        if !self.is_input_disabled() {
            self.input.pop();
        }
    }

    /// Submit the current input as a guess
    ///
    /// An accepted guess clears the input. A rejected one leaves it as typed.
    ///
    /// # Errors
    ///
    /// Returns the `GuessRejection` from the game state.
    pub fn submit(&mut self) -> Result<&Guess, GuessRejection> {
        let input = std::mem::take(&mut self.input);
        match self.state.submit_guess(&input) {
            Ok(guess) => {
                debug!("accepted guess {} {}", guess.word, guess.feedback.to_emoji());
                Ok(guess)
            }
            Err(rejection) => {
                debug!("rejected guess {input:?}: {rejection}");
                if rejection != GuessRejection::GameOver {
                    self.input = input;
                }
                Err(rejection)
            }
        }
    }

    /// Convenience for typing `raw` and pressing Enter
    ///
    /// # Errors
    ///
    /// Same as [`WordleBoard::submit`].
    pub fn submit_text(&mut self, raw: &str) -> Result<&Guess, GuessRejection> {
        self.set_input(raw);
        self.submit()
    }

    #[must_use]
    pub fn is_input_disabled(&self) -> bool {
        self.state.is_over()
    }

    /// Exactly `MAX_GUESSES_COUNT` rows: recorded guesses, then the row being
    /// typed while the game runs, then empty rows
    #[must_use]
    pub fn guess_views(&self) -> Vec<GuessView<'_>> {
        let mut views: Vec<GuessView<'_>> = self
            .state
            .guesses()
            .iter()
            .map(GuessView::Submitted)
            .collect();

        if !self.is_input_disabled() {
            views.push(GuessView::Typing(&self.input));
        }

        views.resize(MAX_GUESSES_COUNT, GuessView::Empty);
        views
    }

    #[must_use]
    pub fn end_message(&self) -> Option<&'static str> {
        self.state.end_message()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub fn state(&self) -> &GameState<'a> {
        &self.state
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        self.state.guesses()
    }

    /// Problems found with the word of the day at mount time
    #[must_use]
    pub fn warnings(&self) -> &[WordOfTheDayWarning] {
        &self.warnings
    }

    /// Emoji grid of every guess, one row per line
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.guesses()
            .iter()
            .map(|guess| guess.feedback.to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_row_follows_submitted_guesses() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("TESTS", &dictionary);

        board.submit_text("WRONG").unwrap();
        board.set_input("gue");

        let views = board.guess_views();
        assert_eq!(views.len(), MAX_GUESSES_COUNT);
        assert!(matches!(views[0], GuessView::Submitted(g) if g.word.text() == "WRONG"));
        assert_eq!(views[1], GuessView::Typing("GUE"));
        assert!(views[2..].iter().all(|v| *v == GuessView::Empty));
    }

    #[test]
    fn no_typing_row_after_game_over() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("TESTS", &dictionary);

        board.submit_text("TESTS").unwrap();

        let views = board.guess_views();
        assert_eq!(views.len(), MAX_GUESSES_COUNT);
        assert!(!views.iter().any(|v| matches!(v, GuessView::Typing(_))));
    }

    #[test]
    fn push_and_pop_chars_go_through_the_filter() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("TESTS", &dictionary);

        for c in "h3!rtxyz".chars() {
            board.push_char(c);
        }
        assert_eq!(board.input(), "HRTXY");

        board.pop_char();
        assert_eq!(board.input(), "HRTX");
    }

    #[test]
    fn game_over_rejection_does_not_resurrect_input() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("TESTS", &dictionary);

        board.submit_text("TESTS").unwrap();
        assert_eq!(board.submit(), Err(GuessRejection::GameOver));
        assert_eq!(board.input(), "");
    }

    #[test]
    fn remount_starts_over() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("TESTS", &dictionary);

        board.submit_text("TESTS").unwrap();
        board.remount("fly");

        assert!(board.guesses().is_empty());
        assert_eq!(board.status(), GameStatus::Playing);
        assert!(!board.warnings().is_empty());
    }

    #[test]
    fn share_grid_has_a_line_per_guess() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("WORLD", &dictionary);

        board.submit_text("WRONG").unwrap();
        board.submit_text("WORLD").unwrap();

        assert_eq!(board.share_grid(), "🟩🟨🟨⬜⬜\n🟩🟩🟩🟩🟩");
    }
}
