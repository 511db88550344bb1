//! Guess history and end-of-game tracking

use crate::core::{Feedback, Word, WordError};
use crate::settings::{DEFEAT_MESSAGE, MAX_GUESSES_COUNT, VICTORY_MESSAGE};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// A recorded guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Why a submission was not recorded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("the game is already over")]
    GameOver,
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error("\"{0}\" is not in the word list")]
    NotInDictionary(String),
}

/// State of one game against a fixed word of the day
///
/// Holds the target exactly as supplied. A malformed target still plays: it
/// simply can never be matched.
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    target: String,
    dictionary: &'a Dictionary,
    guesses: Vec<Guess>,
    status: GameStatus,
}

impl<'a> GameState<'a> {
    #[must_use]
    pub fn new(target: impl Into<String>, dictionary: &'a Dictionary) -> Self {
        Self {
            target: target.into(),
            dictionary,
            guesses: Vec::with_capacity(MAX_GUESSES_COUNT),
            status: GameStatus::Playing,
        }
    }

    /// Record a guess if the game is running and `raw` is a dictionary word
    ///
    /// Case is ignored. A rejected guess leaves the state untouched.
    ///
    /// # Errors
    ///
    /// Returns a `GuessRejection` if the game is over, `raw` is not a
    /// well-formed word, or the word is not in the dictionary.
    pub fn submit_guess(&mut self, raw: &str) -> Result<&Guess, GuessRejection> {
        if self.is_over() {
            return Err(GuessRejection::GameOver);
        }

        let word = Word::new(raw)?;
        if !self.dictionary.contains(&word) {
            return Err(GuessRejection::NotInDictionary(word.text().to_string()));
        }

        let feedback = Feedback::calculate_against(&word, &self.target);
        let won = word.text() == self.target;
        self.guesses.push(Guess { word, feedback });

        self.status = if won {
            GameStatus::Won
        } else if self.guesses.len() == MAX_GUESSES_COUNT {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        Ok(&self.guesses[self.guesses.len() - 1])
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        if self.is_over() {
            0
        } else {
            MAX_GUESSES_COUNT - self.guesses.len()
        }
    }

    /// Victory or defeat message, `None` while the game is running
    #[must_use]
    pub const fn end_message(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won => Some(VICTORY_MESSAGE),
            GameStatus::Lost => Some(DEFEAT_MESSAGE),
        }
    }
}
