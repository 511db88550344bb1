//! Game-wide constants

/// Number of letters in every word
pub const WORD_SIZE: usize = 5;

/// Guesses allowed before the game is lost
pub const MAX_GUESSES_COUNT: usize = 6;

/// Shown once the word of the day has been guessed
pub const VICTORY_MESSAGE: &str = "You won! Nicely done.";

/// Shown once every guess has been used without finding the word
pub const DEFEAT_MESSAGE: &str = "Better luck next time!";
