//! Game rules and the playable board
//!
//! - `validator`: advisory checks on the word of the day
//! - `state`: guess history and win/loss tracking
//! - `board`: the mounted component, owning input and state

pub mod board;
pub mod state;
pub mod validator;

pub use board::{GuessView, WordleBoard};
pub use state::{GameState, GameStatus, Guess, GuessRejection};
pub use validator::{WordOfTheDayWarning, validate_word_of_the_day};
