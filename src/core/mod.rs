//! Core domain types for Wordle
//!
//! Words, letter feedback and the keystroke filter. Everything here is pure
//! and independent of the game loop.

mod feedback;
mod input;
mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use input::filter_input;
pub use word::{Word, WordError};
