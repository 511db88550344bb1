//! Wordle Board
//!
//! A terminal Wordle: guess the word of the day in six tries, with per-letter
//! feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_board::game::WordleBoard;
//! use wordle_board::settings::VICTORY_MESSAGE;
//! use wordle_board::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let mut board = WordleBoard::mount("WORLD", &dictionary);
//!
//! let guess = board.submit_text("wrong").unwrap();
//! println!("{}", guess.feedback.to_emoji()); // 🟩🟨🟨⬜⬜
//!
//! board.submit_text("world").unwrap();
//! assert_eq!(board.end_message(), Some(VICTORY_MESSAGE));
//! ```

// Constants shared by every module
pub mod settings;

// Core domain types
pub mod core;

// Rules, game state and the board
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
