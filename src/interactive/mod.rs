//! Interactive TUI mode
//!
//! Terminal front end for the board built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;
