//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: every line read is one submission.

use crate::game::{GuessRejection, WordleBoard};
use crate::output::formatters::colored_row;
use crate::settings::{MAX_GUESSES_COUNT, WORD_SIZE};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple(board: &mut WordleBoard<'_>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(board, stdin.lock(), stdout.lock())
}

/// Play `board` reading guesses from `input` and writing to `output`
///
/// Stops when the game ends or `input` runs out.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn play_lines<R: BufRead, W: Write>(
    board: &mut WordleBoard<'_>,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════╗")?;
    writeln!(output, "║                  WORDLE                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the {WORD_SIZE}-letter word in {MAX_GUESSES_COUNT} tries. Type 'quit' to give up.\n"
    )?;

    for warning in board.warnings() {
        writeln!(output, "{} {warning}", "warning:".yellow().bold())?;
    }

    let mut lines = input.lines();
    while !board.is_input_disabled() {
        let turn = board.guesses().len() + 1;
        write!(output, "Guess {turn}/{MAX_GUESSES_COUNT}: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;

        if matches!(line.trim(), "quit" | "q" | "exit") {
            break;
        }

        board.set_input(&line);
        match board.submit() {
            Ok(guess) => {
                writeln!(output, "  {}  {}", colored_row(guess), guess.feedback.to_emoji())?;
            }
            Err(GuessRejection::GameOver) => break,
            Err(rejection) => {
                writeln!(output, "  {} {rejection}", "✗".red())?;
            }
        }
    }

    if let Some(message) = board.end_message() {
        let message = if board.state().is_won() {
            message.green().bold()
        } else {
            message.red().bold()
        };
        writeln!(output, "\n{message}\n")?;
        writeln!(output, "{}", board.share_grid())?;
    } else {
        writeln!(output, "\n👋 Thanks for playing!")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::settings::{DEFEAT_MESSAGE, VICTORY_MESSAGE};
    use crate::wordlists::Dictionary;

    fn play(board: &mut WordleBoard<'_>, script: &str) -> String {
        let mut output = Vec::new();
        play_lines(board, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn win_prints_victory_and_share_grid() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("WORLD", &dictionary);

        let output = play(&mut board, "wrong\nworld\n");

        assert_eq!(board.status(), GameStatus::Won);
        assert!(output.contains(VICTORY_MESSAGE));
        assert!(output.contains("🟩🟨🟨⬜⬜\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn six_misses_print_defeat() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("TESTS", &dictionary);

        let output = play(&mut board, &"WRONG\n".repeat(MAX_GUESSES_COUNT + 2));

        assert_eq!(board.status(), GameStatus::Lost);
        assert_eq!(board.guesses().len(), MAX_GUESSES_COUNT);
        assert!(output.contains(DEFEAT_MESSAGE));
    }

    #[test]
    fn rejected_lines_are_reported_and_not_counted() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("TESTS", &dictionary);

        let output = play(&mut board, "asdf\nqxzqx\n");

        assert!(board.guesses().is_empty());
        assert!(output.contains("not in the word list"));
        assert!(output.contains("Thanks for playing"));
        assert!(!output.contains(VICTORY_MESSAGE));
        assert!(!output.contains(DEFEAT_MESSAGE));
    }

    #[test]
    fn quit_stops_the_loop() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("TESTS", &dictionary);

        play(&mut board, "quit\ntests\n");

        assert_eq!(board.status(), GameStatus::Playing);
    }

    #[test]
    fn warnings_are_printed_first() {
        let dictionary = Dictionary::embedded();
        let mut board = WordleBoard::mount("tests", &dictionary);

        let output = play(&mut board, "");

        assert!(output.contains("must be all in uppercase"));
    }
}
