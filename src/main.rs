//! Wordle Board - CLI
//!
//! Play Wordle in the terminal, with a full-screen TUI or a line-based mode.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_board::{
    commands::{check_guess, run_simple},
    game::WordleBoard,
    interactive::{App, run_tui},
    output::print_check_result,
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Guess the word of the day in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word of the day (default: random dictionary word)
    #[arg(short = 'w', long, global = true)]
    word: Option<String>,

    /// Path to a custom word list, one word per line (default: embedded list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score a single guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word to compare against
        target: String,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_dictionary(path: Option<&str>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list from {path}"))?,
        None => Dictionary::embedded(),
    };

    if dictionary.is_empty() {
        bail!("The word list contains no valid words");
    }
    log::info!("Loaded {} words", dictionary.len());
    Ok(dictionary)
}

/// Use the given word of the day, or draw one from the dictionary
fn word_of_the_day(word: Option<String>, dictionary: &Dictionary) -> Result<String> {
    if let Some(word) = word {
        return Ok(word);
    }
    dictionary
        .random_word(&mut rand::rng())
        .map(|word| word.text().to_string())
        .context("The word list is empty")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let word = word_of_the_day(cli.word, &dictionary)?;
            let board = WordleBoard::mount(&word, &dictionary);
            run_tui(App::new(board, &dictionary))
        }
        Commands::Simple => {
            let word = word_of_the_day(cli.word, &dictionary)?;
            let mut board = WordleBoard::mount(&word, &dictionary);
            run_simple(&mut board)?;
            Ok(())
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}
