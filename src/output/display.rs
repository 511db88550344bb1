//! Display functions for command results

use super::formatters::feedback_row;
use crate::commands::CheckResult;
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_yellow().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}  {}",
        feedback_row(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );

    let labels: Vec<&str> = result
        .feedback
        .letters()
        .iter()
        .map(|feedback| feedback.as_str())
        .collect();
    println!("  {}", labels.join(", ").bright_black());

    for (word, known) in [
        (&result.guess, result.guess_in_dictionary),
        (&result.target, result.target_in_dictionary),
    ] {
        if !known {
            println!(
                "\n  {} {} is not in the word list",
                "note:".yellow().bold(),
                word.text()
            );
        }
    }

    println!();
    if result.feedback.is_perfect() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "{} correct, {} almost",
            result.feedback.count_correct(),
            result.feedback.count_almost()
        );
    }
}
