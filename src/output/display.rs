//! Display functions for command results

use super::formatters::{empty_row, guess_tiles, guess_to_emoji, key_tile};
use crate::commands::CheckResult;
use crate::core::LetterStatus;
use crate::game::{KeyboardState, Round, RoundStatus};
use colored::Colorize;

/// Print the result of checking a guess against a target
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.guess.word().to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", guess_tiles(&result.guess));
    println!("  {}\n", guess_to_emoji(&result.guess));

    for l in result.guess.letters() {
        println!("  {} {}", l.letter.to_ascii_uppercase(), l.status);
    }
}

/// Print the board: every accepted guess, then placeholders
pub fn print_board(round: &Round) {
    println!();
    for row in round.history() {
        println!("  {}", guess_tiles(row));
    }
    for _ in 0..round.attempts_remaining() {
        println!("  {}", empty_row(round.word_length()).bright_black());
    }
    println!();
}

/// Print the keyboard coloured by the best status of each letter
pub fn print_keyboard(keyboard: &KeyboardState) {
    for (indent, row) in keyboard.rows().enumerate() {
        let keys: Vec<String> = row
            .into_iter()
            .map(|(key, status)| match status {
                LetterStatus::Empty => format!(" {} ", key.to_ascii_uppercase()),
                _ => key_tile(key, status).to_string(),
            })
            .collect();
        println!("  {}{}", "  ".repeat(indent), keys.join(""));
    }
    println!();
}

/// Print the end-of-round banner
pub fn print_round_over(round: &Round) {
    match round.status() {
        RoundStatus::Won => {
            println!("{}", "═".repeat(40).bright_cyan());
            println!(
                "{}",
                format!(
                    "🎉 You won in {} {}!",
                    round.attempts(),
                    if round.attempts() == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        RoundStatus::Lost => {
            println!("{}", "═".repeat(40).bright_cyan());
            println!(
                "{} {}",
                "❌ You lost! The word was".red().bold(),
                round.target().to_uppercase().bright_yellow().bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        RoundStatus::Playing => {}
    }

    println!("\n  Guess history:");
    for (i, row) in round.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            row.word().to_uppercase().bright_white().bold(),
            guess_to_emoji(row)
        );
    }
    println!();
}
