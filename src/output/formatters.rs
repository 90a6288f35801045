//! Formatting utilities for terminal output

use crate::core::{EvaluatedGuess, GuessLetter, LetterStatus};
use colored::{ColoredString, Colorize};

/// Format an evaluated guess as an emoji string
#[must_use]
pub fn guess_to_emoji(guess: &EvaluatedGuess) -> String {
    guess.to_emoji()
}

/// Render one letter as a coloured tile like " A "
#[must_use]
pub fn letter_tile(letter: GuessLetter) -> ColoredString {
    let text = format!(" {} ", letter.letter.to_ascii_uppercase());
    match letter.status {
        LetterStatus::InPlace => text.black().on_green().bold(),
        LetterStatus::Misplaced => text.black().on_yellow().bold(),
        LetterStatus::NotInWord => text.white().on_bright_black(),
        LetterStatus::Empty => text.normal(),
    }
}

/// Render an evaluated guess as a row of coloured tiles
#[must_use]
pub fn guess_tiles(guess: &EvaluatedGuess) -> String {
    guess
        .letters()
        .iter()
        .map(|&l| letter_tile(l).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one keyboard key
#[must_use]
pub fn key_tile(key: char, status: LetterStatus) -> ColoredString {
    letter_tile(GuessLetter::new(key, status))
}

/// Placeholder row shown for an unused attempt
#[must_use]
pub fn empty_row(len: usize) -> String {
    vec!["[ ]"; len].join(" ")
}
