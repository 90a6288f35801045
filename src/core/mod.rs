//! Core domain types for Wordle
//!
//! The letter frequency model of a target word and the guess evaluator built
//! on it. Everything here is pure: no I/O, no shared mutable state.

mod feedback;
mod letters;
mod status;

pub use feedback::EvaluatedGuess;
pub use letters::{LetterFrequencyMap, LetterStats};
pub use status::{GuessLetter, LetterStatus};

/// Length of a target word
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;
