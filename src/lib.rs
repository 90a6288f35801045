//! Wordle
//!
//! A word-guessing game with multiset-correct letter feedback: a letter is
//! never reported present more times than it occurs in the target word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::LetterStatus;
//! use wordle_game::game::{Round, RoundStatus};
//! use wordle_game::wordlists::WordList;
//!
//! let words = WordList::from_slice(&["abbey", "babes"]);
//! let mut round = Round::start("abbey");
//!
//! let feedback = round.submit("babes", &words).unwrap();
//! assert_eq!(feedback.letters()[2].status, LetterStatus::InPlace);
//! println!("{}", feedback.to_emoji());
//!
//! round.submit("abbey", &words).unwrap();
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round lifecycle
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
