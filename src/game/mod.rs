//! Round lifecycle
//!
//! Owns the mutable state of a game: the target word, the evaluated guesses,
//! and the derived playing / won / lost status.

pub mod keyboard;
mod round;
mod validator;

pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use round::{Round, RoundConfig, RoundError, RoundState, RoundStatus};
pub use validator::{AnyWord, WordValidator};
