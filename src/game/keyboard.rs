//! Keyboard letter states
//!
//! Summarizes a round's history into the strongest feedback seen for each
//! letter, for an on-screen keyboard.

use crate::core::{EvaluatedGuess, LetterStatus};
use rustc_hash::FxHashMap;

/// QWERTY layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_history(history: &[EvaluatedGuess]) -> Self {
        let mut state = Self::new();
        for guess in history {
            state.record(guess);
        }
        state
    }

    /// Fold one evaluated guess in, keeping the stronger status per letter
    pub fn record(&mut self, guess: &EvaluatedGuess) {
        for l in guess.letters() {
            let entry = self.letters.entry(l.letter).or_default();
            *entry = (*entry).max(l.status);
        }
    }

    /// Strongest status seen for `letter`, `Empty` if never guessed
    #[must_use]
    pub fn status(&self, letter: char) -> LetterStatus {
        self.letters.get(&letter).copied().unwrap_or_default()
    }

    /// Keyboard rows paired with each key's status
    pub fn rows(&self) -> impl Iterator<Item = Vec<(char, LetterStatus)>> + '_ {
        KEYBOARD_ROWS
            .iter()
            .map(|row| row.chars().map(|key| (key, self.status(key))).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFrequencyMap;

    fn evaluate(target: &str, guesses: &[&str]) -> Vec<EvaluatedGuess> {
        let freq = LetterFrequencyMap::build(target);
        guesses
            .iter()
            .map(|g| EvaluatedGuess::evaluate(g, &freq))
            .collect()
    }

    #[test]
    fn unseen_letters_are_empty() {
        let state = KeyboardState::new();
        assert_eq!(state.status('q'), LetterStatus::Empty);
    }

    #[test]
    fn records_single_guess() {
        let state = KeyboardState::from_history(&evaluate("abbey", &["babes"]));
        assert_eq!(state.status('b'), LetterStatus::InPlace);
        assert_eq!(state.status('a'), LetterStatus::Misplaced);
        assert_eq!(state.status('e'), LetterStatus::InPlace);
        assert_eq!(state.status('s'), LetterStatus::NotInWord);
        assert_eq!(state.status('y'), LetterStatus::Empty);
    }

    #[test]
    fn stronger_status_is_kept() {
        // E is misplaced in the first guess, in place in the second
        let history = evaluate("abbey", &["eerie", "hoped"]);
        assert_eq!(history[0].letters()[0].status, LetterStatus::Misplaced);
        let state = KeyboardState::from_history(&history);
        assert_eq!(state.status('e'), LetterStatus::InPlace);

        // A later weaker result never downgrades
        let history = evaluate("abbey", &["hoped", "eerie"]);
        let state = KeyboardState::from_history(&history);
        assert_eq!(state.status('e'), LetterStatus::InPlace);
    }

    #[test]
    fn rows_follow_layout() {
        let state = KeyboardState::from_history(&evaluate("abbey", &["babes"]));
        let rows: Vec<_> = state.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[2].len(), 7);
        assert!(rows[2].contains(&('b', LetterStatus::InPlace)));
        assert!(rows[0].contains(&('q', LetterStatus::Empty)));
    }
}
