//! Check command
//!
//! Evaluates a single guess against a given target, without a word list.

use crate::core::{EvaluatedGuess, LetterFrequencyMap};
use crate::game::RoundError;
use crate::wordlists::loader::normalize_word;

/// Result of checking a guess
pub struct CheckResult {
    pub target: String,
    pub guess: EvaluatedGuess,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word, or if
/// their lengths differ.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, String> {
    let target = normalize_word(target).ok_or_else(|| format!("Invalid target word: {target}"))?;
    let guess_word = normalize_word(guess).ok_or_else(|| {
        let actual = guess.trim().chars().count();
        if actual == target.len() {
            format!("Invalid guess word: {guess}")
        } else {
            RoundError::InvalidLength {
                expected: target.len(),
                actual,
            }
            .to_string()
        }
    })?;

    let freq = LetterFrequencyMap::build(&target);
    let guess = EvaluatedGuess::evaluate(&guess_word, &freq);

    Ok(CheckResult { target, guess })
}
