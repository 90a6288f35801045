//! Guess evaluation
//!
//! Produces per-letter feedback for a guess against a target's
//! [`LetterFrequencyMap`]. Repeated letters are credited with multiset
//! semantics: a letter is never reported present (in place or misplaced)
//! more times than it occurs in the target.

use super::{GuessLetter, LetterFrequencyMap, LetterStatus};
use std::fmt;

/// Feedback for one submitted guess, one slot per guess letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluatedGuess {
    letters: Vec<GuessLetter>,
}

impl EvaluatedGuess {
    /// Evaluate `guess` against the target described by `freq`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches in place and remove them
    ///    from a private copy of the letter counts
    /// 2. Second pass, left to right: each remaining slot is misplaced while
    ///    its letter still has unclaimed occurrences, otherwise not in word
    ///
    /// `freq` is never mutated, so one map serves every guess of a round.
    /// The result has one slot per character of `guess`; callers check the
    /// length beforehand.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{EvaluatedGuess, LetterFrequencyMap, LetterStatus::*};
    ///
    /// let freq = LetterFrequencyMap::build("abbey");
    /// let evaluated = EvaluatedGuess::evaluate("babes", &freq);
    ///
    /// assert_eq!(
    ///     evaluated.statuses().collect::<Vec<_>>(),
    ///     [Misplaced, Misplaced, InPlace, InPlace, NotInWord]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &str, freq: &LetterFrequencyMap) -> Self {
        let chars: Vec<char> = guess.chars().collect();
        let mut result: Vec<Option<LetterStatus>> = vec![None; chars.len()];
        let mut remaining = freq.remaining_counts();

        // First pass: exact matches
        for (i, &letter) in chars.iter().enumerate() {
            if freq.get(letter).is_some_and(|stats| stats.occurs_at(i)) {
                result[i] = Some(LetterStatus::InPlace);
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced or absent, greedy from the left
        for (i, &letter) in chars.iter().enumerate() {
            if result[i].is_some() {
                continue;
            }
            let status = match remaining.get_mut(&letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterStatus::Misplaced
                }
                _ => LetterStatus::NotInWord,
            };
            result[i] = Some(status);
        }

        let letters = chars
            .into_iter()
            .zip(result)
            .map(|(letter, status)| GuessLetter::new(letter, status.unwrap_or_default()))
            .collect();

        Self { letters }
    }

    /// Placeholder row of `len` empty slots for a board
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            letters: vec![GuessLetter::new(' ', LetterStatus::Empty); len],
        }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[GuessLetter] {
        &self.letters
    }

    pub fn statuses(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.letters.iter().map(|l| l.status)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.letter).collect()
    }

    /// Check if every slot is in place (the guess equals the target)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.letters.is_empty() && self.statuses().all(|s| s == LetterStatus::InPlace)
    }

    /// Number of slots with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.statuses().filter(|&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟨🟨🟩🟩⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses().map(LetterStatus::emoji).collect()
    }

    /// Convert feedback to an ASCII string like "YYGG-"
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.statuses().map(LetterStatus::symbol).collect()
    }
}

impl fmt::Display for EvaluatedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.to_symbols())
    }
}
