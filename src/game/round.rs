//! Round controller
//!
//! A round starts `Playing` and accepts one evaluated guess per valid
//! submission until it is `Won` or `Lost`. Rejected submissions leave the
//! round untouched.

use super::{KeyboardState, WordValidator};
use crate::core::{EvaluatedGuess, LetterFrequencyMap, MAX_ATTEMPTS};
use std::fmt;

/// Configuration for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub max_attempts: usize,
}

impl RoundConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }

    #[must_use]
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    /// Check if the round accepts no further submissions
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Reasons a submission is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    InvalidLength { expected: usize, actual: usize },
    UnknownWord(String),
    RoundAlreadyOver(RoundStatus),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Guess must be {expected} letters long, got {actual}")
            }
            Self::UnknownWord(word) => write!(f, "'{word}' is not a known word"),
            Self::RoundAlreadyOver(status) => write!(f, "Round is over ({status})"),
        }
    }
}

impl std::error::Error for RoundError {}

/// Snapshot of a round for a rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState<'a> {
    pub status: RoundStatus,
    pub history: &'a [EvaluatedGuess],
    pub attempts_remaining: usize,
}

/// A single game against one target word
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    target: String,
    freq: LetterFrequencyMap,
    history: Vec<EvaluatedGuess>,
    status: RoundStatus,
}

impl Round {
    /// Start a round with the default configuration
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{AnyWord, Round, RoundStatus};
    ///
    /// let mut round = Round::start("abbey");
    /// let evaluated = round.submit("babes", &AnyWord).unwrap();
    /// assert_eq!(evaluated.to_symbols(), "YYGG-");
    /// assert_eq!(round.status(), RoundStatus::Playing);
    ///
    /// round.submit("abbey", &AnyWord).unwrap();
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// ```
    #[must_use]
    pub fn start(target: &str) -> Self {
        Self::with_config(target, RoundConfig::default())
    }

    #[must_use]
    pub fn with_config(target: &str, config: RoundConfig) -> Self {
        let target = target.to_ascii_lowercase();
        let freq = LetterFrequencyMap::build(&target);
        let mut round = Self {
            config,
            target,
            freq,
            history: Vec::with_capacity(config.max_attempts),
            status: RoundStatus::Playing,
        };
        round.status = round.derive_status();
        round
    }

    /// Replace this round with a fresh one against `target`
    pub fn reset(&mut self, target: &str) {
        *self = Self::with_config(target, self.config);
    }

    /// Submit a guess
    ///
    /// The guess is lowercased, then checked in order: the round must still
    /// be playing, the length must match the target, and `validator` must
    /// know the word. On success the evaluated guess is appended to the
    /// history and the status is re-derived.
    ///
    /// # Errors
    ///
    /// Returns `RoundError` without touching the round if any check fails.
    pub fn submit<V: WordValidator + ?Sized>(
        &mut self,
        guess: &str,
        validator: &V,
    ) -> Result<EvaluatedGuess, RoundError> {
        if self.status.is_over() {
            return Err(RoundError::RoundAlreadyOver(self.status));
        }

        let guess = guess.to_ascii_lowercase();

        let expected = self.word_length();
        let actual = guess.chars().count();
        if actual != expected {
            return Err(RoundError::InvalidLength { expected, actual });
        }

        if !validator.is_known_word(&guess) {
            return Err(RoundError::UnknownWord(guess));
        }

        let evaluated = EvaluatedGuess::evaluate(&guess, &self.freq);
        self.history.push(evaluated.clone());
        self.status = self.derive_status();

        Ok(evaluated)
    }

    /// Won on an all-in-place latest guess, lost once attempts run out
    fn derive_status(&self) -> RoundStatus {
        if self.history.last().is_some_and(EvaluatedGuess::is_solved) {
            RoundStatus::Won
        } else if self.history.len() >= self.config.max_attempts {
            RoundStatus::Lost
        } else {
            RoundStatus::Playing
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Length of the target in characters
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.freq.total_count()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> RoundConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn frequency_map(&self) -> &LetterFrequencyMap {
        &self.freq
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[EvaluatedGuess] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn state(&self) -> RoundState<'_> {
        RoundState {
            status: self.status,
            history: &self.history,
            attempts_remaining: self.attempts_remaining(),
        }
    }

    /// History padded with empty rows up to `max_attempts`
    #[must_use]
    pub fn board(&self) -> Vec<EvaluatedGuess> {
        let mut rows = self.history.clone();
        let blank = EvaluatedGuess::empty(self.word_length());
        rows.resize(self.config.max_attempts.max(rows.len()), blank);
        rows
    }

    /// Best known status of every letter guessed so far
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState::from_history(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::game::AnyWord;
    use crate::wordlists::WordList;

    fn words() -> WordList {
        WordList::from_slice(&[
            "abbey", "babes", "crane", "slate", "irate", "crate", "grate", "speed",
        ])
    }

    #[test]
    fn start_is_playing_and_empty() {
        let round = Round::start("abbey");
        assert_eq!(round.status(), RoundStatus::Playing);
        assert!(round.history().is_empty());
        assert_eq!(round.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(round.word_length(), 5);
        assert_eq!(round.frequency_map().get('b').unwrap().count, 2);
    }

    #[test]
    fn submit_appends_evaluated_guess() {
        let mut round = Round::start("abbey");
        let evaluated = round.submit("babes", &words()).unwrap();

        assert_eq!(round.attempts(), 1);
        assert_eq!(round.history(), &[evaluated.clone()]);
        assert_eq!(evaluated.word(), "babes");
        assert_eq!(round.status(), RoundStatus::Playing);
        assert_eq!(round.attempts_remaining(), MAX_ATTEMPTS - 1);
    }

    #[test]
    fn submit_target_wins() {
        let mut round = Round::start("abbey");
        let evaluated = round.submit("abbey", &words()).unwrap();

        assert!(evaluated.statuses().all(|s| s == LetterStatus::InPlace));
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn submit_wrong_length_rejected() {
        let mut round = Round::start("abbey");
        round.submit("crane", &words()).unwrap();

        assert_eq!(
            round.submit("abbe", &AnyWord),
            Err(RoundError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            round.submit("abbeys", &AnyWord),
            Err(RoundError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(round.attempts(), 1);
        assert_eq!(round.status(), RoundStatus::Playing);
    }

    #[test]
    fn submit_unknown_word_rejected() {
        let mut round = Round::start("abbey");
        assert_eq!(
            round.submit("zzzzz", &words()),
            Err(RoundError::UnknownWord("zzzzz".to_string()))
        );
        assert!(round.history().is_empty());
    }

    #[test]
    fn length_checked_before_dictionary() {
        let mut round = Round::start("abbey");
        let never = |_: &str| false;
        assert!(matches!(
            round.submit("toolong", &never),
            Err(RoundError::InvalidLength { .. })
        ));
    }

    #[test]
    fn six_misses_lose() {
        let mut round = Round::start("abbey");
        let misses = ["crane", "slate", "irate", "crate", "grate", "speed"];

        for (i, guess) in misses.iter().enumerate() {
            assert_eq!(round.status(), RoundStatus::Playing, "before guess {i}");
            round.submit(guess, &words()).unwrap();
        }

        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.attempts(), 6);
        assert_eq!(round.attempts_remaining(), 0);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut round = Round::start("abbey");
        for guess in ["crane", "slate", "irate", "crate", "grate"] {
            round.submit(guess, &words()).unwrap();
        }
        round.submit("abbey", &words()).unwrap();
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn finished_round_rejects_submissions() {
        let mut round = Round::start("abbey");
        round.submit("abbey", &words()).unwrap();

        assert_eq!(
            round.submit("crane", &words()),
            Err(RoundError::RoundAlreadyOver(RoundStatus::Won))
        );
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn lost_round_rejects_even_invalid_guesses() {
        let mut round = Round::with_config("abbey", RoundConfig::with_max_attempts(1));
        round.submit("crane", &AnyWord).unwrap();
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(
            round.submit("x", &AnyWord),
            Err(RoundError::RoundAlreadyOver(RoundStatus::Lost))
        );
    }

    #[test]
    fn guesses_are_lowercased() {
        let mut round = Round::start("ABBEY");
        assert_eq!(round.target(), "abbey");
        round.submit("AbBeY", &words()).unwrap();
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn reset_starts_over() {
        let mut round = Round::with_config("abbey", RoundConfig::with_max_attempts(3));
        round.submit("abbey", &AnyWord).unwrap();

        round.reset("crane");
        assert_eq!(round.status(), RoundStatus::Playing);
        assert_eq!(round.target(), "crane");
        assert!(round.history().is_empty());
        assert_eq!(round.config().max_attempts, 3);
        assert!(round.frequency_map().contains('c'));
        assert!(!round.frequency_map().contains('b'));
    }

    #[test]
    fn state_snapshot() {
        let mut round = Round::start("abbey");
        round.submit("babes", &AnyWord).unwrap();

        let state = round.state();
        assert_eq!(state.status, RoundStatus::Playing);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.attempts_remaining, 5);
    }

    #[test]
    fn board_is_padded_with_empty_rows() {
        let mut round = Round::start("abbey");
        assert_eq!(round.board().len(), MAX_ATTEMPTS);
        assert!(
            round
                .board()
                .iter()
                .all(|row| row.count(LetterStatus::Empty) == 5)
        );

        round.submit("babes", &AnyWord).unwrap();
        let board = round.board();
        assert_eq!(board.len(), MAX_ATTEMPTS);
        assert_eq!(board[0].word(), "babes");
        assert_eq!(board[1].count(LetterStatus::Empty), 5);
    }

    #[test]
    fn zero_attempts_is_lost_immediately() {
        let round = Round::with_config("abbey", RoundConfig::with_max_attempts(0));
        assert_eq!(round.status(), RoundStatus::Lost);
    }

    #[test]
    fn error_messages() {
        let err = RoundError::InvalidLength {
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Guess must be 5 letters long, got 3");
        assert_eq!(
            RoundError::UnknownWord("zzzzz".into()).to_string(),
            "'zzzzz' is not a known word"
        );
        assert_eq!(
            RoundError::RoundAlreadyOver(RoundStatus::Won).to_string(),
            "Round is over (won)"
        );
    }
}
