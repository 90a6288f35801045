//! Word lists for Wordle
//!
//! Provides the embedded word list compiled into the binary, random target
//! selection, and the known-word predicate consumed by a round.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::game::WordValidator;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// A list of valid five-letter words
///
/// Serves both as the source of target words and as the dictionary guesses
/// are checked against.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    known: FxHashSet<String>,
}

impl WordList {
    /// Build a word list, dropping duplicates while keeping first-seen order
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let mut known = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| known.insert(word.clone()))
            .collect();
        Self { words, known }
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(loader::words_from_slice(slice))
    }

    /// Load a word list from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        loader::load_from_file(path).map(Self::new)
    }

    /// Pick a target word uniformly at random
    ///
    /// Returns `None` if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_slice(&["crane", "slate"]);
    /// let word = list.pick_word(&mut rand::rng()).unwrap();
    /// assert!(list.contains(word));
    /// ```
    pub fn pick_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.known.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl WordValidator for WordList {
    fn is_known_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // All words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_is_not_empty() {
        let list = WordList::embedded();
        assert!(!list.is_empty());
        assert_eq!(list.len(), WORDS_COUNT);
        assert!(list.contains("abbey"));
    }

    #[test]
    fn new_drops_duplicates() {
        let list = WordList::from_slice(&["crane", "slate", "crane"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().collect::<Vec<_>>(), ["crane", "slate"]);
    }

    #[test]
    fn pick_word_from_empty_list() {
        let list = WordList::new(Vec::new());
        assert!(list.pick_word(&mut rand::rng()).is_none());
    }

    #[test]
    fn pick_word_is_member() {
        let list = WordList::from_slice(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = list.pick_word(&mut rng).unwrap();
            assert!(list.contains(word));
        }
    }

    #[test]
    fn pick_word_is_reproducible_with_seed() {
        let list = WordList::embedded();
        let first = list.pick_word(&mut StdRng::seed_from_u64(42)).map(str::to_owned);
        let second = list.pick_word(&mut StdRng::seed_from_u64(42)).map(str::to_owned);
        assert_eq!(first, second);
    }

    #[test]
    fn word_list_validates_guesses() {
        let list = WordList::from_slice(&["crane"]);
        assert!(list.is_known_word("crane"));
        assert!(!list.is_known_word("slate"));
    }
}
