//! Letter frequency model of a target word
//!
//! For every distinct letter of the target, records how many times it occurs
//! and at which positions. Built once per round and shared read-only by every
//! evaluation of that round.

use rustc_hash::FxHashMap;

/// Occurrence record for one letter of the target word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterStats {
    /// Occurrences of the letter (equal to `positions.len()` once built)
    pub count: usize,
    /// Zero-based positions of the letter, ascending
    pub positions: Vec<usize>,
}

impl LetterStats {
    /// Check whether the letter occurs at `position` in the target
    #[inline]
    #[must_use]
    pub fn occurs_at(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }
}

/// Letter → occurrence record for a target word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterFrequencyMap {
    letters: FxHashMap<char, LetterStats>,
}

impl LetterFrequencyMap {
    /// Build the frequency map of `word`
    ///
    /// Positions are character indices, not byte offsets.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::LetterFrequencyMap;
    ///
    /// let freq = LetterFrequencyMap::build("abbey");
    /// let b = freq.get('b').unwrap();
    /// assert_eq!(b.count, 2);
    /// assert_eq!(b.positions, vec![1, 2]);
    /// assert!(freq.get('z').is_none());
    /// ```
    #[must_use]
    pub fn build(word: &str) -> Self {
        let mut letters: FxHashMap<char, LetterStats> = FxHashMap::default();
        for (i, letter) in word.chars().enumerate() {
            let stats = letters.entry(letter).or_default();
            stats.count += 1;
            stats.positions.push(i);
        }
        Self { letters }
    }

    /// Occurrence record for `letter`, if it appears in the word
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<&LetterStats> {
        self.letters.get(&letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains_key(&letter)
    }

    /// Number of distinct letters
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

    /// Sum of all counts (the word length)
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.letters.values().map(|stats| stats.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &LetterStats)> {
        self.letters.iter().map(|(&letter, stats)| (letter, stats))
    }

    /// Fresh count table for one evaluation
    ///
    /// The evaluator decrements these; the map itself stays untouched.
    pub(crate) fn remaining_counts(&self) -> FxHashMap<char, usize> {
        self.letters
            .iter()
            .map(|(&letter, stats)| (letter, stats.count))
            .collect()
    }
}
