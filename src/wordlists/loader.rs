//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::WORD_LENGTH;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize a candidate word, rejecting anything that is not exactly
/// `WORD_LENGTH` ASCII letters
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::normalize_word;
///
/// assert_eq!(normalize_word(" Crane "), Some("crane".to_string()));
/// assert_eq!(normalize_word("cran3"), None);
/// assert_eq!(normalize_word("cranes"), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_lowercase();
    let valid = word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase());
    valid.then_some(word)
}

/// Load words from a file
///
/// Returns the valid words, one per line, skipping blank and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated words, skipping blank and invalid lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize_word).collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_word(s)).collect()
}
