//! Known-word predicate consumed by a round

/// Decides whether a guess is an acceptable word
///
/// Implemented by [`crate::wordlists::WordList`] and by any
/// `Fn(&str) -> bool` closure.
pub trait WordValidator {
    /// Check if `word` is a known word. `word` is already lowercased.
    fn is_known_word(&self, word: &str) -> bool;
}

impl<F> WordValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_known_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Accepts every guess of the right length
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyWord;

impl WordValidator for AnyWord {
    fn is_known_word(&self, _word: &str) -> bool {
        true
    }
}
