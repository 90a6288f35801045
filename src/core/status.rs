//! Per-letter feedback status

use std::fmt;

/// Feedback for a single letter slot
///
/// Variants are declared in precedence order: a later variant is stronger
/// knowledge about a letter than an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LetterStatus {
    /// Slot not yet submitted
    #[default]
    Empty,
    /// Letter absent from the target, or all its occurrences already claimed
    NotInWord,
    /// Letter occurs in the target at a different position
    Misplaced,
    /// Letter occurs in the target at this position
    InPlace,
}

impl LetterStatus {
    /// Every variant, for renderers that need to enumerate them
    pub const ALL: [Self; 4] = [Self::Empty, Self::NotInWord, Self::Misplaced, Self::InPlace];

    /// Emoji tile for shareable results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::InPlace => '🟩',
            Self::Misplaced => '🟨',
            Self::NotInWord => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// ASCII symbol: `G`, `Y`, `-`, or `.` for an empty slot
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::InPlace => 'G',
            Self::Misplaced => 'Y',
            Self::NotInWord => '-',
            Self::Empty => '.',
        }
    }

    /// Check if this slot carries feedback from an accepted guess
    #[inline]
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InPlace => "IN_PLACE",
            Self::Misplaced => "MISPLACED",
            Self::NotInWord => "NOT_IN_WORD",
            Self::Empty => "EMPTY",
        };
        f.write_str(name)
    }
}

/// A letter together with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessLetter {
    pub letter: char,
    pub status: LetterStatus,
}

impl GuessLetter {
    #[inline]
    #[must_use]
    pub const fn new(letter: char, status: LetterStatus) -> Self {
        Self { letter, status }
    }
}
