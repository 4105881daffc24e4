//! Deterministic difficulty tiers.
//!
//! A word's tier is derived from the Unicode code point of its first display
//! character, reduced modulo 3. The tier is computed once when the catalog is
//! built and is never persisted or edited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::catalog::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Tier for a display string. Empty strings fall back to `Easy`.
    pub fn for_text(text: &str) -> Self {
        match text.chars().next().map(|c| u32::from(c) % 3) {
            Some(1) => Difficulty::Medium,
            Some(2) => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Return the word with its difficulty tier filled in.
pub fn assign_difficulty(word: Word) -> Word {
    let difficulty = Difficulty::for_text(&word.hanzi);
    Word {
        difficulty: Some(difficulty),
        ..word
    }
}

// ============================================================================
// Word list filter
// ============================================================================

/// Difficulty filter used by the word list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// All → Easy → Medium → Hard → All.
    pub fn cycle(self) -> Self {
        match self {
            DifficultyFilter::All => DifficultyFilter::Only(Difficulty::Easy),
            DifficultyFilter::Only(Difficulty::Easy) => DifficultyFilter::Only(Difficulty::Medium),
            DifficultyFilter::Only(Difficulty::Medium) => DifficultyFilter::Only(Difficulty::Hard),
            DifficultyFilter::Only(Difficulty::Hard) => DifficultyFilter::All,
        }
    }

    pub fn matches(self, word: &Word) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(d) => word.difficulty == Some(d),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyFilter::All => "All Difficulties",
            DifficultyFilter::Only(d) => d.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::HskLevel;
    use rstest::rstest;

    fn word(hanzi: &str) -> Word {
        Word::new("w", hanzi, "", "", HskLevel::Hsk1)
    }

    #[rstest]
    // 一 = U+4E00 = 19968, 19968 % 3 == 0
    #[case("一", Difficulty::Easy)]
    // 丁 = U+4E01 = 19969, 19969 % 3 == 1
    #[case("丁", Difficulty::Medium)]
    // 丂 = U+4E02 = 19970, 19970 % 3 == 2
    #[case("丂", Difficulty::Hard)]
    // only the first character counts
    #[case("一丁丂", Difficulty::Easy)]
    #[case("", Difficulty::Easy)]
    fn test_difficulty_for_text(#[case] text: &str, #[case] expected: Difficulty) {
        assert_eq!(Difficulty::for_text(text), expected);
    }

    #[test]
    fn test_assign_difficulty_is_idempotent() {
        let once = assign_difficulty(word("好"));
        let twice = assign_difficulty(once.clone());
        assert_eq!(once, twice);
        assert!(once.difficulty.is_some());
    }

    #[test]
    fn test_assign_difficulty_keeps_other_fields() {
        let w = Word::new("h1-9", "我", "wǒ", "I; me", HskLevel::Hsk1);
        let enriched = assign_difficulty(w.clone());
        assert_eq!(enriched.id, w.id);
        assert_eq!(enriched.pinyin, w.pinyin);
        assert_eq!(enriched.level, w.level);
    }

    #[test]
    fn test_filter_cycle_returns_to_all() {
        let mut filter = DifficultyFilter::All;
        for _ in 0..4 {
            filter = filter.cycle();
        }
        assert_eq!(filter, DifficultyFilter::All);
    }

    #[test]
    fn test_filter_matches() {
        let hard = assign_difficulty(word("丂"));
        assert!(DifficultyFilter::All.matches(&hard));
        assert!(DifficultyFilter::Only(Difficulty::Hard).matches(&hard));
        assert!(!DifficultyFilter::Only(Difficulty::Easy).matches(&hard));
    }
}
