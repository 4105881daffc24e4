//! Property-based tests for difficulty tiers
//!
//! Tests invariants:
//! - The tier depends only on the first character
//! - Repeated assignment yields the same tier
//! - Catalog construction assigns every word a tier

use proptest::prelude::*;

use crate::core::catalog::{Catalog, HskLevel, Word};
use crate::core::difficulty::{assign_difficulty, Difficulty};

proptest! {
    #[test]
    fn tier_depends_only_on_first_char(first in any::<char>(), a in ".{0,6}", b in ".{0,6}") {
        let left = format!("{first}{a}");
        let right = format!("{first}{b}");
        prop_assert_eq!(Difficulty::for_text(&left), Difficulty::for_text(&right));
    }

    #[test]
    fn tier_is_stable_across_calls(hanzi in "\\PC{1,4}") {
        let word = Word::new("w", hanzi, "p", "e", HskLevel::Hsk1);
        let once = assign_difficulty(word.clone());
        let twice = assign_difficulty(once.clone());
        prop_assert_eq!(once.difficulty, twice.difficulty);
        prop_assert_eq!(once.difficulty, Some(Difficulty::for_text(&word.hanzi)));
    }

    #[test]
    fn catalog_assigns_every_word(chars in prop::collection::vec(any::<char>(), 1..16)) {
        let words = chars
            .iter()
            .enumerate()
            .map(|(i, c)| Word::new(format!("w{i}"), c.to_string(), "p", "e", HskLevel::Hsk2))
            .collect();
        let catalog = Catalog::new(words, Vec::new()).unwrap();
        for (word, c) in catalog.words().iter().zip(&chars) {
            prop_assert_eq!(word.difficulty, Some(Difficulty::for_text(&c.to_string())));
        }
    }
}
