//! Property-based tests for navigation
//!
//! Tests invariants:
//! - After change_level(L) the current word is at L, or absent iff L is empty
//! - n calls to advance on a level of n words visit each word once and
//!   return to the start

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::catalog::HskLevel;
use crate::core::study::StudySession;
use crate::core::progress::MemoryProgressStore;
use crate::tests::common::{catalog_for_levels, layout_strategy, level_strategy};

proptest! {
    #[test]
    fn change_level_keeps_current_word_on_level(
        layout in layout_strategy(),
        moves in prop::collection::vec(level_strategy(), 1..10),
    ) {
        let mut session =
            StudySession::new(catalog_for_levels(&layout), Box::new(MemoryProgressStore::new()));
        for level in moves {
            session.change_level(level);
            prop_assert_eq!(session.level(), level);
            match session.current_word() {
                Some(word) => prop_assert_eq!(word.level, level),
                None => prop_assert!(!layout.contains(&level)),
            }
        }
    }

    #[test]
    fn advance_cycles_through_level(layout in layout_strategy(), level in level_strategy()) {
        let mut session =
            StudySession::new(catalog_for_levels(&layout), Box::new(MemoryProgressStore::new()));
        session.change_level(level);

        let n = layout.iter().filter(|l| **l == level).count();
        let start = session.current_index();
        prop_assert_eq!(start.is_some(), n > 0);

        let mut seen = HashSet::new();
        for _ in 0..n {
            let index = session.current_index().unwrap();
            prop_assert!(seen.insert(index));
            session.advance();
        }
        prop_assert_eq!(seen.len(), n);
        prop_assert_eq!(session.current_index(), start);
    }
}

#[test]
fn advance_on_empty_level_is_noop() {
    let mut session = StudySession::new(
        catalog_for_levels(&[HskLevel::Hsk1]),
        Box::new(MemoryProgressStore::new()),
    );
    session.change_level(HskLevel::Hsk3);
    session.advance();
    assert!(session.current_word().is_none());
}
