//! Property-based tests for mastery toggling
//!
//! Tests invariants:
//! - Marking then unmarking a word restores the prior set
//! - The persisted set always matches the in-memory set

use proptest::prelude::*;

use crate::core::catalog::HskLevel;
use crate::core::progress::ProgressStore;
use crate::tests::common::{catalog_for_levels, session_with_store};

proptest! {
    #[test]
    fn mark_then_unmark_restores_set(
        count in 1usize..10,
        premarked in prop::collection::vec(any::<bool>(), 10),
        target in 0usize..10,
    ) {
        let catalog = catalog_for_levels(&vec![HskLevel::Hsk1; count]);
        let (mut session, store) = session_with_store(catalog);
        for (i, marked) in premarked.iter().take(count).enumerate() {
            if *marked {
                session.toggle_mastery(&format!("w{i}"), true).unwrap();
            }
        }
        let before = session.mastered().clone();
        let id = format!("w{}", target % count);

        if !before.contains(&id) {
            session.toggle_mastery(&id, true).unwrap();
            prop_assert!(session.is_mastered(&id));
        }
        session.toggle_mastery(&id, false).unwrap();
        if before.contains(&id) {
            session.toggle_mastery(&id, true).unwrap();
        }

        prop_assert_eq!(session.mastered(), &before);
        prop_assert_eq!(&store.load(), session.mastered());
    }
}

#[test]
fn marking_first_word_persists_and_advances() {
    let catalog = catalog_for_levels(&[HskLevel::Hsk1, HskLevel::Hsk1, HskLevel::Hsk1]);
    let (mut session, store) = session_with_store(catalog);
    assert_eq!(session.current_word().map(|w| w.id.as_str()), Some("w0"));

    session.toggle_mastery("w0", true).unwrap();
    assert!(session.is_mastered("w0"));
    assert_eq!(store.raw().as_deref(), Some(r#"["w0"]"#));
    assert_eq!(session.current_word().map(|w| w.id.as_str()), Some("w1"));
}
