//! Property-based tests for progress persistence
//!
//! Tests invariants:
//! - load(save(S)) == S for the file store
//! - load(save(S)) == S for the memory store

use proptest::prelude::*;

use crate::core::progress::{FileProgressStore, MasteredSet, MemoryProgressStore, ProgressStore};
use crate::tests::common::id_strategy;

fn set_strategy() -> impl Strategy<Value = MasteredSet> {
    prop::collection::btree_set(id_strategy(), 0..20).prop_map(|ids| ids.into_iter().collect())
}

proptest! {
    #[test]
    fn file_store_round_trip(set in set_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileProgressStore::new(dir.path());
        store.save(&set).unwrap();
        prop_assert_eq!(store.load(), set);
    }

    #[test]
    fn memory_store_round_trip(set in set_strategy()) {
        let store = MemoryProgressStore::new();
        store.save(&set).unwrap();
        prop_assert_eq!(store.load(), set);
    }
}
