//! Test Fixtures
//!
//! Catalog builders, a store whose saved value the test can read back, and
//! proptest strategies for words and levels.

use std::sync::Arc;

use proptest::prelude::*;

use crate::core::catalog::{Catalog, HskLevel, Word};
use crate::core::progress::{MasteredSet, MemoryProgressStore, ProgressError, ProgressStore};
use crate::core::study::StudySession;

// =============================================================================
// Stores
// =============================================================================

/// Forwards to a shared memory store so tests can inspect what was saved.
pub struct SharedStore(pub Arc<MemoryProgressStore>);

impl ProgressStore for SharedStore {
    fn load(&self) -> MasteredSet {
        self.0.load()
    }

    fn save(&self, set: &MasteredSet) -> Result<(), ProgressError> {
        self.0.save(set)
    }
}

/// A session over `catalog` plus a handle on its backing store.
pub fn session_with_store(catalog: Catalog) -> (StudySession, Arc<MemoryProgressStore>) {
    let store = Arc::new(MemoryProgressStore::new());
    let session = StudySession::new(catalog, Box::new(SharedStore(Arc::clone(&store))));
    (session, store)
}

// =============================================================================
// Catalogs
// =============================================================================

/// One word per entry in `levels`, ids `w0`, `w1`, ... in catalog order.
pub fn catalog_for_levels(levels: &[HskLevel]) -> Catalog {
    let words = levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let hanzi = char::from_u32(0x4E00 + i as u32).map(String::from).unwrap_or_default();
            Word::new(format!("w{i}"), hanzi, "pīn", "gloss", *level)
        })
        .collect();
    Catalog::new(words, Vec::new()).expect("generated catalog is valid")
}

// =============================================================================
// Strategies
// =============================================================================

pub fn level_strategy() -> impl Strategy<Value = HskLevel> {
    prop_oneof![
        Just(HskLevel::Hsk1),
        Just(HskLevel::Hsk2),
        Just(HskLevel::Hsk3),
    ]
}

/// Catalog layouts: each word's level, in catalog order.
pub fn layout_strategy() -> impl Strategy<Value = Vec<HskLevel>> {
    prop::collection::vec(level_strategy(), 0..24)
}

/// Identifiers as a real catalog would use them.
pub fn id_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}
