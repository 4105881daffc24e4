//! Study session: the single owner of catalog, navigation and mastery state.
//!
//! Presentation code reads from a `StudySession` and sends intents back
//! through its named transitions; nothing else mutates this state.

use crate::core::catalog::{Catalog, GrammarTopic, HskLevel, Word, WordIndex};
use crate::core::difficulty::DifficultyFilter;
use crate::core::navigation::{DisplayMode, NavigationState};
use crate::core::progress::{MasteredSet, ProgressError, ProgressStore};

/// Mastered / total words at a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub mastered: usize,
    pub total: usize,
}

impl LevelProgress {
    /// Rounded percentage, 0 for an empty level.
    pub fn percentage(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        ((self.mastered as f64 / self.total as f64) * 100.0).round() as u16
    }
}

/// Counts shown above the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStats {
    pub mastered: usize,
    pub learning: usize,
}

pub struct StudySession {
    catalog: Catalog,
    nav: NavigationState,
    mastered: MasteredSet,
    store: Box<dyn ProgressStore>,
}

impl StudySession {
    /// Build the initial state and restore saved progress.
    pub fn new(catalog: Catalog, store: Box<dyn ProgressStore>) -> Self {
        let mastered = store.load();
        let nav = NavigationState::initial(&catalog);
        tracing::info!(
            words = catalog.words().len(),
            topics = catalog.topics().len(),
            mastered = mastered.len(),
            "Study session started"
        );
        Self {
            catalog,
            nav,
            mastered,
            store,
        }
    }

    // ── Read models ─────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn level(&self) -> HskLevel {
        self.nav.level()
    }

    pub fn mode(&self) -> DisplayMode {
        self.nav.mode()
    }

    pub fn mastered(&self) -> &MasteredSet {
        &self.mastered
    }

    pub fn current_index(&self) -> Option<WordIndex> {
        self.nav.current_word()
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.nav.current_word().and_then(|i| self.catalog.word(i))
    }

    pub fn is_mastered(&self, id: &str) -> bool {
        self.mastered.contains(id)
    }

    /// Words at the current level, in catalog order.
    pub fn level_words(&self) -> Vec<(WordIndex, &Word)> {
        self.catalog
            .words_at(self.nav.level())
            .into_iter()
            .filter_map(|i| self.catalog.word(i).map(|w| (i, w)))
            .collect()
    }

    pub fn level_topics(&self) -> Vec<&GrammarTopic> {
        self.catalog.topics_at(self.nav.level())
    }

    pub fn level_progress(&self) -> LevelProgress {
        let words = self.level_words();
        LevelProgress {
            mastered: words
                .iter()
                .filter(|(_, w)| self.mastered.contains(&w.id))
                .count(),
            total: words.len(),
        }
    }

    /// Current-level words passing the difficulty filter.
    pub fn filtered_words(&self, filter: DifficultyFilter) -> Vec<(WordIndex, &Word)> {
        self.level_words()
            .into_iter()
            .filter(|(_, w)| filter.matches(w))
            .collect()
    }

    pub fn list_stats(&self, filter: DifficultyFilter) -> ListStats {
        let words = self.filtered_words(filter);
        let mastered = words
            .iter()
            .filter(|(_, w)| self.mastered.contains(&w.id))
            .count();
        ListStats {
            mastered,
            learning: words.len() - mastered,
        }
    }

    // ── Transitions ─────────────────────────────────────────────────────

    pub fn change_level(&mut self, level: HskLevel) {
        self.nav.change_level(&self.catalog, level);
        tracing::debug!(%level, word = ?self.nav.current_word(), "Level changed");
    }

    pub fn change_mode(&mut self, mode: DisplayMode) {
        self.nav.change_mode(mode);
    }

    /// Select a word of the current level; other levels are ignored.
    pub fn select_word(&mut self, index: WordIndex) -> bool {
        self.nav.select_word(&self.catalog, index)
    }

    /// Select from the word list: selects the word and opens its flashcard.
    pub fn select_from_list(&mut self, index: WordIndex) -> bool {
        if !self.select_word(index) {
            return false;
        }
        self.nav.change_mode(DisplayMode::Flashcards);
        true
    }

    pub fn advance(&mut self) {
        self.nav.advance(&self.catalog);
    }

    /// Record the user's mastery verdict, persist it, then advance.
    ///
    /// The in-memory set and the advance are applied even if saving fails;
    /// the save error is returned for the caller to report.
    pub fn toggle_mastery(&mut self, id: &str, mastered: bool) -> Result<(), ProgressError> {
        self.mastered.set(id, mastered);
        tracing::info!(word = id, mastered, "Mastery updated");

        let saved = self.store.save(&self.mastered);
        if let Err(ref e) = saved {
            tracing::error!(error = %e, "Failed to save progress");
        }

        self.advance();
        saved
    }

    pub fn toggle_sidebar(&mut self) {
        self.nav.toggle_sidebar();
    }
}
