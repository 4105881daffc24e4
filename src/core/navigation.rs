//! Level / mode / current-word navigation.
//!
//! Invariant: whenever `current_word` is set, that word's level equals
//! `level`. It is `None` only when the catalog has no word at `level`.

use crate::core::catalog::{Catalog, HskLevel, WordIndex};

/// Top-level display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    Flashcards,
    WordList,
    Grammar,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [
        DisplayMode::Flashcards,
        DisplayMode::WordList,
        DisplayMode::Grammar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Flashcards => "Flashcards",
            DisplayMode::WordList => "Word List",
            DisplayMode::Grammar => "Grammar",
        }
    }

    pub fn next(self) -> DisplayMode {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> DisplayMode {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    level: HskLevel,
    mode: DisplayMode,
    current_word: Option<WordIndex>,
    /// Presentation only.
    pub sidebar_visible: bool,
}

impl NavigationState {
    /// Lowest level, flashcards, first word of that level.
    pub fn initial(catalog: &Catalog) -> Self {
        let level = HskLevel::lowest();
        Self {
            level,
            mode: DisplayMode::Flashcards,
            current_word: catalog.first_word_at(level),
            sidebar_visible: true,
        }
    }

    pub fn level(&self) -> HskLevel {
        self.level
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn current_word(&self) -> Option<WordIndex> {
        self.current_word
    }

    // ── Transitions ─────────────────────────────────────────────────────

    /// Switch level and jump to its first word. Mode is unchanged.
    pub fn change_level(&mut self, catalog: &Catalog, level: HskLevel) {
        self.level = level;
        self.current_word = catalog.first_word_at(level);
    }

    pub fn change_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Select a word of the current level. Words from other levels are ignored.
    pub fn select_word(&mut self, catalog: &Catalog, index: WordIndex) -> bool {
        match catalog.word(index) {
            Some(word) if word.level == self.level => {
                self.current_word = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Move to the next word of the current level, wrapping at the end.
    ///
    /// No-op when there is no current word or it is not part of the level.
    pub fn advance(&mut self, catalog: &Catalog) {
        let Some(current) = self.current_word else {
            return;
        };
        let sequence = catalog.words_at(self.level);
        let Some(pos) = sequence.iter().position(|&i| i == current) else {
            return;
        };
        self.current_word = Some(sequence[(pos + 1) % sequence.len()]);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }
}
