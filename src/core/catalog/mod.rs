//! Static reference data: vocabulary words and grammar topics tagged by HSK level.
//!
//! The catalog is built once at startup, either from the embedded data set or
//! from a JSON file, and is immutable afterwards. Difficulty tiers are assigned
//! during construction.

mod builtin;
pub mod error;
pub mod models;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::core::difficulty::assign_difficulty;

pub use error::{CatalogError, Result};
pub use models::{GrammarTopic, HskLevel, Word};

/// Position of a word in catalog order.
pub type WordIndex = usize;

/// On-disk catalog layout: `{"words": [...], "grammar": [...]}`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    words: Vec<Word>,
    #[serde(default)]
    grammar: Vec<GrammarTopic>,
}

/// Immutable word and grammar catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    words: Vec<Word>,
    topics: Vec<GrammarTopic>,
}

impl Catalog {
    /// Validate the entries and assign difficulty tiers.
    pub fn new(words: Vec<Word>, topics: Vec<GrammarTopic>) -> Result<Self> {
        let mut seen = HashSet::new();
        for word in &words {
            if word.hanzi.is_empty() {
                return Err(CatalogError::EmptyWord(word.id.clone()));
            }
            if !seen.insert(word.id.as_str()) {
                return Err(CatalogError::DuplicateWord(word.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for topic in &topics {
            if !seen.insert(topic.id.as_str()) {
                return Err(CatalogError::DuplicateTopic(topic.id.clone()));
            }
        }

        Ok(Self {
            words: words.into_iter().map(assign_difficulty).collect(),
            topics,
        })
    }

    /// The embedded HSK 1-3 data set.
    pub fn builtin() -> Self {
        let words = builtin::WORDS
            .iter()
            .map(|&(id, hanzi, pinyin, english, level)| {
                assign_difficulty(Word::new(id, hanzi, pinyin, english, level))
            })
            .collect();
        let topics = builtin::GRAMMAR
            .iter()
            .map(|&(id, title, level, description)| {
                GrammarTopic::new(id, title, level, description)
            })
            .collect();

        Self { words, topics }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.words, file.grammar)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    // ── Queries ─────────────────────────────────────────────────────────

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn topics(&self) -> &[GrammarTopic] {
        &self.topics
    }

    pub fn word(&self, index: WordIndex) -> Option<&Word> {
        self.words.get(index)
    }

    /// Catalog indices of the words at `level`, in catalog order.
    pub fn words_at(&self, level: HskLevel) -> Vec<WordIndex> {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, w)| w.level == level)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn first_word_at(&self, level: HskLevel) -> Option<WordIndex> {
        self.words.iter().position(|w| w.level == level)
    }

    pub fn topics_at(&self, level: HskLevel) -> Vec<&GrammarTopic> {
        self.topics.iter().filter(|t| t.level == level).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(
            builtin.words().to_vec(),
            builtin.topics().to_vec(),
        );
        assert!(rebuilt.is_ok(), "builtin catalog must pass validation");
    }

    #[test]
    fn test_builtin_covers_every_level() {
        let catalog = Catalog::builtin();
        for level in HskLevel::ALL {
            assert!(!catalog.words_at(level).is_empty(), "{level} has no words");
            assert!(!catalog.topics_at(level).is_empty(), "{level} has no topics");
        }
    }

    #[test]
    fn test_every_word_has_difficulty() {
        let catalog = Catalog::builtin();
        assert!(catalog.words().iter().all(|w| w.difficulty.is_some()));
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let words = vec![
            Word::new("a", "爱", "ài", "love", HskLevel::Hsk1),
            Word::new("a", "八", "bā", "eight", HskLevel::Hsk1),
        ];
        let err = Catalog::new(words, vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateWord(id) if id == "a"));
    }

    #[test]
    fn test_empty_word_rejected() {
        let words = vec![Word::new("a", "", "ài", "love", HskLevel::Hsk1)];
        assert!(matches!(
            Catalog::new(words, vec![]),
            Err(CatalogError::EmptyWord(_))
        ));
    }

    #[test]
    fn test_duplicate_topic_rejected() {
        let topics = vec![
            GrammarTopic::new("g", "是", HskLevel::Hsk1, ""),
            GrammarTopic::new("g", "吗", HskLevel::Hsk1, ""),
        ];
        assert!(matches!(
            Catalog::new(vec![], topics),
            Err(CatalogError::DuplicateTopic(_))
        ));
    }

    #[test]
    fn test_words_at_preserves_catalog_order() {
        let words = vec![
            Word::new("a", "爱", "ài", "love", HskLevel::Hsk1),
            Word::new("b", "帮助", "bāngzhù", "help", HskLevel::Hsk2),
            Word::new("c", "八", "bā", "eight", HskLevel::Hsk1),
        ];
        let catalog = Catalog::new(words, vec![]).unwrap();
        assert_eq!(catalog.words_at(HskLevel::Hsk1), vec![0, 2]);
        assert_eq!(catalog.first_word_at(HskLevel::Hsk2), Some(1));
        assert_eq!(catalog.first_word_at(HskLevel::Hsk3), None);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "words": [{"id":"x1","char":"猫","pinyin":"māo","en":"cat","level":1}],
            "grammar": [
                {"id":"g1","title":"吗 questions","level":1,"description":"Yes/no questions"}
            ]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.words().len(), 1);
        assert_eq!(catalog.topics().len(), 1);
        assert!(catalog.words()[0].difficulty.is_some());
        assert_eq!(catalog.words()[0].id, "x1");
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = Catalog::from_json_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
