//! Catalog data models: proficiency levels, vocabulary words and grammar topics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::difficulty::Difficulty;

// ============================================================================
// Proficiency Level
// ============================================================================

/// HSK proficiency level. Serialized as its ordinal number (1..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HskLevel {
    Hsk1,
    Hsk2,
    Hsk3,
}

impl HskLevel {
    pub const ALL: [HskLevel; 3] = [HskLevel::Hsk1, HskLevel::Hsk2, HskLevel::Hsk3];

    /// Lowest level; the session starts here.
    pub const fn lowest() -> Self {
        HskLevel::Hsk1
    }

    pub const fn number(self) -> u8 {
        match self {
            HskLevel::Hsk1 => 1,
            HskLevel::Hsk2 => 2,
            HskLevel::Hsk3 => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HskLevel::Hsk1),
            2 => Some(HskLevel::Hsk2),
            3 => Some(HskLevel::Hsk3),
            _ => None,
        }
    }

    /// Next level, wrapping from HSK 3 back to HSK 1.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous level, wrapping from HSK 1 to HSK 3.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&l| l == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for HskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSK {}", self.number())
    }
}

impl From<HskLevel> for u8 {
    fn from(level: HskLevel) -> Self {
        level.number()
    }
}

impl TryFrom<u8> for HskLevel {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        HskLevel::from_number(n).ok_or_else(|| format!("unknown HSK level: {n}"))
    }
}

// ============================================================================
// Word
// ============================================================================

/// A vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Stable unique identifier, also the key stored in the mastered set.
    pub id: String,
    /// Display characters, e.g. "你好".
    #[serde(rename = "char")]
    pub hanzi: String,
    pub pinyin: String,
    /// English gloss.
    #[serde(rename = "en")]
    pub english: String,
    pub level: HskLevel,
    /// Assigned once when the catalog is built; never read from input.
    #[serde(default, skip_deserializing)]
    pub difficulty: Option<Difficulty>,
}

impl Word {
    pub fn new(
        id: impl Into<String>,
        hanzi: impl Into<String>,
        pinyin: impl Into<String>,
        english: impl Into<String>,
        level: HskLevel,
    ) -> Self {
        Self {
            id: id.into(),
            hanzi: hanzi.into(),
            pinyin: pinyin.into(),
            english: english.into(),
            level,
            difficulty: None,
        }
    }
}

// ============================================================================
// Grammar Topic
// ============================================================================

/// A grammar point offered as an AI-generated lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarTopic {
    pub id: String,
    pub title: String,
    pub level: HskLevel,
    /// One-line summary shown in the topic list and sent with the lesson request.
    pub description: String,
}

impl GrammarTopic {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        level: HskLevel,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            level,
            description: description.into(),
        }
    }
}
