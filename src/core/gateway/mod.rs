//! AI content gateway.
//!
//! Generates example sentences for words and lessons for grammar topics.
//! Callers only ever see `Some(content)` or `None`; `None` means the content
//! is unavailable and the user may retry by hand.

pub mod error;
pub mod gemini;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::catalog::{GrammarTopic, Word};

pub use error::GatewayError;
pub use gemini::GeminiGateway;

/// A generated example sentence for one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    /// Chinese characters.
    pub sentence: String,
    pub pinyin: String,
    /// English translation.
    pub translation: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGateway: Send + Sync {
    async fn generate_example(&self, word: &Word) -> Option<ExampleSentence>;

    async fn generate_lesson(&self, topic: &GrammarTopic) -> Option<String>;
}

/// Gateway used when no API key is configured. Everything is unavailable.
pub struct OfflineGateway;

#[async_trait]
impl ContentGateway for OfflineGateway {
    async fn generate_example(&self, word: &Word) -> Option<ExampleSentence> {
        tracing::debug!(word = %word.id, "AI gateway offline, example unavailable");
        None
    }

    async fn generate_lesson(&self, topic: &GrammarTopic) -> Option<String> {
        tracing::debug!(topic = %topic.id, "AI gateway offline, lesson unavailable");
        None
    }
}
