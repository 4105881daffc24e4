//! Gemini implementation of the content gateway.
//!
//! Uses the Generative Language REST API with an API key. Example sentences
//! are requested as structured JSON through `responseSchema`; lessons come
//! back as free text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::error::{GatewayError, Result};
use super::{ContentGateway, ExampleSentence};
use crate::core::catalog::{GrammarTopic, Word};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

pub struct GeminiGateway {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiGateway {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key: api_key.trim().to_string(),
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// POST a generateContent request and return the first candidate's text.
    async fn generate(&self, body: Value) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(GatewayError::NotConfigured("missing Gemini API key".into()));
        }

        let start = std::time::Instant::now();
        let resp = self
            .client
            .post(self.endpoint())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(
            model = %self.model,
            status = status.as_u16(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Gemini response"
        );

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GatewayError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let json: Value = resp.json().await?;
        let text = json["candidates"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|p| p["text"].as_str())
            .ok_or_else(|| GatewayError::InvalidResponse("Missing content".to_string()))?;

        if text.trim().is_empty() {
            return Err(GatewayError::InvalidResponse("Empty content".to_string()));
        }
        Ok(text.to_string())
    }

    async fn try_example(&self, word: &Word) -> Result<ExampleSentence> {
        let body = json!({
            "contents": [{ "parts": [{ "text": example_prompt(word) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "sentence": { "type": "STRING" },
                        "pinyin": { "type": "STRING" },
                        "translation": { "type": "STRING" }
                    },
                    "required": ["sentence", "pinyin", "translation"]
                }
            }
        });
        let text = self.generate(body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn try_lesson(&self, topic: &GrammarTopic) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": lesson_prompt(topic) }] }]
        });
        self.generate(body).await
    }
}

#[async_trait]
impl ContentGateway for GeminiGateway {
    async fn generate_example(&self, word: &Word) -> Option<ExampleSentence> {
        match self.try_example(word).await {
            Ok(example) => Some(example),
            Err(e) => {
                tracing::warn!(word = %word.id, error = %e, "Error generating example sentence");
                None
            }
        }
    }

    async fn generate_lesson(&self, topic: &GrammarTopic) -> Option<String> {
        match self.try_lesson(topic).await {
            Ok(lesson) => Some(lesson),
            Err(e) => {
                tracing::warn!(topic = %topic.id, error = %e, "Error generating grammar lesson");
                None
            }
        }
    }
}

fn example_prompt(word: &Word) -> String {
    format!(
        "Create a simple Chinese example sentence using the word \"{hanzi}\" ({pinyin}).\n\
         The sentence should be suitable for an HSK Level {level} student.\n\
         Return the result in JSON format with \"sentence\" (Chinese characters), \"pinyin\", \
         and \"translation\" (English).\n\
         Keep the sentence relatively short and simple.",
        hanzi = word.hanzi,
        pinyin = word.pinyin,
        level = word.level.number(),
    )
}

fn lesson_prompt(topic: &GrammarTopic) -> String {
    format!(
        "You are a helpful Chinese language tutor.\n\
         Explain the Chinese grammar topic: \"{title}\" which is suitable for HSK Level {level}.\n\
         Description: {description}.\n\n\
         Structure your response in clear, concise Markdown.\n\
         Include:\n\
         1. A simple explanation of the rule.\n\
         2. The sentence structure/formula (e.g., Subject + Verb + ...).\n\
         3. Three clear example sentences with Characters, Pinyin, and English translation.\n\n\
         Make the tone encouraging and easy to understand for a beginner/intermediate learner.",
        title = topic.title,
        level = topic.level.number(),
        description = topic.description,
    )
}
