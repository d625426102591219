use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::llm::openai::OpenAiClient;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single turn in the conversation sent to a completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion over the full conversation history and return the
    /// model's reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Build a completion provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn CompletionProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai, gemini",
            other
        ),
    }
}
