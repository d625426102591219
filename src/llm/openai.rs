use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{ChatMessage, CompletionProvider};

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "OpenAI API key is missing. Set llm.api_key in config or JARGON_API_KEY."
            );
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_OPENAI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .context("Failed to build OpenAI HTTP client")?,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = OpenAiChatRequest {
            model: &self.model,
            messages,
            temperature: 0.0,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("OpenAI request failed")?;

        let response = response
            .error_for_status()
            .context("OpenAI returned an error status")?;

        let payload: OpenAiChatResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;

        let content = payload
            .choices
            .iter()
            .filter_map(|c| c.message.content.as_deref())
            .map(str::trim)
            .find(|t| !t.is_empty())
            .map(str::to_string)
            .context("OpenAI response did not contain completion text")?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct OpenAiChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoiceMessage {
    content: Option<String>,
}
