use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{ChatMessage, CompletionProvider, Role};

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "Gemini API key is missing. Set llm.api_key in config or JARGON_API_KEY."
            );
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_GEMINI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
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
                .context("Failed to build Gemini HTTP client")?,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        // Gemini has no system role in contents; system turns go into
        // systemInstruction and assistant turns use the "model" role.
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in messages {
            match message.role {
                Role::System => system_parts.push(GeminiPart {
                    text: message.content.clone(),
                }),
                Role::User => contents.push(GeminiContent {
                    role: "user",
                    parts: vec![GeminiPart {
                        text: message.content.clone(),
                    }],
                }),
                Role::Assistant => contents.push(GeminiContent {
                    role: "model",
                    parts: vec![GeminiPart {
                        text: message.content.clone(),
                    }],
                }),
            }
        }

        let body = GeminiGenerateContentRequest {
            system_instruction: if system_parts.is_empty() {
                None
            } else {
                Some(GeminiSystemInstruction {
                    parts: system_parts,
                })
            },
            contents,
        };

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;

        let response = response
            .error_for_status()
            .context("Gemini returned an error status")?;

        let payload: GeminiGenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let content = payload
            .candidates
            .iter()
            .flat_map(|c| c.content.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .map(str::trim)
            .find(|t| !t.is_empty())
            .map(str::to_string)
            .context("Gemini response did not contain completion text")?;

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct GeminiGenerateContentRequest {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}
