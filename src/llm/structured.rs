//! Structured completion requests.
//!
//! Providers return free text; this layer parses that text into a typed value
//! while keeping the raw reply, which the refiner re-injects into the
//! conversation history verbatim on the next turn.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::llm::client::{ChatMessage, CompletionProvider};

/// A parsed completion plus the untouched response text.
#[derive(Debug, Clone)]
pub struct StructuredResponse<T> {
    pub value: T,
    pub raw: String,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Transport or service failure from the provider. Unrecoverable for the
    /// current round and propagated to the caller.
    #[error("completion provider call failed: {0}")]
    Provider(#[from] anyhow::Error),

    /// The provider answered, but the text does not parse into the expected
    /// shape. Carries the raw text so the conversation history stays coherent.
    #[error("completion response does not match the expected shape: {message}")]
    Malformed { message: String, raw: String },
}

/// Run one completion over `messages` and parse the reply as JSON into `T`.
pub async fn request_structured<T: DeserializeOwned>(
    provider: &dyn CompletionProvider,
    messages: &[ChatMessage],
) -> Result<StructuredResponse<T>, CompletionError> {
    let raw = provider.complete(messages).await?;

    match serde_json::from_str(strip_code_fences(&raw)) {
        Ok(value) => Ok(StructuredResponse { value, raw }),
        Err(err) => Err(CompletionError::Malformed {
            message: err.to_string(),
            raw,
        }),
    }
}

/// Models routinely wrap JSON answers in Markdown code fences.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);

    rest.trim()
}
