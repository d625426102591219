//! Iterative glossary refinement
//!
//! One structured completion builds an initial glossary; follow-up rounds ask
//! the model to double-check and report only omissions or corrections. Each
//! round's delta is merged by term name into the running glossary, and the
//! loop stops as soon as a round flags nothing new or the configured bound
//! runs out.

use anyhow::Result;

use crate::glossary::model::Glossary;
use crate::llm::prompts::{build_transcription_prompt, EXTRACTION_POLICY, REFINE_PROMPT};
use crate::llm::{
    request_structured, ChatMessage, CompletionError, CompletionProvider, StructuredResponse,
};

/// Why the refinement loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A refinement round reported no new terms.
    NoNewTerms,
    /// The configured round bound ran out before convergence.
    MaxTriesReached,
}

/// Outcome of a completed refinement run.
#[derive(Debug, Clone)]
pub struct Refinement {
    pub glossary: Glossary,
    pub stop: StopReason,
    /// Refinement rounds performed after the initial extraction.
    pub rounds: u32,
}

/// Extract a glossary of internal terms from `transcription`, refining it
/// over at most `max_tries` follow-up rounds.
pub async fn extract_glossary(
    provider: &dyn CompletionProvider,
    transcription: &str,
    max_tries: u32,
) -> Result<Refinement> {
    let mut messages = vec![
        ChatMessage::system(EXTRACTION_POLICY),
        ChatMessage::user(build_transcription_prompt(transcription)),
    ];

    let initial = glossary_completion(provider, &messages).await?;
    log_round(0, &initial.value);

    let mut glossary = initial.value;
    let mut raw = initial.raw;

    for round in 1..=max_tries {
        // The previous reply goes back in verbatim so the model sees its own
        // exact wording, followed by the fixed double-check instruction.
        messages.push(ChatMessage::assistant(raw));
        messages.push(ChatMessage::user(REFINE_PROMPT));

        let response = glossary_completion(provider, &messages).await?;
        log_round(round, &response.value);
        raw = response.raw;

        // Convergence is judged on the round's delta, not the merged result.
        let count_new = response.value.count_new();
        glossary = glossary.merge(response.value);

        if count_new == 0 {
            tracing::info!(round, "no new terms reported, stopping");
            return Ok(Refinement {
                glossary,
                stop: StopReason::NoNewTerms,
                rounds: round,
            });
        }
    }

    tracing::info!(max_tries, "round bound reached before convergence");
    Ok(Refinement {
        glossary,
        stop: StopReason::MaxTriesReached,
        rounds: max_tries,
    })
}

/// One structured glossary request. A malformed reply is downgraded to an
/// empty delta; provider failures propagate.
async fn glossary_completion(
    provider: &dyn CompletionProvider,
    messages: &[ChatMessage],
) -> Result<StructuredResponse<Glossary>> {
    match request_structured::<Glossary>(provider, messages).await {
        Ok(response) => Ok(response),
        Err(CompletionError::Malformed { message, raw }) => {
            tracing::warn!(error = %message, "discarding unparseable glossary response");
            Ok(StructuredResponse {
                value: Glossary::default(),
                raw,
            })
        }
        Err(CompletionError::Provider(err)) => Err(err),
    }
}

fn log_round(round: u32, delta: &Glossary) {
    let terms: Vec<String> = delta
        .terms
        .iter()
        .map(|term| format!("{} ({})", term.name, term.is_new))
        .collect();
    tracing::info!(round, terms = ?terms, "glossary round");
}
