//! Prompt templates for glossary extraction.

/// Fixed follow-up sent on every refinement round.
///
/// The model must report deltas only; re-emitting the full glossary would make
/// every round look "new" and the loop would never converge.
pub const REFINE_PROMPT: &str = "Double-check the transcription against your previous answer. \
List only omissions and corrections: terms you missed, or entries whose definition needs to change. \
Do not repeat entries that are already correct. \
Respond with the same JSON shape as before.";

/// System instruction carrying the extraction policy and the response shape.
pub const EXTRACTION_POLICY: &str = "You are an assistant that builds a glossary of company-internal terms from a meeting \
transcription.\n\
\n\
Rules:\n\
- Include only terms specific to the organization: acronyms, abbreviations, code names, \
and names of projects, products, or customers.\n\
- Exclude ordinary words and generic business vocabulary.\n\
- The transcription comes from speech-to-text and may contain phonetic mistakes; ignore \
expressions that make no sense in context.\n\
- For every term, infer a short definition from the transcription. If the context is not \
enough to tell what the term means, use \"-\" as the definition.\n\
- On your first pass every term is new, so set is_new to true for each entry.\n\
\n\
Respond with JSON only, using exactly this shape:\n\
{\"terms\": [{\"name\": \"...\", \"definition\": \"...\", \"is_new\": true}]}\n\
\n\
Field meanings: \"name\" is the term exactly as it appears, \"definition\" is its meaning \
inferred from context (\"-\" when unknown), and \"is_new\" is true when the term was not \
part of your previous answer.";

/// Initial user turn carrying the raw transcription.
pub fn build_transcription_prompt(transcription: &str) -> String {
    format!("Here is the transcription:\n{transcription}")
}
