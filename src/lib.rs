//! jargon - Extract glossaries of internal terms from meeting transcriptions
//!
//! Meeting transcriptions are full of company jargon: acronyms, code names,
//! project and customer names. jargon sends a transcription to an LLM
//! completion provider and iteratively refines the extracted glossary until a
//! round reports nothing new.

pub mod cli;
pub mod config;
pub mod glossary;
pub mod llm;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "jargon";
