//! Configuration module for jargon
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::Settings;
