//! Error types for the FNUX extractor.
//!
//! Loader-level failures (missing file, malformed XML) abort the whole
//! extraction. Missing collections inside an otherwise well-formed
//! document are never errors; the extractors resolve them to empty
//! results locally.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum FnuxError {
    /// Input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input could not be parsed as well-formed XML.
    #[error("Failed to parse XML file: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or incomplete LLM configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed as YAML.
    #[error("Failed to parse configuration: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request to the LLM failed.
    #[error("LLM request failed: {0}")]
    LlmRequest(#[from] reqwest::Error),

    /// LLM returned a non-success status.
    #[error("LLM API error (status {status}): {message}")]
    LlmApi { status: u16, message: String },

    /// LLM returned an empty completion.
    #[error("LLM returned empty response")]
    LlmEmptyResponse,

    /// All retry attempts failed.
    #[error("LLM request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// User declined to send the prompt.
    #[error("Afbrudt af bruger")]
    Aborted,
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, FnuxError>;
