//! Namespace constants and LLM configuration loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FnuxError, Result};

/// MedCom PLO document namespace used by FNUX exports.
pub const PLO_NS: &str = "urn:oio:medcom:plo:2009.12.31";

/// WordprocessingML namespace of the rich text embedded in note bodies.
pub const WPML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Type code marking a journal note as a continuation entry.
pub const KONTINUATION_KODE: &str = "Kontinuation";

/// Sibling positions scanned after a UUID marker for vaccination fields.
///
/// FNUX producers place a vaccination's date and name near its UUID rather
/// than under a shared parent. Downstream consumers depend on this exact
/// window, so it must not be widened.
pub const VACCINATION_LOOKAHEAD: usize = 3;

/// Standard locations probed for the LLM configuration file, in order.
const CONFIG_LOCATIONS: [&str; 2] = ["config/llm_config.yaml", "llm_config.yaml"];

/// Top-level LLM configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub llm: LlmSection,
}

/// The `llm:` section of the configuration file.
///
/// NOTE: Do NOT derive `Display` output containing `api_key`; the Debug
/// representation is only used in tests with dummy keys.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSection {
    /// Base URL of an OpenAI-compatible endpoint (e.g. `https://api.openai.com/v1`).
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    #[serde(default)]
    pub parameters: LlmParameters,
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Sampling and transport parameters, all optional in the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmParameters {
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmParameters {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_tokens: 1024,
            timeout_secs: 120,
        }
    }
}

/// Prompt text configuration with Danish defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub system_message: String,
    pub format_instructions: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system_message: "Du er en erfaren praktiserende læge. Du skriver et kort, \
                             fagligt journalresume på dansk ud fra strukturerede patientdata."
                .to_string(),
            format_instructions: "Skriv et kort, struktureret resume af ovenstående \
                                  patientdata på dansk. Medtag kun oplysninger, der \
                                  fremgår af data."
                .to_string(),
        }
    }
}

/// Load and validate the LLM configuration.
///
/// With an explicit path the file must exist; without one the standard
/// locations are probed in order.
///
/// # Arguments
/// * `path` - Optional path to the configuration file
///
/// # Returns
/// Validated configuration, or an error when the file is missing,
/// unparsable, or incomplete.
pub fn load_llm_config(path: Option<&Path>) -> Result<LlmConfig> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FnuxError::NotFound(p.to_path_buf()));
            }
            p.to_path_buf()
        }
        None => locate_config()?,
    };

    let raw = std::fs::read_to_string(&path)?;
    let config: LlmConfig = serde_yaml_ng::from_str(&raw)?;
    validate_llm_config(&config)?;

    Ok(config)
}

/// Probe the standard locations for a configuration file.
fn locate_config() -> Result<PathBuf> {
    CONFIG_LOCATIONS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .ok_or_else(|| {
            FnuxError::Config(format!(
                "LLM configuration file not found in standard locations ({})",
                CONFIG_LOCATIONS.join(", ")
            ))
        })
}

/// Validate required configuration fields.
///
/// # Returns
/// * `Ok(())` if all required fields carry a value
/// * `Err(FnuxError::Config)` naming the first empty field
pub fn validate_llm_config(config: &LlmConfig) -> Result<()> {
    let required = [
        ("llm.base_url", &config.llm.base_url),
        ("llm.api_key", &config.llm.api_key),
        ("llm.model", &config.llm.model),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(FnuxError::Config(format!(
                "Required field '{field}' is empty"
            )));
        }
    }

    Ok(())
}
