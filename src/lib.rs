//! FNUX Extractor - Extract clinical facts from Danish FNUX XML exports.
//!
//! FNUX is the MedCom PLO exchange format used to move patient journals
//! between Danish general-practice systems. This crate parses a FNUX
//! export, extracts four categories of clinical facts (cave entries,
//! vaccinations, diagnosis codes, continuation notes) and renders them
//! into a Danish prompt for LLM summarization.
//!
//! # Example
//!
//! ```
//! use fnux_extractor::{extract_medical_data, loader};
//!
//! let xml = r#"<FnuxDokument xmlns="urn:oio:medcom:plo:2009.12.31"/>"#;
//! let doc = loader::parse(xml).unwrap();
//! let data = extract_medical_data(&doc);
//! assert!(data.cave_entries.is_empty());
//! ```
//!
//! # Architecture
//!
//! The extractor is organized into several modules:
//!
//! - [`config`]: Namespace constants and LLM configuration
//! - [`types`]: Extracted record types (MedicalData, Vaccination, etc.)
//! - [`error`]: Error types and Result alias
//! - [`loader`]: File reading and XML parsing
//! - [`xml`]: Namespace-qualified DOM helpers
//! - [`dates`]: DatoTid token reduction
//! - [`extract`]: The four category sub-extractors and the assembler
//! - [`prompt`]: Prompt rendering for the summarizer
//! - [`llm`]: OpenAI-compatible summarization client
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod extract;
pub mod llm;
pub mod loader;
pub mod prompt;
pub mod types;
pub mod xml;

// Re-export main functions
pub use extract::extract_medical_data;

// Re-export commonly used items
pub use config::{PLO_NS, WPML_NS};
pub use error::{FnuxError, Result};
pub use types::{Kontinuation, MedicalData, Vaccination};
