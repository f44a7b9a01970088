//! Prompt rendering for the LLM summarizer.
//!
//! The extracted facts are rendered into four labeled Danish sections.
//! Empty categories fall back to fixed "ingen registrerede" lines so the
//! model never sees a bare heading.

use crate::types::{Kontinuation, MedicalData, Vaccination};

/// Fallback line when no cave entries are registered.
pub const EMPTY_CAVE: &str = "Ingen registrerede cave-oplysninger";

/// Fallback line when no vaccinations are registered.
pub const EMPTY_VACCINATIONS: &str = "Ingen registrerede vaccinationer";

/// Fallback line when no diagnoses are registered.
pub const EMPTY_DIAGNOSES: &str = "Ingen registrerede diagnoser";

/// Fallback line when no continuation notes are registered.
pub const EMPTY_KONTINUATIONER: &str = "Ingen registrerede kontinuationer";

/// Render the four labeled sections.
pub fn render_sections(data: &MedicalData) -> String {
    format!(
        "### Cave-informationer:\n{}\n### Vaccinationshistorik:\n{}\n### Diagnosekoder:\n{}\n### Kontinuationer:\n{}",
        format_list(&data.cave_entries, EMPTY_CAVE),
        format_vaccinations(&data.vaccinations),
        format_list(&data.diagnoses, EMPTY_DIAGNOSES),
        format_kontinuationer(&data.kontinuationer),
    )
}

/// Build the complete user prompt: sections plus format instructions.
pub fn build_prompt(data: &MedicalData, format_instructions: &str) -> String {
    format!("{}\n\n{format_instructions}", render_sections(data))
}

/// Format string entries as bullet lines, or the fallback when empty.
fn format_list(items: &[String], empty_msg: &str) -> String {
    if items.is_empty() {
        return empty_msg.to_string();
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_vaccinations(vaccinations: &[Vaccination]) -> String {
    if vaccinations.is_empty() {
        return EMPTY_VACCINATIONS.to_string();
    }
    vaccinations
        .iter()
        .map(|v| format!("- {}: {}", v.date, v.vaccine))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_kontinuationer(kontinuationer: &[Kontinuation]) -> String {
    if kontinuationer.is_empty() {
        return EMPTY_KONTINUATIONER.to_string();
    }
    kontinuationer
        .iter()
        .map(|k| format!("- {}: {}", k.date, k.text))
        .collect::<Vec<_>>()
        .join("\n")
}
