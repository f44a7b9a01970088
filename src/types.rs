//! Extracted record types.

use serde::Serialize;

/// A single vaccination event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vaccination {
    /// Date-only form of the DatoTid token (YYYY-MM-DD).
    pub date: String,

    /// Vaccine name as stated in the export.
    pub vaccine: String,
}

/// A continuation note from the patient journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kontinuation {
    /// Date-only form of the DatoTid token (YYYY-MM-DD).
    pub date: String,

    /// Space-joined text runs from the embedded WordprocessingML body.
    pub text: String,
}

/// All clinical facts extracted from one FNUX document.
///
/// Categories are independent: a section missing from the source yields
/// an empty vector here, never an error, and one category's emptiness
/// does not affect another's presence. Entry order within each category
/// follows document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedicalData {
    pub cave_entries: Vec<String>,
    pub vaccinations: Vec<Vaccination>,
    pub diagnoses: Vec<String>,
    pub kontinuationer: Vec<Kontinuation>,
}

impl MedicalData {
    /// True when no category produced any entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cave_entries.is_empty()
            && self.vaccinations.is_empty()
            && self.diagnoses.is_empty()
            && self.kontinuationer.is_empty()
    }
}
