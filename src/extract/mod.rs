//! Structural extraction of clinical facts from a parsed FNUX document.
//!
//! Four independent sub-extractors walk the tree under the root, one per
//! fact category. Absence of a collection is normal: FNUX exports come
//! from several upstream systems with inconsistent completeness, and a
//! missing section must not abort extraction of the others.

mod cave;
mod diagnosis;
mod kontinuation;
mod vaccination;

pub use cave::extract_cave_entries;
pub use diagnosis::extract_diagnoses;
pub use kontinuation::extract_kontinuationer;
pub use vaccination::extract_vaccinations;

use roxmltree::Document;

use crate::types::MedicalData;

/// Run all four sub-extractors against a loaded document.
///
/// The document is read-only; two runs over the same document yield
/// field-for-field identical results, including ordering.
pub fn extract_medical_data(doc: &Document<'_>) -> MedicalData {
    let root = doc.root_element();

    MedicalData {
        cave_entries: extract_cave_entries(root),
        vaccinations: extract_vaccinations(root),
        diagnoses: extract_diagnoses(root),
        kontinuationer: extract_kontinuationer(root),
    }
}
