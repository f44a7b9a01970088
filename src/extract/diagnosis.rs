//! Diagnosis code extraction.

use roxmltree::Node;

use crate::config::PLO_NS;
use crate::xml::{find_children, find_descendant};

/// Extract diagnosis entries as `"<id> <code>: <text>"` strings.
///
/// A `KodeStruktur` carries three parallel child lists: classification
/// identifiers, codes, and code texts. Entries are aligned by index and
/// truncated to the shortest list; a triple is emitted only when all
/// three elements carry a text value. Downstream consumers rely on the
/// truncation, so unequal lists are not an error.
pub fn extract_diagnoses(root: Node<'_, '_>) -> Vec<String> {
    let mut diagnoses = Vec::new();

    let Some(samling) = find_descendant(root, PLO_NS, "DiagnoseSamling") else {
        return diagnoses;
    };

    for struktur in find_children(samling, PLO_NS, "DiagnoseStruktur") {
        let Some(kode_struktur) = find_children(struktur, PLO_NS, "KodeStruktur").next() else {
            continue;
        };

        let ids: Vec<Node<'_, '_>> =
            find_children(kode_struktur, PLO_NS, "KlassifikationsIdentifikator").collect();
        let koder: Vec<Node<'_, '_>> = find_children(kode_struktur, PLO_NS, "Kode").collect();
        let tekster: Vec<Node<'_, '_>> =
            find_children(kode_struktur, PLO_NS, "KodeTekst").collect();

        for ((id, kode), tekst) in ids.iter().zip(&koder).zip(&tekster) {
            let (Some(id), Some(kode), Some(tekst)) = (id.text(), kode.text(), tekst.text())
            else {
                continue;
            };
            diagnoses.push(format!("{} {}: {}", id.trim(), kode.trim(), tekst.trim()));
        }
    }

    diagnoses
}
