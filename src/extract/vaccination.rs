//! Vaccination record extraction.

use roxmltree::Node;

use crate::config::{PLO_NS, VACCINATION_LOOKAHEAD};
use crate::dates::date_only;
use crate::types::Vaccination;
use crate::xml::{element_children, find_children, find_descendant, get_text, has_qname};

/// Extract vaccination records.
///
/// FNUX encodes vaccination fields positionally: a `UUID` marker anchors a
/// group, and its `DatoTid` and `VaccinationNavn` follow within the next
/// few sibling positions instead of sitting under a shared parent. Each
/// marker triggers an independent bounded lookahead; the marker itself
/// contributes no data. A group missing either field within the window
/// contributes no record.
pub fn extract_vaccinations(root: Node<'_, '_>) -> Vec<Vaccination> {
    let mut vaccinations = Vec::new();

    let Some(samling) = find_descendant(root, PLO_NS, "VaccinationSamling") else {
        return vaccinations;
    };

    for struktur in find_children(samling, PLO_NS, "VaccinationStruktur") {
        let elements: Vec<Node<'_, '_>> = element_children(struktur).collect();

        for (i, element) in elements.iter().enumerate() {
            if !has_qname(*element, PLO_NS, "UUID") {
                continue;
            }
            if let Some(record) = scan_window(&elements[i + 1..]) {
                vaccinations.push(record);
            }
        }
    }

    vaccinations
}

/// Scan the bounded window after a UUID marker for a date and a name.
///
/// Either order; the first occurrence of each wins. Both must appear
/// within the window for a record to form.
fn scan_window(following: &[Node<'_, '_>]) -> Option<Vaccination> {
    let mut date: Option<String> = None;
    let mut vaccine: Option<String> = None;

    for node in following.iter().take(VACCINATION_LOOKAHEAD) {
        if date.is_none() && has_qname(*node, PLO_NS, "DatoTid") {
            date = Some(get_text(*node));
        } else if vaccine.is_none() && has_qname(*node, PLO_NS, "VaccinationNavn") {
            vaccine = Some(get_text(*node));
        }
    }

    match (date, vaccine) {
        (Some(date), Some(vaccine)) => Some(Vaccination {
            date: date_only(&date).to_string(),
            vaccine,
        }),
        _ => None,
    }
}
