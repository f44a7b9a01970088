//! Cave (allergy warning) extraction.

use roxmltree::Node;

use crate::config::PLO_NS;
use crate::xml::{find_children, find_descendant, get_text};

/// Extract cave entries as display strings.
///
/// Comment lines arrive as a flat run of `LinieTekst` values in which a
/// label and its value are adjacent lines. Within each comment collection
/// the non-empty trimmed lines are paired positionally into
/// `"label: value"` strings; a trailing odd line is kept as-is. The
/// pairing never inspects line content to decide which line is the label.
pub fn extract_cave_entries(root: Node<'_, '_>) -> Vec<String> {
    let mut entries = Vec::new();

    let Some(samling) = find_descendant(root, PLO_NS, "CaveSamling") else {
        return entries;
    };

    for struktur in find_children(samling, PLO_NS, "CaveStruktur") {
        for linie_samling in find_children(struktur, PLO_NS, "KommentarLinieSamling") {
            let lines: Vec<String> = find_children(linie_samling, PLO_NS, "LinieTekst")
                .map(get_text)
                .filter(|s| !s.is_empty())
                .collect();
            entries.extend(pair_lines(&lines));
        }
    }

    entries
}

/// Join consecutive lines into `"label: value"` pairs.
fn pair_lines(lines: &[String]) -> Vec<String> {
    lines
        .chunks(2)
        .map(|pair| {
            if let [label, value] = pair {
                format!("{label}: {value}")
            } else {
                pair.concat()
            }
        })
        .collect()
}
