//! Continuation note extraction.

use roxmltree::Node;

use crate::config::{KONTINUATION_KODE, PLO_NS, WPML_NS};
use crate::dates::date_only;
use crate::types::Kontinuation;
use crate::xml::{find_children, find_descendant, find_descendants, get_text};

/// Extract continuation notes from the note collection.
///
/// Each `NoteStruktur` holds parallel child lists of dates, text
/// containers, and type codes, aligned by index and truncated to the
/// shortest list. A triple qualifies only when its `EgneNoterKode` reads
/// exactly `Kontinuation`. The note body is WordprocessingML embedded in
/// the `Tekst` container; every non-empty `w:t` run anywhere in that
/// subtree is joined with single spaces. Notes whose body yields no text
/// are dropped.
pub fn extract_kontinuationer(root: Node<'_, '_>) -> Vec<Kontinuation> {
    let mut kontinuationer = Vec::new();

    let Some(samling) = find_descendant(root, PLO_NS, "NoteSamling") else {
        return kontinuationer;
    };

    for struktur in find_children(samling, PLO_NS, "NoteStruktur") {
        let dates: Vec<Node<'_, '_>> = find_children(struktur, PLO_NS, "DatoTid").collect();
        let texts: Vec<Node<'_, '_>> = find_children(struktur, PLO_NS, "Tekst").collect();
        let kinds: Vec<Node<'_, '_>> =
            find_children(struktur, PLO_NS, "EgneNoterKode").collect();

        for ((date, tekst), kind) in dates.iter().zip(&texts).zip(&kinds) {
            if get_text(*kind) != KONTINUATION_KODE {
                continue;
            }

            let text = collect_runs(*tekst);
            if text.is_empty() {
                continue;
            }

            kontinuationer.push(Kontinuation {
                date: date_only(&get_text(*date)).to_string(),
                text,
            });
        }
    }

    kontinuationer
}

/// Join all non-empty `w:t` runs under a text container with spaces.
fn collect_runs(container: Node<'_, '_>) -> String {
    find_descendants(container, WPML_NS, "t")
        .map(get_text)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;
    use pretty_assertions::assert_eq;

    fn extract(xml: &str) -> Vec<Kontinuation> {
        let doc = loader::parse(xml).unwrap();
        extract_kontinuationer(doc.root_element())
    }

    fn wrap(note_samling_body: &str) -> String {
        format!(
            r#"<FnuxDokument xmlns="urn:oio:medcom:plo:2009.12.31"
                            xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                <NoteSamling>{note_samling_body}</NoteSamling>
            </FnuxDokument>"#
        )
    }

    #[test]
    fn test_nested_runs_joined_with_spaces() {
        let xml = wrap(
            "<NoteStruktur>\
               <DatoTid>2024-01-24T10:00:00Z</DatoTid>\
               <Tekst><w:document><w:body><w:p>\
                 <w:r><w:t>Hello</w:t></w:r>\
                 <w:r><w:t>world</w:t></w:r>\
               </w:p></w:body></w:document></Tekst>\
               <EgneNoterKode>Kontinuation</EgneNoterKode>\
             </NoteStruktur>",
        );
        assert_eq!(
            extract(&xml),
            vec![Kontinuation {
                date: "2024-01-24".to_string(),
                text: "Hello world".to_string(),
            }]
        );
    }

    #[test]
    fn test_other_type_code_dropped() {
        let xml = wrap(
            "<NoteStruktur>\
               <DatoTid>2024-01-24T10:00:00Z</DatoTid>\
               <Tekst><w:t>Telefonnotat</w:t></Tekst>\
               <EgneNoterKode>Henvisning</EgneNoterKode>\
             </NoteStruktur>",
        );
        assert!(extract(&xml).is_empty());
    }

    #[test]
    fn test_type_code_match_is_exact() {
        let xml = wrap(
            "<NoteStruktur>\
               <DatoTid>2024-01-24T10:00:00Z</DatoTid>\
               <Tekst><w:t>Notat</w:t></Tekst>\
               <EgneNoterKode>kontinuation</EgneNoterKode>\
             </NoteStruktur>",
        );
        assert!(extract(&xml).is_empty());
    }

    #[test]
    fn test_empty_body_dropped() {
        let xml = wrap(
            "<NoteStruktur>\
               <DatoTid>2024-01-24T10:00:00Z</DatoTid>\
               <Tekst><w:document><w:t>   </w:t></w:document></Tekst>\
               <EgneNoterKode>Kontinuation</EgneNoterKode>\
             </NoteStruktur>",
        );
        assert!(extract(&xml).is_empty());
    }

    #[test]
    fn test_runs_outside_wpml_namespace_ignored() {
        let xml = wrap(
            "<NoteStruktur>\
               <DatoTid>2024-01-24T10:00:00Z</DatoTid>\
               <Tekst><t>plain</t><w:t>wpml</w:t></Tekst>\
               <EgneNoterKode>Kontinuation</EgneNoterKode>\
             </NoteStruktur>",
        );
        let notes = extract(&xml);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "wpml");
    }

    #[test]
    fn test_lists_truncate_to_shortest() {
        // Two dates and texts, one type code: only the first triple exists.
        let xml = wrap(
            "<NoteStruktur>\
               <DatoTid>2024-01-24T10:00:00Z</DatoTid>\
               <DatoTid>2024-02-02T08:00:00Z</DatoTid>\
               <Tekst><w:t>Første</w:t></Tekst>\
               <Tekst><w:t>Anden</w:t></Tekst>\
               <EgneNoterKode>Kontinuation</EgneNoterKode>\
             </NoteStruktur>",
        );
        let notes = extract(&xml);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].date, "2024-01-24");
        assert_eq!(notes[0].text, "Første");
    }

    #[test]
    fn test_missing_collection_yields_empty() {
        let xml = r#"<FnuxDokument xmlns="urn:oio:medcom:plo:2009.12.31"/>"#;
        assert!(extract(xml).is_empty());
    }
}
