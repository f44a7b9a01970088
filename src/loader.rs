//! FNUX document loading.
//!
//! roxmltree documents borrow their backing string, so loading is split in
//! two steps: [`read_source`] pulls the raw XML into memory and [`parse`]
//! builds the tree. Callers keep the string alive for as long as the
//! document is in use; the file handle itself is released as soon as
//! reading completes or fails.

use std::fs;
use std::path::Path;

use roxmltree::Document;

use crate::error::{FnuxError, Result};

/// Read a FNUX XML file into memory.
///
/// # Arguments
/// * `path` - Path to the XML file
///
/// # Returns
/// * `Ok(String)` with the file content
/// * `Err(FnuxError::NotFound)` when the path does not exist
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(FnuxError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Parse XML content into a navigable document tree.
///
/// Namespace URIs stay attached to every element name; the extractors
/// match against them exactly.
///
/// # Returns
/// * `Ok(Document)` rooted at the top-level element
/// * `Err(FnuxError::MalformedDocument)` carrying the parser diagnostic
pub fn parse(xml: &str) -> Result<Document<'_>> {
    Ok(Document::parse(xml)?)
}
