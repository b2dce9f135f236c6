//! YAML document stream helpers.
//!
//! A stream is split into documents on `---` lines so each one can be
//! decoded on its own.

use serde_yaml::Mapping;

const DOCUMENT_START: &str = "---";
const DOCUMENT_END: &str = "...";

/// Returns the rest of `line` after `marker` if the line is that marker
/// followed by whitespace or nothing.
fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker)
        .filter(|rest| rest.is_empty() || rest.starts_with([' ', '\t', '\r', '\n']))
}

/// Returns true if `line` opens a new document.
#[must_use]
fn is_document_start(line: &str) -> bool {
    strip_marker(line, DOCUMENT_START).is_some()
}

/// Splits a YAML stream into documents.
///
/// A document starts at every line that begins with `---` in column 1
/// followed by whitespace or the end of the line. The marker line stays at
/// the start of its chunk. Indented or quoted `---` never splits.
///
/// # Examples
///
/// ```
/// use shelltpl_infrastructure::serialization::chunk_documents;
///
/// let chunks = chunk_documents("a: 1\n---\nb: 2\n");
/// assert_eq!(chunks, vec!["a: 1\n", "---\nb: 2\n"]);
/// ```
#[must_use]
pub fn chunk_documents(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        if offset > 0 && is_document_start(line) {
            chunks.push(&text[start..offset]);
            start = offset;
        }
        offset += line.len();
    }

    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Returns true if a chunk holds no content: only blank lines, comments,
/// directives and document markers.
#[must_use]
pub fn is_blank_document(chunk: &str) -> bool {
    chunk.lines().all(|line| {
        if line.starts_with('%') {
            return true;
        }
        let body = strip_marker(line, DOCUMENT_START)
            .or_else(|| strip_marker(line, DOCUMENT_END))
            .unwrap_or(line)
            .trim();
        body.is_empty() || body.starts_with('#')
    })
}

/// Decodes one document as a generic string-keyed mapping.
///
/// Only the success of the decode matters; the parsed value is discarded.
///
/// # Errors
///
/// Returns the decoder error if the document is not valid YAML or is not a
/// mapping.
pub fn decode_document(chunk: &str) -> Result<(), serde_yaml::Error> {
    serde_yaml::from_str::<Option<Mapping>>(chunk).map(|_| ())
}
