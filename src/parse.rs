//! Line-oriented parser for the OBO `[Term]` subset.
//!
//! The parser walks the file once, collecting `[Term]` stanzas into
//! [`Stanza`] records while watching the header region for the
//! `format-version` declaration. A declared version that differs from the
//! expected one aborts the parse outright; everything else is left for the
//! validator to judge.

use std::fmt;

use crate::stanza::{Stanza, TAB_FIELD};

/// A parsed OBO document: the declared format version (if any) plus the
/// stanzas in file order.
#[derive(Debug, Default)]
pub struct Document {
    /// Value of the `format-version` header line, if one was present.
    pub version: Option<String>,
    pub stanzas: Vec<Stanza>,
}

/// Errors that abort parsing outright, as opposed to content discrepancies
/// surfaced in the QC report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The file declares a `format-version` other than the one expected.
    VersionMismatch { expected: String, found: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::VersionMismatch { expected, found } => write!(
                f,
                "format-version mismatch: expected {}, file declares {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse OBO content into stanzas, checking the declared format version.
///
/// Only the `[Term]` stanza type is recognized. Lines before the first
/// `[Term]` are ignored apart from the `format-version` declaration. A field
/// line is split at its first colon only, so values keep embedded colons
/// intact. Lines containing a literal tab are additionally collected, raw,
/// under the stanza's `tab` field for diagnosis.
pub fn parse_document(content: &str, expected_version: &str) -> Result<Document, ParseError> {
    let mut doc = Document::default();

    let mut past_header = false;
    let mut in_stanza = false;
    let mut seq = 1;
    let mut current = Stanza::new(seq);

    for raw in content.lines() {
        // `lines()` already stripped the newline; `raw` is what we scan for
        // tabs, `stripped` is what drives tag and field recognition.
        let stripped = raw.trim();

        if stripped.contains("format-version") {
            let found = match stripped.split_once(':') {
                Some((_, rest)) => rest.trim().to_string(),
                None => String::new(),
            };
            if found != expected_version {
                return Err(ParseError::VersionMismatch {
                    expected: expected_version.to_string(),
                    found,
                });
            }
            doc.version = Some(found);
            // No early continue: a stanza field line declaring the version
            // is still recorded as a field below.
        }

        if stripped == "[Term]" {
            // The tag line itself is not a field.
            past_header = true;
            in_stanza = true;
            continue;
        }

        if stripped.is_empty() {
            // A blank line closes an open stanza. Further blank lines
            // between stanzas commit nothing.
            if in_stanza {
                in_stanza = false;
                doc.stanzas.push(current);
                seq += 1;
                current = Stanza::new(seq);
            }
            continue;
        }

        if past_header && in_stanza {
            let (name, value) = match stripped.split_once(':') {
                Some((name, value)) => (name, value.trim()),
                None => (stripped, ""),
            };
            current.push(name, value);
            if raw.contains('\t') {
                current.push(TAB_FIELD, raw);
            }
        }
    }

    // End of input acts as an implicit terminator: a file that stops
    // mid-stanza still gets its last stanza validated.
    if in_stanza && !current.is_empty() {
        doc.stanzas.push(current);
    }

    Ok(doc)
}
