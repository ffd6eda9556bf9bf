//! Plain-text QC report emission.
//!
//! The report is the sole detailed error surface of a run: one labeled
//! section per non-empty discrepancy list, ID findings first.

use std::io::{self, Write};

use crate::validate::Discrepancies;

/// Title of the ID discrepancy section.
pub const ID_SECTION_TITLE: &str = "Incorrectly formatted RV IDs";

/// Title of the synonym discrepancy section.
pub const SYNONYM_SECTION_TITLE: &str = "Stanzas with missing or invalid synonym types";

/// Write the labeled report sections for any non-empty discrepancy list.
///
/// Each section is a title line, a blank line, one message per line, and a
/// trailing blank line. Returns whether anything was written, i.e. whether
/// the run was dirty.
pub fn write_report<W: Write>(out: &mut W, findings: &Discrepancies) -> io::Result<bool> {
    let sections = [
        (ID_SECTION_TITLE, &findings.invalid_ids),
        (SYNONYM_SECTION_TITLE, &findings.invalid_synonyms),
    ];

    let mut wrote = false;
    for (title, messages) in sections {
        if messages.is_empty() {
            continue;
        }
        writeln!(out, "{}", title)?;
        writeln!(out)?;
        for message in messages {
            writeln!(out, "{}", message)?;
        }
        writeln!(out)?;
        wrote = true;
    }
    Ok(wrote)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(findings: &Discrepancies) -> (bool, String) {
        let mut buf = Vec::new();
        let wrote = write_report(&mut buf, findings).unwrap();
        (wrote, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_clean_run_writes_nothing() {
        let (wrote, text) = render(&Discrepancies::default());
        assert!(!wrote);
        assert!(text.is_empty());
    }

    #[test]
    fn test_id_section_only() {
        let findings = Discrepancies {
            invalid_ids: vec!["invalid primary ID: RV:12345".to_string()],
            invalid_synonyms: vec![],
        };
        let (wrote, text) = render(&findings);
        assert!(wrote);
        assert_eq!(
            text,
            "Incorrectly formatted RV IDs\n\ninvalid primary ID: RV:12345\n\n"
        );
    }

    #[test]
    fn test_id_section_precedes_synonym_section() {
        let findings = Discrepancies {
            invalid_ids: vec!["invalid primary ID: XX:1234567".to_string()],
            invalid_synonyms: vec![
                "RV:0000001: stanza w/o synonyms".to_string(),
                "RV:0000002: multi ORGANIZER".to_string(),
            ],
        };
        let (wrote, text) = render(&findings);
        assert!(wrote);
        let id_at = text.find(ID_SECTION_TITLE).unwrap();
        let syn_at = text.find(SYNONYM_SECTION_TITLE).unwrap();
        assert!(id_at < syn_at);
        // Messages stay one per line, in order.
        assert!(text.contains("RV:0000001: stanza w/o synonyms\nRV:0000002: multi ORGANIZER\n"));
    }
}
