//! End-to-end QC runs: an OBO file on disk through parse, validate, and
//! report emission, the way the binary drives the library.

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use rvqc::config::{Config, EXPECTED_VERSION_VAR, REPORT_PATH_VAR};
use rvqc::parse::{parse_document, ParseError};
use rvqc::report::{write_report, ID_SECTION_TITLE, SYNONYM_SECTION_TITLE};
use rvqc::validate::Validator;

const EXPECTED_VERSION: &str = "1.2";

/// Parse a file's content and run the validator, writing the report next to
/// the input. Returns (dirty, report content).
fn run_qc(dir: &TempDir, obo_content: &str) -> (bool, String) {
    let input = dir.path().join("feature_relationship.obo");
    fs::write(&input, obo_content).unwrap();

    let content = fs::read_to_string(&input).unwrap();
    let doc = parse_document(&content, EXPECTED_VERSION).unwrap();
    let findings = Validator::new().check(&doc.stanzas);

    let report_path = dir.path().join("sanity.rpt");
    let mut report = fs::File::create(&report_path).unwrap();
    let dirty = write_report(&mut report, &findings).unwrap();

    (dirty, fs::read_to_string(&report_path).unwrap())
}

#[test]
fn test_clean_two_stanza_file() {
    let dir = TempDir::new().unwrap();
    let content = "format-version: 1.2\n\
        default-namespace: feature_relationship\n\
        \n\
        [Term]\n\
        id: RV:0000000\n\
        name: feature_relationship\n\
        \n\
        [Term]\n\
        id: RV:0000001\n\
        name: organizes\n\
        synonym: \"Alpha\" RELATED ORGANIZER []\n\
        synonym: \"Beta\" RELATED PARTICIPANT []\n\
        \n";

    let (dirty, report) = run_qc(&dir, content);
    assert!(!dirty);
    assert!(report.is_empty());
}

#[test]
fn test_no_stanzas_is_clean() {
    let dir = TempDir::new().unwrap();
    let content = "format-version: 1.2\ndate: 2026-08-29\n";

    let (dirty, report) = run_qc(&dir, content);
    assert!(!dirty);
    assert!(report.is_empty());
}

#[test]
fn test_dirty_file_reports_both_sections_in_order() {
    let dir = TempDir::new().unwrap();
    let content = "format-version: 1.2\n\
        \n\
        [Term]\n\
        id: RV:12345\n\
        name: short suffix\n\
        \n\
        [Term]\n\
        id: RV:0000002\n\
        name: no synonyms\n\
        \n";

    let (dirty, report) = run_qc(&dir, content);
    assert!(dirty);

    let id_at = report.find(ID_SECTION_TITLE).unwrap();
    let syn_at = report.find(SYNONYM_SECTION_TITLE).unwrap();
    assert!(id_at < syn_at);
    assert!(report.contains("invalid primary ID: RV:12345"));
    assert!(report.contains("RV:0000002: stanza w/o synonyms"));
}

#[test]
fn test_version_mismatch_aborts_before_validation() {
    let content = "format-version: 1.0\n\
        \n\
        [Term]\n\
        id: RV:12345\n\
        \n";

    let err = parse_document(content, EXPECTED_VERSION).unwrap_err();
    assert_eq!(
        err,
        ParseError::VersionMismatch {
            expected: "1.2".to_string(),
            found: "1.0".to_string(),
        }
    );
}

#[test]
fn test_trailing_stanza_without_blank_line_is_validated() {
    let dir = TempDir::new().unwrap();
    let content = "format-version: 1.2\n\
        \n\
        [Term]\n\
        id: RV:0000003\n\
        name: file ends mid-stanza";

    let (dirty, report) = run_qc(&dir, content);
    assert!(dirty);
    assert!(report.contains("RV:0000003: stanza w/o synonyms"));
}

#[test]
#[serial]
fn test_config_from_environment() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("env.rpt");

    std::env::set_var(REPORT_PATH_VAR, &report_path);
    std::env::set_var(EXPECTED_VERSION_VAR, EXPECTED_VERSION);

    let config = Config::resolve(None, None).unwrap();
    assert_eq!(config.report_path, report_path);
    assert_eq!(config.expected_version, EXPECTED_VERSION);

    std::env::remove_var(REPORT_PATH_VAR);
    std::env::remove_var(EXPECTED_VERSION_VAR);
}
