//! # rvqc - Feature Relationship Vocabulary QC
//!
//! rvqc generates a sanity/QC report for a feature relationship vocabulary
//! OBO file, checking structural and semantic well-formedness before the
//! file is accepted downstream.
//!
//! ## Overview
//!
//! The input file is parsed into `[Term]` stanzas, each stanza is run
//! through the ID and synonym rule set, and every violation is recorded as
//! a human-readable discrepancy in a plain-text report. Violations never
//! abort the run; only a `format-version` mismatch does.
//!
//! ## Modules
//!
//! - [`stanza`] - Stanza data model: ordered field-to-values mapping
//! - [`parse`] - Line-oriented OBO parser and format-version detection
//! - [`validate`] - Per-stanza ID and synonym rules
//! - [`report`] - Plain-text report emission
//! - [`config`] - Report path and expected-version resolution
//!
//! ## Example
//!
//! ```no_run
//! use rvqc::parse::parse_document;
//! use rvqc::validate::Validator;
//!
//! let content = std::fs::read_to_string("feature_relationship.obo")
//!     .expect("Failed to read input");
//!
//! let doc = parse_document(&content, "1.2").expect("Version mismatch");
//! let findings = Validator::new().check(&doc.stanzas);
//!
//! if findings.is_empty() {
//!     println!("clean");
//! }
//! ```

pub mod config;
pub mod parse;
pub mod report;
pub mod stanza;
pub mod validate;
