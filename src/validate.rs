//! Per-stanza ID and synonym rules for the feature relationship vocabulary.
//!
//! The validator walks the parsed stanza sequence once, appending a message
//! to the appropriate discrepancy list for every rule violation. Violations
//! never abort the run; all stanzas are checked and the findings are
//! surfaced together in the report.

use regex::Regex;
use std::sync::OnceLock;

use crate::stanza::Stanza;

/// Identifier prefix for the vocabulary.
pub const ID_PREFIX: &str = "RV";

/// Digits expected after the prefix colon.
pub const ID_SUFFIX_LEN: usize = 7;

/// The root term, exempt from synonym completeness rules.
pub const ROOT_ID: &str = "RV:0000000";

/// A full synonym declaration: quoted label followed by the two-word
/// relationship tag, e.g. `"Some Label" RELATED ORGANIZER [...]`.
const SYNONYM_PATTERN: &str = r#""(?P<label>[^"]*)"\s*(?P<rel>\S+)\s+(?P<role>\S+)"#;

/// Just the quoted label, used to tell a missing label apart from a
/// malformed annotation after it.
const LABEL_PATTERN: &str = r#""[^"]*""#;

/// The two complementary synonym roles a stanza must declare exactly once
/// each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePair {
    pub first: &'static str,
    pub second: &'static str,
}

impl RolePair {
    /// Roles used by the feature relationship vocabulary.
    pub const ORGANIZER_PARTICIPANT: RolePair = RolePair {
        first: "ORGANIZER",
        second: "PARTICIPANT",
    };

    /// Roles used by the simpler sanity-check variant of the vocabulary.
    pub const FORWARD_REVERSE: RolePair = RolePair {
        first: "FORWARD",
        second: "REVERSE",
    };

    /// The tag as written in a synonym declaration, e.g. `RELATED ORGANIZER`.
    fn tag(role: &str) -> String {
        format!("RELATED {}", role)
    }
}

/// Findings accumulated across all stanzas, in stanza encounter order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Discrepancies {
    /// Missing or incorrectly formatted primary/alt IDs.
    pub invalid_ids: Vec<String>,
    /// Missing, unreadable, duplicated, or incomplete synonym declarations.
    pub invalid_synonyms: Vec<String>,
}

impl Discrepancies {
    pub fn is_empty(&self) -> bool {
        self.invalid_ids.is_empty() && self.invalid_synonyms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.invalid_ids.len() + self.invalid_synonyms.len()
    }
}

/// The compiled synonym pattern, built once per process.
fn annotated() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(SYNONYM_PATTERN).expect("synonym pattern compiles"))
}

/// The compiled label-only pattern, built once per process.
fn quoted() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LABEL_PATTERN).expect("label pattern compiles"))
}

/// Applies the per-stanza rule set. Owns the role pair and its tags; does
/// not mutate stanzas.
pub struct Validator {
    roles: RolePair,
    first_tag: String,
    second_tag: String,
}

impl Validator {
    pub fn new() -> Self {
        Self::with_roles(RolePair::ORGANIZER_PARTICIPANT)
    }

    pub fn with_roles(roles: RolePair) -> Self {
        Self {
            roles,
            first_tag: RolePair::tag(roles.first),
            second_tag: RolePair::tag(roles.second),
        }
    }

    /// Check every stanza, returning the accumulated discrepancy lists.
    pub fn check(&self, stanzas: &[Stanza]) -> Discrepancies {
        let mut findings = Discrepancies::default();
        for stanza in stanzas {
            self.check_stanza(stanza, &mut findings);
        }
        findings
    }

    fn check_stanza(&self, stanza: &Stanza, findings: &mut Discrepancies) {
        let id = match stanza.id() {
            Some(id) => id,
            None => {
                // No id at all: name the stanza by sequence number and raw
                // content, and skip the remaining checks.
                findings.invalid_ids.push(format!(
                    "stanza {} without id: {}",
                    stanza.seq,
                    stanza.render()
                ));
                return;
            }
        };

        if !id_well_formed(id) {
            findings
                .invalid_ids
                .push(format!("invalid primary ID: {}", id));
        }

        // Alt IDs follow the same format rule, checked independently of the
        // primary outcome.
        if let Some(alt_ids) = stanza.get("alt_id") {
            for alt in alt_ids {
                if !id_well_formed(alt) {
                    findings
                        .invalid_ids
                        .push(format!("invalid alt ID: {} (stanza {})", alt, id));
                }
            }
        }

        // The root term carries no synonym obligations.
        if id == ROOT_ID {
            return;
        }

        self.check_synonyms(stanza, id, findings);
    }

    fn check_synonyms(&self, stanza: &Stanza, id: &str, findings: &mut Discrepancies) {
        let synonyms = match stanza.get("synonym") {
            Some(values) => values,
            None => {
                findings
                    .invalid_synonyms
                    .push(format!("{}: stanza w/o synonyms", id));
                return;
            }
        };

        // Label of the first synonym seen for each role.
        let mut first_label: Option<&str> = None;
        let mut second_label: Option<&str> = None;
        // An unreadable synonym suppresses the completeness check, so one
        // bad entry does not also count as a missing role.
        let mut suppress_completeness = false;

        for value in synonyms {
            let caps = match annotated().captures(value) {
                Some(caps) => caps,
                None => {
                    if quoted().is_match(value) {
                        findings
                            .invalid_synonyms
                            .push(format!("{}: malformed synonym annotation: {}", id, value));
                    } else {
                        findings
                            .invalid_synonyms
                            .push(format!("{}: missing synonym value: {}", id, value));
                    }
                    suppress_completeness = true;
                    continue;
                }
            };

            let label = caps.name("label").map(|m| m.as_str()).unwrap_or_default();
            let tag = format!("{} {}", &caps["rel"], &caps["role"]);
            if tag == self.first_tag {
                if first_label.is_some() {
                    findings
                        .invalid_synonyms
                        .push(format!("{}: multi {}", id, self.roles.first));
                } else {
                    first_label = Some(label);
                }
            } else if tag == self.second_tag {
                if second_label.is_some() {
                    findings
                        .invalid_synonyms
                        .push(format!("{}: multi {}", id, self.roles.second));
                } else {
                    second_label = Some(label);
                }
            }
        }

        match (first_label, second_label) {
            (Some(first), Some(second)) => {
                if first == second {
                    findings.invalid_synonyms.push(format!(
                        "{}: {} and {} values identical: {}",
                        id, self.roles.first, self.roles.second, first
                    ));
                }
            }
            _ if suppress_completeness => {}
            _ => {
                findings.invalid_synonyms.push(format!(
                    "{}: missing {} or {}",
                    id, self.roles.first, self.roles.second
                ));
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// A well-formed identifier is `RV:` plus exactly seven digits, with the
/// colon at index 2.
fn id_well_formed(id: &str) -> bool {
    if id.find(':') != Some(2) {
        return false;
    }
    match id.split_once(':') {
        Some((prefix, suffix)) => {
            prefix == ID_PREFIX
                && suffix.len() == ID_SUFFIX_LEN
                && suffix.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
