//! Runtime configuration for a QC run.
//!
//! The wrapper scripts that drive this tool communicate through environment
//! variables; the CLI flags exist for direct invocation and take precedence.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable naming the report output path.
pub const REPORT_PATH_VAR: &str = "SANITY_RPT";

/// Environment variable naming the expected `format-version` value.
pub const EXPECTED_VERSION_VAR: &str = "OBO_FILE_VERSION";

#[derive(Debug, Clone)]
pub struct Config {
    /// Where the QC report is written.
    pub report_path: PathBuf,
    /// The `format-version` the input file must declare.
    pub expected_version: String,
}

impl Config {
    /// Resolve configuration, flags over environment.
    pub fn resolve(report_flag: Option<PathBuf>, version_flag: Option<String>) -> Result<Self> {
        let report_path = match report_flag {
            Some(path) => path,
            None => env::var(REPORT_PATH_VAR).map(PathBuf::from).with_context(|| {
                format!("No report path: pass --report or set {}", REPORT_PATH_VAR)
            })?,
        };

        let expected_version = match version_flag {
            Some(version) => version,
            None => env::var(EXPECTED_VERSION_VAR).with_context(|| {
                format!(
                    "No expected format version: pass --expected-version or set {}",
                    EXPECTED_VERSION_VAR
                )
            })?,
        };

        Ok(Self {
            report_path,
            expected_version,
        })
    }
}
