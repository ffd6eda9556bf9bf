//! CLI entry point for rvqc.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use rvqc::config::Config;
use rvqc::parse::{parse_document, ParseError};
use rvqc::report::write_report;
use rvqc::validate::Validator;

/// The declared format-version does not match the expected one.
const EXIT_VERSION_MISMATCH: i32 = 2;
/// Discrepancies were recorded in the report.
const EXIT_DISCREPANCIES: i32 = 3;

#[derive(Parser)]
#[command(name = "rvqc")]
#[command(version)]
#[command(about = "Sanity/QC report for feature relationship vocabulary OBO files", long_about = None)]
struct Cli {
    /// Path to the OBO file to check
    input: PathBuf,

    /// Report output path (overrides SANITY_RPT)
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Expected format-version (overrides OBO_FILE_VERSION)
    #[arg(long, value_name = "VERSION")]
    expected_version: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.report, cli.expected_version)?;

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("Cannot open input file: {}", cli.input.display()))?;

    let doc = match parse_document(&content, &config.expected_version) {
        Ok(doc) => doc,
        Err(err @ ParseError::VersionMismatch { .. }) => {
            // Fatal and distinct from content discrepancies: no report is
            // produced for a file in the wrong format.
            eprintln!("{} {}", "✗".red(), err);
            std::process::exit(EXIT_VERSION_MISMATCH);
        }
    };

    let findings = Validator::new().check(&doc.stanzas);

    let mut report = fs::File::create(&config.report_path)
        .with_context(|| format!("Cannot open report file: {}", config.report_path.display()))?;
    let dirty = write_report(&mut report, &findings)
        .with_context(|| format!("Failed to write {}", config.report_path.display()))?;

    if dirty {
        println!(
            "{} {}: {} discrepancies, see {}",
            "✗".red(),
            cli.input.display(),
            findings.len(),
            config.report_path.display()
        );
        std::process::exit(EXIT_DISCREPANCIES);
    }

    println!(
        "{} {}: {} stanzas, no discrepancies",
        "✓".green(),
        cli.input.display(),
        doc.stanzas.len()
    );
    Ok(())
}
