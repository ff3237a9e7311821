//! JSON report output writer.
//!
//! Writes the commit records and the developer table as one versioned
//! JSON document.

use super::{calculate_file_size, prepare_path, SmellWriter};
use crate::aggregator::DeveloperRegistry;
use crate::parser::schema::{CommitSmellRecord, DeveloperEntry, SmellReport};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Assemble a report from the results of a run
///
/// **Public** - useful for tests and in-memory consumers
pub fn build_report(commits: &[CommitSmellRecord], developers: &DeveloperRegistry) -> SmellReport {
    SmellReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        developers: developers
            .ordered_identifiers()
            .iter()
            .enumerate()
            .map(|(position, id)| DeveloperEntry {
                index: position + 1,
                id: id.clone(),
            })
            .collect(),
        commits: commits.to_vec(),
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &SmellReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    prepare_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<SmellReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: SmellReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} commits",
        report.version,
        report.commits.len()
    );

    Ok(report)
}

/// [`SmellWriter`] producing a JSON report file
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SmellWriter for JsonReportWriter {
    fn name(&self) -> &str {
        "json"
    }

    fn write(
        &mut self,
        commits: &[CommitSmellRecord],
        developers: &DeveloperRegistry,
    ) -> Result<(), OutputError> {
        write_report(&build_report(commits, developers), &self.path)
    }
}
