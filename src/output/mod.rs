//! Output writers for aggregated smell data.
//!
//! This module handles writing data to disk in various formats:
//! - JSON report (commits plus developer table)
//! - CSV commit table with compact developer indices
//! - CSV developer lookup table

pub mod csv;
pub mod json;

// Re-export main types and functions
pub use self::csv::{CommitsCsvWriter, DevelopersCsvWriter};
pub use json::{build_report, read_report, write_report, JsonReportWriter};

use crate::aggregator::DeveloperRegistry;
use crate::parser::CommitSmellRecord;
use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// A consumer of the aggregated results of a run
pub trait SmellWriter {
    /// Short label used in logs and errors
    fn name(&self) -> &str;

    /// Persist `commits` together with the developer table
    fn write(
        &mut self,
        commits: &[CommitSmellRecord],
        developers: &DeveloperRegistry,
    ) -> Result<(), OutputError>;
}

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate `path` and create its missing parent directories
fn prepare_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Calculate file size in bytes
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
