//! CSV output writers.
//!
//! The commit table encodes developers by their registry index; the
//! developer table maps indices back to identifiers.

use super::{calculate_file_size, prepare_path, SmellWriter};
use crate::aggregator::DeveloperRegistry;
use crate::parser::CommitSmellRecord;
use crate::utils::error::OutputError;
use log::info;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const COMMITS_HEADER: &str = "smell,commit_number,commit_id,status,developer,introduced,refactored";
const DEVELOPERS_HEADER: &str = "index,developer";

/// Quote a field if it contains a delimiter, quote or line break
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write the commit table to any writer
pub fn write_commits_csv<W: Write>(
    mut out: W,
    commits: &[CommitSmellRecord],
    developers: &DeveloperRegistry,
) -> Result<(), OutputError> {
    writeln!(out, "{}", COMMITS_HEADER)?;
    for commit in commits {
        let developer = developers.index_of(&commit.developer)?;
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            commit.smell_type,
            commit.commit_number,
            escape_field(&commit.commit_id),
            escape_field(&commit.status),
            developer,
            commit.introduced,
            commit.refactored
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Write the developer lookup table to any writer
pub fn write_developers_csv<W: Write>(
    mut out: W,
    developers: &DeveloperRegistry,
) -> Result<(), OutputError> {
    writeln!(out, "{}", DEVELOPERS_HEADER)?;
    for (position, id) in developers.ordered_identifiers().iter().enumerate() {
        writeln!(out, "{},{}", position + 1, escape_field(id))?;
    }
    out.flush()?;
    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>, OutputError> {
    prepare_path(path)?;
    Ok(BufWriter::new(File::create(path)?))
}

/// [`SmellWriter`] producing the per-commit CSV table
#[derive(Debug, Clone)]
pub struct CommitsCsvWriter {
    path: PathBuf,
}

impl CommitsCsvWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SmellWriter for CommitsCsvWriter {
    fn name(&self) -> &str {
        "commits-csv"
    }

    fn write(
        &mut self,
        commits: &[CommitSmellRecord],
        developers: &DeveloperRegistry,
    ) -> Result<(), OutputError> {
        info!("Writing commit table to: {}", self.path.display());
        write_commits_csv(create_file(&self.path)?, commits, developers)?;
        info!(
            "Commit table written ({} rows, {} bytes)",
            commits.len(),
            calculate_file_size(&self.path)
        );
        Ok(())
    }
}

/// [`SmellWriter`] producing the developer lookup table
#[derive(Debug, Clone)]
pub struct DevelopersCsvWriter {
    path: PathBuf,
}

impl DevelopersCsvWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SmellWriter for DevelopersCsvWriter {
    fn name(&self) -> &str {
        "developers-csv"
    }

    fn write(
        &mut self,
        _commits: &[CommitSmellRecord],
        developers: &DeveloperRegistry,
    ) -> Result<(), OutputError> {
        info!("Writing developer table to: {}", self.path.display());
        write_developers_csv(create_file(&self.path)?, developers)
    }
}
