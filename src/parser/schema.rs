//! Output schema definitions for per-commit smell data.
//!
//! This module defines the records handed to output writers and the
//! structure of the JSON report. The report is versioned to allow
//! future evolution.

use super::smell_type::SmellType;
use serde::{Deserialize, Serialize};

/// Introduced/refactored counts for one commit of one smell type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSmellRecord {
    /// Smell type of the input the commit was read from
    pub smell_type: SmellType,

    /// Analysis order of the commit
    pub commit_number: u64,

    /// Commit identifier (usually a SHA)
    pub commit_id: String,

    /// Commit status as reported by the analysis tool
    pub status: String,

    /// Developer who authored the commit
    pub developer: String,

    /// Instances present now but not in the previous commit
    pub introduced: u64,

    /// Instances present in the previous commit but gone now
    pub refactored: u64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmellReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Developer lookup table, ordered by index
    pub developers: Vec<DeveloperEntry>,

    /// Commit records in processing order
    pub commits: Vec<CommitSmellRecord>,
}

/// One row of the developer lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperEntry {
    /// 1-based index
    pub index: usize,
    pub id: String,
}
