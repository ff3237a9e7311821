//! Row parser for smell CSV exports.
//!
//! Each row describes one smell instance detected in one commit:
//! `commit_number,commit_id,status,developer,instance_name`

use crate::utils::config::{FIELD_DELIMITER, RECORD_FIELD_COUNT};
use crate::utils::error::ParseError;

/// A single smell occurrence as read from one CSV row.
///
/// Short-lived: the diff engine folds it into its multisets and drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmellInstanceRecord {
    pub commit_number: u64,
    pub commit_id: String,
    pub status: String,
    pub developer: String,
    pub instance: String,
}

/// Parse one data row
///
/// **Public** - the record parser contract used by the aggregator
///
/// The instance name is the remainder of the row after the fourth
/// delimiter, so it may itself contain commas.
///
/// # Errors
/// * `ParseError::FieldCount` - fewer than five fields
/// * `ParseError::InvalidCommitNumber` - commit number is not an unsigned integer
/// * `ParseError::EmptyField` - developer identifier is empty
pub fn parse_line(line: &str) -> Result<SmellInstanceRecord, ParseError> {
    let fields: Vec<&str> = line
        .splitn(RECORD_FIELD_COUNT, FIELD_DELIMITER)
        .map(clean_field)
        .collect();

    if fields.len() != RECORD_FIELD_COUNT {
        return Err(ParseError::FieldCount {
            expected: RECORD_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let commit_number = fields[0]
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidCommitNumber(fields[0].to_string()))?;

    if fields[3].is_empty() {
        return Err(ParseError::EmptyField("developer"));
    }

    Ok(SmellInstanceRecord {
        commit_number,
        commit_id: fields[1].to_string(),
        status: fields[2].to_string(),
        developer: fields[3].to_string(),
        instance: fields[4].to_string(),
    })
}

/// Trim whitespace and one pair of enclosing double quotes
fn clean_field(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
}
