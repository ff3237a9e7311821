//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a single CSV row
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid commit number: {0:?}")]
    InvalidCommitNumber(String),

    #[error("empty {0} field")]
    EmptyField(&'static str),

    #[error("row is not valid UTF-8")]
    InvalidEncoding,
}

/// Reasons a file name does not map onto a smell type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FileNameError {
    #[error("unable to parse smell name for file: {0}")]
    Unparsable(String),

    #[error("unknown smell name: {0}")]
    UnknownSmell(String),
}

/// Developer registry contract violations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry was queried for an identifier it never saw.
    /// Always an internal bug, never bad input.
    #[error("unknown developer: {0}")]
    UnknownDeveloper(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Developer table out of sync: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors that abort an aggregation run
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("cannot read input {input}: {source}")]
    Unreadable {
        input: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record in {input} at line {line}: {source}")]
    MalformedRecord {
        input: String,
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("output {writer} failed: {source}")]
    Output {
        writer: String,
        #[source]
        source: OutputError,
    },
}
