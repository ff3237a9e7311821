//! Configuration and constants for smell processing.

use clap::ValueEnum;

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Field separator used by the smell CSV exports
pub const FIELD_DELIMITER: char = ',';

/// Fields per row: commit number, commit id, status, developer, instance name
pub const RECORD_FIELD_COUNT: usize = 5;

/// Reserved tag of the supplementary file listing commits without any smell.
///
/// Without it, a commit where every instance disappeared would never show
/// up, and the matching refactorings would be lost.
pub const NO_SMELL_TAG: &str = "NOSMELL";

/// Separator between the tokens of an input file name
pub const FILE_NAME_SEPARATOR: char = '_';

/// Extension picked up when a directory is given as input
pub const INPUT_EXTENSION: &str = "csv";

/// What to do when an input cannot be opened or fails while being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnreadableInputPolicy {
    /// Stop the whole run; no output is written
    #[default]
    Abort,
    /// Warn, drop the input and keep going with the rest
    Skip,
}

/// Settings for a single aggregation run
#[derive(Debug, Clone, Default)]
pub struct ProcessorConfig {
    pub unreadable_input: UnreadableInputPolicy,
}

impl ProcessorConfig {
    pub fn with_unreadable_input(mut self, policy: UnreadableInputPolicy) -> Self {
        self.unreadable_input = policy;
        self
    }
}
