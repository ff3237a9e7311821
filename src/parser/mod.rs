//! Input parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw CSV rows into smell instance records
//! - Decoding the smell type from an input file name
//! - Opening input sources
//! - Defining the per-commit output schema

pub mod record;
pub mod schema;
pub mod smell_type;
pub mod source;

// Re-export main types
pub use record::{parse_line, SmellInstanceRecord};
pub use schema::{CommitSmellRecord, DeveloperEntry, SmellReport};
pub use smell_type::{smell_type_from_file_name, SmellCode, SmellType};
pub use source::{FileSource, MemorySource, SmellSource};
