//! Aggregation of smell exports into per-commit records.
//!
//! This module transforms parsed smell rows into:
//! - Introduced/refactored counts per commit (diff engine)
//! - A run-wide developer index table (registry)
//! - Per smell type totals (metrics)

pub mod diff_engine;
pub mod metrics;
pub mod processor;
pub mod registry;

// Re-export main types and functions
pub use diff_engine::{compare_commits, diff_commits, CommitDiffEngine, InstanceMultiset, SmellDiff};
pub use metrics::{smell_totals, SmellTotals};
pub use processor::{ProcessedInput, ProcessingReport, SkippedInput, SmellsProcessor};
pub use registry::DeveloperRegistry;
