//! Smell Churn
//!
//! Per-commit introduced/refactored code smell counts from the per smell
//! type CSV exports of a static-analysis tool.
//!
//! Each export lists, commit by commit, the smell instances detected in
//! that commit. Consecutive commits are diffed as multisets of instance
//! names, and every developer gets a stable 1-based index shared by all
//! smell types of a run.
//!
//! ## Getting Started
//!
//! ```bash
//! smell-churn process exports/ --json report.json --summary
//! ```
//!
//! Or from code:
//!
//! ```ignore
//! use smell_churn::aggregator::SmellsProcessor;
//! use smell_churn::output::JsonReportWriter;
//! use smell_churn::parser::FileSource;
//!
//! let mut processor = SmellsProcessor::default();
//! processor.add_output(Box::new(JsonReportWriter::new("report.json")));
//! processor.process(&[FileSource::new("2017_7_18_11_25_HMU.csv")])?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
