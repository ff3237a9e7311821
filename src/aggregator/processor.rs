//! Aggregation of all smell inputs of a run.
//!
//! Inputs are handled one at a time: classified by file name, opened,
//! drained through a [`CommitDiffEngine`], released. One
//! [`DeveloperRegistry`] is shared by every input so developer indices
//! stay consistent across smell types.

use super::diff_engine::CommitDiffEngine;
use super::registry::DeveloperRegistry;
use crate::output::SmellWriter;
use crate::parser::{parse_line, smell_type_from_file_name, CommitSmellRecord, SmellSource, SmellType};
use crate::utils::config::{ProcessorConfig, UnreadableInputPolicy};
use crate::utils::error::{ParseError, ProcessError};
use log::{debug, info, trace, warn};
use std::io::BufRead;

/// An input that contributed records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedInput {
    pub name: String,
    pub smell_type: SmellType,
    pub records: usize,
}

/// An input that was left out of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedInput {
    pub name: String,
    pub reason: String,
}

/// What happened to each input of a run
#[derive(Debug, Clone, Default)]
pub struct ProcessingReport {
    pub processed: Vec<ProcessedInput>,
    pub skipped: Vec<SkippedInput>,
}

/// Failure while draining one input, before policy is applied
enum InputFailure {
    Unreadable(std::io::Error),
    Malformed { line: usize, source: ParseError },
}

/// Drives the diff engine over every input and feeds the writers
pub struct SmellsProcessor {
    config: ProcessorConfig,
    registry: DeveloperRegistry,
    commits: Vec<CommitSmellRecord>,
    outputs: Vec<Box<dyn SmellWriter>>,
}

impl SmellsProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            registry: DeveloperRegistry::new(),
            commits: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Register a writer; writers run in registration order
    pub fn add_output(&mut self, output: Box<dyn SmellWriter>) {
        self.outputs.push(output);
    }

    /// Records collected so far, in processing order
    pub fn commits(&self) -> &[CommitSmellRecord] {
        &self.commits
    }

    pub fn registry(&self) -> &DeveloperRegistry {
        &self.registry
    }

    /// Process every input in order, then hand the results to all writers
    ///
    /// **Public** - main entry point for aggregation
    ///
    /// # Errors
    /// * `ProcessError::MalformedRecord` - a row could not be parsed
    /// * `ProcessError::Unreadable` - an input failed and the policy is `Abort`
    /// * `ProcessError::Output` - a writer failed
    pub fn process<S: SmellSource>(&mut self, sources: &[S]) -> Result<ProcessingReport, ProcessError> {
        let mut report = ProcessingReport::default();

        for source in sources {
            let name = source.name().to_string();

            // If we can't parse the file name we consider it as non-smell file
            let smell_type = match smell_type_from_file_name(&name) {
                Ok(smell_type) => smell_type,
                Err(e) => {
                    warn!("Skipping {}: {}", name, e);
                    report.skipped.push(SkippedInput {
                        name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            info!("Processing smell file: {} ({})", name, smell_type);
            match self.process_source(source, smell_type)? {
                Some(records) => {
                    debug!("{}: {} commit records", name, records);
                    report.processed.push(ProcessedInput {
                        name,
                        smell_type,
                        records,
                    });
                }
                None => report.skipped.push(SkippedInput {
                    name,
                    reason: "unreadable input".to_string(),
                }),
            }
        }

        info!(
            "Aggregated {} commit records from {} inputs ({} skipped), {} developers",
            self.commits.len(),
            report.processed.len(),
            report.skipped.len(),
            self.registry.size()
        );

        self.write_outputs()?;
        Ok(report)
    }

    /// Run one classified input; `Ok(None)` means it was skipped by policy
    fn process_source<S: SmellSource>(
        &mut self,
        source: &S,
        smell_type: SmellType,
    ) -> Result<Option<usize>, ProcessError> {
        let name = source.name();
        let checkpoint = self.registry.clone();

        let outcome = source
            .open()
            .map_err(InputFailure::Unreadable)
            .and_then(|reader| drain(reader, smell_type, &mut self.registry));

        match outcome {
            Ok(records) => {
                let count = records.len();
                self.commits.extend(records);
                Ok(Some(count))
            }
            Err(InputFailure::Malformed { line, source }) => Err(ProcessError::MalformedRecord {
                input: name.to_string(),
                line,
                source,
            }),
            Err(InputFailure::Unreadable(e)) => match self.config.unreadable_input {
                UnreadableInputPolicy::Abort => Err(ProcessError::Unreadable {
                    input: name.to_string(),
                    source: e,
                }),
                UnreadableInputPolicy::Skip => {
                    warn!("Skipping unreadable input {}: {}", name, e);
                    self.registry = checkpoint;
                    Ok(None)
                }
            },
        }
    }

    fn write_outputs(&mut self) -> Result<(), ProcessError> {
        for output in self.outputs.iter_mut() {
            debug!("Running output: {}", output.name());
            output
                .write(&self.commits, &self.registry)
                .map_err(|source| ProcessError::Output {
                    writer: output.name().to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}

impl Default for SmellsProcessor {
    fn default() -> Self {
        Self::new(ProcessorConfig::default())
    }
}

/// Read every row of one input through the diff engine.
/// The reader is consumed and dropped here, whatever the outcome.
fn drain(
    reader: Box<dyn BufRead + '_>,
    smell_type: SmellType,
    registry: &mut DeveloperRegistry,
) -> Result<Vec<CommitSmellRecord>, InputFailure> {
    let mut engine = CommitDiffEngine::new(smell_type, registry);
    // Split on raw bytes: a row that is not UTF-8 is malformed, not unreadable
    let mut lines = reader.split(b'\n');

    match lines.next() {
        Some(header) => {
            let header = header.map_err(InputFailure::Unreadable)?;
            trace!("Wiping out header line: {}", String::from_utf8_lossy(&header));
        }
        None => return Ok(engine.finish()),
    }

    // Line numbers are 1-based and count the header
    for (offset, bytes) in lines.enumerate() {
        let bytes = bytes.map_err(InputFailure::Unreadable)?;
        let line_number = offset + 2;
        let line = std::str::from_utf8(&bytes).map_err(|_| InputFailure::Malformed {
            line: line_number,
            source: ParseError::InvalidEncoding,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        trace!("Parsing line: {}", line);
        let record = parse_line(line).map_err(|source| InputFailure::Malformed {
            line: line_number,
            source,
        })?;
        engine.push(record);
    }

    Ok(engine.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{MemorySource, SmellCode};

    /// Raw byte content, for rows that are not valid UTF-8
    struct BytesSource(&'static str, Vec<u8>);

    impl SmellSource for BytesSource {
        fn name(&self) -> &str {
            self.0
        }

        fn open(&self) -> std::io::Result<Box<dyn BufRead + '_>> {
            Ok(Box::new(std::io::Cursor::new(self.1.as_slice())))
        }
    }

    const HEADER: &str = "commit_number,commit_id,status,developer,instance\n";

    fn source(name: &str, rows: &str) -> MemorySource {
        MemorySource::new(name, format!("{}{}", HEADER, rows))
    }

    #[test]
    fn test_process_single_input() {
        let mut processor = SmellsProcessor::default();
        let report = processor
            .process(&[source(
                "2017_LIC.csv",
                "1,s1,A,alice,A\n1,s1,A,alice,B\n2,s2,M,bob,A\n",
            )])
            .unwrap();

        assert_eq!(report.processed.len(), 1);
        assert_eq!(report.processed[0].smell_type, SmellType::Smell(SmellCode::Lic));
        assert_eq!(report.processed[0].records, 2);

        let commits = processor.commits();
        assert_eq!((commits[0].introduced, commits[0].refactored), (2, 0));
        assert_eq!((commits[1].introduced, commits[1].refactored), (0, 1));
    }

    #[test]
    fn test_header_only_input_yields_no_records() {
        let mut processor = SmellsProcessor::default();
        let report = processor.process(&[source("x_MIM.csv", "")]).unwrap();

        assert_eq!(report.processed[0].records, 0);
        assert!(processor.commits().is_empty());
    }

    #[test]
    fn test_malformed_row_reports_input_and_line() {
        let mut processor = SmellsProcessor::default();
        let err = processor
            .process(&[source("x_MIM.csv", "1,s1,A,alice,A\nnot-a-number,s2,A,bob,B\n")])
            .unwrap_err();

        match err {
            ProcessError::MalformedRecord { input, line, source } => {
                assert_eq!(input, "x_MIM.csv");
                assert_eq!(line, 3);
                assert_eq!(source, ParseError::InvalidCommitNumber("not-a-number".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_utf8_row_is_malformed_under_both_policies() {
        let content = b"h\n1,s1,A,alice,A\n2,s2,A,bob,\xff\xfe\n3,s3,A,bob,B\n".to_vec();

        for policy in [UnreadableInputPolicy::Abort, UnreadableInputPolicy::Skip] {
            let config = ProcessorConfig::default().with_unreadable_input(policy);
            let mut processor = SmellsProcessor::new(config);
            let err = processor
                .process(&[BytesSource("x_LIC.csv", content.clone())])
                .unwrap_err();

            match err {
                ProcessError::MalformedRecord { input, line, source } => {
                    assert_eq!(input, "x_LIC.csv");
                    assert_eq!(line, 3);
                    assert_eq!(source, ParseError::InvalidEncoding);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let mut processor = SmellsProcessor::default();
        processor
            .process(&[source("x_CC.csv", "1,s1,A,alice,A\n\n   \n2,s2,A,alice,A\n")])
            .unwrap();

        assert_eq!(processor.commits().len(), 2);
    }
}
