//! Process command implementation.
//!
//! The process command:
//! 1. Expands input paths into smell export files
//! 2. Registers the requested output writers
//! 3. Aggregates every export through the diff engine
//! 4. Prints a per smell type summary (optional)

use crate::aggregator::{smell_totals, SmellsProcessor};
use crate::output::{CommitsCsvWriter, DevelopersCsvWriter, JsonReportWriter};
use crate::parser::FileSource;
use crate::utils::config::{ProcessorConfig, UnreadableInputPolicy, INPUT_EXTENSION};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the process command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ProcessArgs {
    /// Smell export files, or directories holding them
    pub inputs: Vec<PathBuf>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for the per-commit CSV table (optional)
    pub output_commits_csv: Option<PathBuf>,

    /// Output path for the developer CSV table (optional)
    pub output_developers_csv: Option<PathBuf>,

    /// Behaviour on inputs that cannot be read
    pub on_unreadable: UnreadableInputPolicy,

    /// Print per smell type totals to stdout
    pub print_summary: bool,
}

/// Validate process arguments
///
/// **Public** - can be called before execute_process for early validation
pub fn validate_args(args: &ProcessArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one input file or directory is required");
    }

    let has_output = args.output_json.is_some()
        || args.output_commits_csv.is_some()
        || args.output_developers_csv.is_some();

    if !has_output && !args.print_summary {
        anyhow::bail!("Nothing to do: request an output file or --summary");
    }

    let outputs = [
        &args.output_json,
        &args.output_commits_csv,
        &args.output_developers_csv,
    ];
    let paths: Vec<&PathBuf> = outputs.iter().filter_map(|p| p.as_ref()).collect();
    for (i, path) in paths.iter().enumerate() {
        if paths[i + 1..].contains(path) {
            anyhow::bail!("Output path used more than once: {}", path.display());
        }
    }

    Ok(())
}

/// Expand input paths into file sources
///
/// **Public** - directories contribute their `.csv` files sorted by name;
/// files are kept as given, in order
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<FileSource>> {
    let mut sources = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut files = csv_files_in(path)
                .with_context(|| format!("Failed to list directory {}", path.display()))?;
            files.sort();
            debug!("{}: {} smell exports", path.display(), files.len());
            sources.extend(files.into_iter().map(FileSource::new));
        } else {
            sources.push(FileSource::new(path));
        }
    }

    Ok(sources)
}

fn csv_files_in(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    Ok(files)
}

/// Execute the process command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Directory listing failures
/// * Malformed rows, or unreadable inputs under the abort policy
/// * File write errors
pub fn execute_process(args: ProcessArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/3: Collecting smell exports...");
    let sources = collect_inputs(&args.inputs)?;
    info!("Found {} input files", sources.len());

    let config = ProcessorConfig::default().with_unreadable_input(args.on_unreadable);
    let mut processor = SmellsProcessor::new(config);

    if let Some(path) = &args.output_json {
        processor.add_output(Box::new(JsonReportWriter::new(path)));
    }
    if let Some(path) = &args.output_commits_csv {
        processor.add_output(Box::new(CommitsCsvWriter::new(path)));
    }
    if let Some(path) = &args.output_developers_csv {
        processor.add_output(Box::new(DevelopersCsvWriter::new(path)));
    }

    info!("Step 2/3: Aggregating smells and writing outputs...");
    let report = processor
        .process(&sources)
        .context("Failed to process smell exports")?;

    for skipped in &report.skipped {
        info!("Skipped {}: {}", skipped.name, skipped.reason);
    }

    info!("Step 3/3: Summarizing...");
    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("SMELL SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Inputs:     {} processed, {} skipped", report.processed.len(), report.skipped.len());
        println!("Commits:    {}", processor.commits().len());
        println!("Developers: {}", processor.registry().size());
        println!();
        for totals in smell_totals(processor.commits()) {
            println!("{}", totals.summary());
        }
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Processing completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_summary() -> ProcessArgs {
        ProcessArgs {
            inputs: vec![PathBuf::from("exports")],
            print_summary: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&args_with_summary()).is_ok());
    }

    #[test]
    fn test_validate_args_no_inputs() {
        let args = ProcessArgs {
            inputs: Vec::new(),
            ..args_with_summary()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_nothing_to_do() {
        let args = ProcessArgs {
            print_summary: false,
            ..args_with_summary()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_duplicate_output() {
        let args = ProcessArgs {
            output_json: Some(PathBuf::from("out.csv")),
            output_commits_csv: Some(PathBuf::from("out.csv")),
            ..args_with_summary()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_collect_inputs_sorts_directory_entries() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b_MIM.csv", "a_LIC.csv", "notes.txt"] {
            std::fs::write(dir.path().join(name), "header\n").unwrap();
        }

        let sources = collect_inputs(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<&str> = sources.iter().map(|s| s.path().file_name().unwrap().to_str().unwrap()).collect();

        assert_eq!(names, vec!["a_LIC.csv", "b_MIM.csv"]);
    }
}
