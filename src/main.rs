//! Smell Churn CLI
//!
//! Turns per smell type CSV exports into per-commit introduced/refactored
//! counts and a developer index table.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use smell_churn::commands::{display_smells, display_version, execute_process, validate_args, ProcessArgs};
use smell_churn::utils::config::UnreadableInputPolicy;

/// Smell Churn - code smell introduction and refactoring per commit
#[derive(Parser, Debug)]
#[command(name = "smell-churn")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate smell exports into per-commit records
    Process {
        /// Smell export files or directories of exports
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Output path for the per-commit CSV table
        #[arg(long)]
        commits_csv: Option<PathBuf>,

        /// Output path for the developer CSV table
        #[arg(long)]
        developers_csv: Option<PathBuf>,

        /// What to do with inputs that cannot be read
        #[arg(long, value_enum, default_value_t = UnreadableInputPolicy::Abort)]
        on_unreadable: UnreadableInputPolicy,

        /// Print per smell type totals to stdout
        #[arg(long)]
        summary: bool,
    },

    /// List recognized smell codes
    Smells,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Process {
            inputs,
            json,
            commits_csv,
            developers_csv,
            on_unreadable,
            summary,
        } => {
            let args = ProcessArgs {
                inputs,
                output_json: json,
                output_commits_csv: commits_csv,
                output_developers_csv: developers_csv,
                on_unreadable,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_process(args)?;
        }

        Commands::Smells => display_smells(),

        Commands::Version => display_version(),
    }

    Ok(())
}
