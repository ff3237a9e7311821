//! Per smell type totals over the aggregated commit records.
//!
//! Used for the run summary printed by the CLI.

use crate::parser::{CommitSmellRecord, SmellType};
use log::debug;

/// Totals for one smell type
///
/// **Public** - returned from smell_totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmellTotals {
    pub smell_type: SmellType,

    /// Number of commit records
    pub commits: usize,

    /// Sum of introduced instances
    pub introduced: u64,

    /// Sum of refactored instances
    pub refactored: u64,
}

impl SmellTotals {
    fn new(smell_type: SmellType) -> Self {
        Self {
            smell_type,
            commits: 0,
            introduced: 0,
            refactored: 0,
        }
    }

    /// Instances still present after the last commit, assuming the first
    /// commit started from zero
    pub fn net_change(&self) -> i64 {
        self.introduced as i64 - self.refactored as i64
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and the CLI summary
    pub fn summary(&self) -> String {
        format!(
            "{:<8} Commits: {:>6} | Introduced: {:>6} | Refactored: {:>6} | Net: {:>+6}",
            self.smell_type.to_string(),
            self.commits,
            self.introduced,
            self.refactored,
            self.net_change()
        )
    }
}

/// Compute totals per smell type, in order of first appearance
///
/// **Public** - main entry point for run statistics
pub fn smell_totals(commits: &[CommitSmellRecord]) -> Vec<SmellTotals> {
    let mut totals: Vec<SmellTotals> = Vec::new();

    for commit in commits {
        let position = match totals.iter().position(|t| t.smell_type == commit.smell_type) {
            Some(position) => position,
            None => {
                totals.push(SmellTotals::new(commit.smell_type));
                totals.len() - 1
            }
        };
        let entry = &mut totals[position];
        entry.commits += 1;
        entry.introduced += commit.introduced;
        entry.refactored += commit.refactored;
    }

    debug!("Computed totals for {} smell types", totals.len());
    totals
}
