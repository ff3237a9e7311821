//! Commit-boundary diffing of smell instances.
//!
//! Rows of one smell type arrive grouped by commit, in analysis order.
//! Every commit's instance names are collected into a multiset and compared
//! with the previous commit's multiset:
//!
//! - `introduced = |current| - |shared|`
//! - `refactored = |previous| - |shared|`
//!
//! where `shared` keeps, per name, the minimum of both counts. A name the
//! tool reports twice in one commit therefore counts twice.

use super::registry::DeveloperRegistry;
use crate::parser::{CommitSmellRecord, SmellInstanceRecord, SmellType};
use log::{debug, trace};
use std::collections::HashMap;

/// Instance names of one commit, with repetition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceMultiset {
    counts: HashMap<String, u64>,
    len: u64,
}

impl InstanceMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, instance: impl Into<String>) {
        *self.counts.entry(instance.into()).or_insert(0) += 1;
        self.len += 1;
    }

    /// Total number of occurrences, repeats included
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the minimum-count intersection with `other`
    pub fn shared_with(&self, other: &InstanceMultiset) -> u64 {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .filter_map(|(name, count)| large.counts.get(name).map(|c| (*count).min(*c)))
            .sum()
    }
}

impl<S: Into<String>> FromIterator<S> for InstanceMultiset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for instance in iter {
            set.insert(instance);
        }
        set
    }
}

/// Outcome of comparing two consecutive commits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmellDiff {
    pub introduced: u64,
    pub refactored: u64,
}

/// Compare a commit's instances against its predecessor's
///
/// **Public** - the diff rule, usable on its own
pub fn compare_commits(previous: &InstanceMultiset, current: &InstanceMultiset) -> SmellDiff {
    let shared = previous.shared_with(current);
    SmellDiff {
        introduced: current.len() - shared,
        refactored: previous.len() - shared,
    }
}

/// Metadata of the row that opened the commit being accumulated
#[derive(Debug)]
struct OpenCommit {
    commit_number: u64,
    commit_id: String,
    status: String,
    developer: String,
}

/// Streaming diff over the rows of a single smell type
///
/// Feed rows with [`push`](Self::push), then call [`finish`](Self::finish)
/// to flush the last commit and collect one record per commit seen.
pub struct CommitDiffEngine<'r> {
    smell_type: SmellType,
    registry: &'r mut DeveloperRegistry,
    previous: InstanceMultiset,
    current: InstanceMultiset,
    open: Option<OpenCommit>,
    emitted: Vec<CommitSmellRecord>,
}

impl<'r> CommitDiffEngine<'r> {
    pub fn new(smell_type: SmellType, registry: &'r mut DeveloperRegistry) -> Self {
        Self {
            smell_type,
            registry,
            previous: InstanceMultiset::new(),
            current: InstanceMultiset::new(),
            open: None,
            emitted: Vec::new(),
        }
    }

    /// Fold one row into the scan
    pub fn push(&mut self, record: SmellInstanceRecord) {
        let same_commit = self
            .open
            .as_ref()
            .is_some_and(|open| open.commit_number == record.commit_number);

        if same_commit {
            self.accumulate(record.instance);
            return;
        }

        trace!(
            "{}: commit boundary at commit {} ({})",
            self.smell_type,
            record.commit_number,
            record.commit_id
        );
        self.registry.register(&record.developer);
        self.close_open_commit();

        // Slide the window; the boundary row seeds the new commit
        self.previous = std::mem::take(&mut self.current);
        self.accumulate(record.instance);
        self.open = Some(OpenCommit {
            commit_number: record.commit_number,
            commit_id: record.commit_id,
            status: record.status,
            developer: record.developer,
        });
    }

    /// Flush the commit still being accumulated and return every record
    pub fn finish(mut self) -> Vec<CommitSmellRecord> {
        self.close_open_commit();
        debug!(
            "{}: {} commit records emitted",
            self.smell_type,
            self.emitted.len()
        );
        self.emitted
    }

    /// An empty name marks a commit without instances (`NOSMELL` rows)
    fn accumulate(&mut self, instance: String) {
        if !instance.is_empty() {
            self.current.insert(instance);
        }
    }

    fn close_open_commit(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        let diff = compare_commits(&self.previous, &self.current);
        self.emitted.push(CommitSmellRecord {
            smell_type: self.smell_type,
            commit_number: open.commit_number,
            commit_id: open.commit_id,
            status: open.status,
            developer: open.developer,
            introduced: diff.introduced,
            refactored: diff.refactored,
        });
    }
}

/// Run the engine over an already parsed sequence of rows
///
/// **Public** - convenience wrapper around [`CommitDiffEngine`]
pub fn diff_commits<I>(
    smell_type: SmellType,
    records: I,
    registry: &mut DeveloperRegistry,
) -> Vec<CommitSmellRecord>
where
    I: IntoIterator<Item = SmellInstanceRecord>,
{
    let mut engine = CommitDiffEngine::new(smell_type, registry);
    for record in records {
        engine.push(record);
    }
    engine.finish()
}
