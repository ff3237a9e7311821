use smell_churn::aggregator::{compare_commits, diff_commits, DeveloperRegistry, InstanceMultiset, SmellDiff};
use smell_churn::parser::{SmellCode, SmellInstanceRecord, SmellType};

fn multiset(names: &[&str]) -> InstanceMultiset {
    names.iter().copied().collect()
}

fn row(commit: u64, developer: &str, instance: &str) -> SmellInstanceRecord {
    SmellInstanceRecord {
        commit_number: commit,
        commit_id: format!("{:040x}", commit),
        status: "M".to_string(),
        developer: developer.to_string(),
        instance: instance.to_string(),
    }
}

#[test]
fn test_diff_rule_counts_repeated_names() {
    let diff = compare_commits(&multiset(&["A", "A", "B"]), &multiset(&["A", "B", "B", "C"]));
    assert_eq!(diff, SmellDiff { introduced: 2, refactored: 1 });
}

#[test]
fn test_diff_rule_no_op_transition() {
    let set = multiset(&["A", "B", "C"]);
    assert_eq!(compare_commits(&set, &set), SmellDiff { introduced: 0, refactored: 0 });
}

#[test]
fn test_diff_rule_full_disappearance() {
    let diff = compare_commits(&multiset(&["X", "Y"]), &InstanceMultiset::new());
    assert_eq!(diff, SmellDiff { introduced: 0, refactored: 2 });
}

#[test]
fn test_many_rows_with_one_commit_number_aggregate_once() {
    let mut registry = DeveloperRegistry::new();
    let rows: Vec<SmellInstanceRecord> = (0..10).map(|i| row(7, "alice", &format!("C{}", i))).collect();

    let records = diff_commits(SmellType::Smell(SmellCode::Lm), rows, &mut registry);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].introduced, 10);
}

#[test]
fn test_each_commit_carries_its_opening_row_metadata() {
    let mut registry = DeveloperRegistry::new();
    let records = diff_commits(
        SmellType::Smell(SmellCode::Sak),
        vec![
            row(1, "alice", "A"),
            row(1, "alice", "B"),
            row(2, "bob", "A"),
            row(2, "bob", "B"),
            row(2, "bob", "C"),
            row(5, "carol", "C"),
        ],
        &mut registry,
    );

    let summary: Vec<(u64, &str, u64, u64)> = records
        .iter()
        .map(|r| (r.commit_number, r.developer.as_str(), r.introduced, r.refactored))
        .collect();

    assert_eq!(
        summary,
        vec![(1, "alice", 2, 0), (2, "bob", 1, 0), (5, "carol", 0, 2)]
    );
    assert_eq!(records[1].commit_id, format!("{:040x}", 2));
}

#[test]
fn test_registry_indices_dense_across_runs() {
    let mut registry = DeveloperRegistry::new();
    diff_commits(
        SmellType::Smell(SmellCode::Cc),
        vec![row(1, "a", "X"), row(2, "b", "X"), row(3, "a", "X")],
        &mut registry,
    );
    diff_commits(
        SmellType::Smell(SmellCode::Blob),
        vec![row(1, "c", "Y"), row(2, "b", "Y")],
        &mut registry,
    );

    assert_eq!(registry.size(), 3);
    let indices: Vec<usize> = ["a", "b", "c"]
        .iter()
        .map(|dev| registry.index_of(dev).unwrap())
        .collect();
    assert_eq!(indices, vec![1, 2, 3]);
}
