use smell_churn::commands::{execute_process, validate_args, ProcessArgs};
use smell_churn::output::read_report;
use smell_churn::utils::config::UnreadableInputPolicy;
use std::path::PathBuf;

const HEADER: &str = "commit_number,commit_id,status,developer,instance\n";

fn write_export(dir: &std::path::Path, name: &str, rows: &str) {
    std::fs::write(dir.join(name), format!("{}{}", HEADER, rows)).unwrap();
}

#[test]
fn test_validate_args_requires_inputs() {
    let args = ProcessArgs {
        print_summary: true,
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_output_only() {
    let args = ProcessArgs {
        inputs: vec![PathBuf::from("exports")],
        output_developers_csv: Some(PathBuf::from("devs.csv")),
        ..Default::default()
    };
    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_execute_process_on_directory() {
    let exports = tempfile::tempdir().unwrap();
    write_export(exports.path(), "2017_7_18_LIC.csv", "1,s1,A,alice,A\n2,s2,M,bob,B\n");
    write_export(exports.path(), "2017_7_18_MIM.csv", "1,s1,A,bob,m\n");
    write_export(exports.path(), "2017_7_18_UNKNOWN.csv", "1,s1,A,eve,x\n");
    std::fs::write(exports.path().join("README.md"), "not an export").unwrap();

    let out = tempfile::tempdir().unwrap();
    let json = out.path().join("report.json");
    let commits_csv = out.path().join("commits.csv");
    let developers_csv = out.path().join("developers.csv");

    let args = ProcessArgs {
        inputs: vec![exports.path().to_path_buf()],
        output_json: Some(json.clone()),
        output_commits_csv: Some(commits_csv.clone()),
        output_developers_csv: Some(developers_csv.clone()),
        on_unreadable: UnreadableInputPolicy::Abort,
        print_summary: true,
    };

    execute_process(args).unwrap();

    let report = read_report(&json).unwrap();
    assert_eq!(report.commits.len(), 3);
    assert_eq!(report.developers.len(), 2);
    assert_eq!(std::fs::read_to_string(&commits_csv).unwrap().lines().count(), 4);
    assert_eq!(
        std::fs::read_to_string(&developers_csv).unwrap(),
        "index,developer\n1,alice\n2,bob\n"
    );
}

#[test]
fn test_execute_process_missing_file_fails() {
    let out = tempfile::tempdir().unwrap();
    let args = ProcessArgs {
        inputs: vec![out.path().join("absent_LIC.csv")],
        output_json: Some(out.path().join("report.json")),
        ..Default::default()
    };

    assert!(execute_process(args).is_err());
    assert!(!out.path().join("report.json").exists());
}
