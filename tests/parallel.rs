//! Tests for parallel CLI processing of multiple files.

use std::fs;

use blogwrap::format;
use tempfile::tempdir;

mod prelude;
use prelude::*;

#[fixture]
fn post() -> String {
    "오늘은 날씨가 정말 좋아서 친구들과 함께 공원에 산책을 다녀왔습니다\n\n\n끝.".to_string()
}

#[rstest]
fn test_cli_parallel_multiple_files(post: String) {
    let dir = tempdir().expect("failed to create temporary directory");
    let mut files = Vec::new();
    let mut expected = String::new();
    for i in 0..4 {
        let path = dir.path().join(format!("post{i}.txt"));
        let text = format!("{i}번째 글입니다.\n\n{post}");
        fs::write(&path, &text).expect("failed to write file");
        expected.push_str(&format(text.as_str(), 2));
        expected.push('\n');
        files.push(path);
    }

    let mut cmd = Command::cargo_bin("blogwrap").expect("failed to create command");
    for path in &files {
        cmd.arg(path);
    }
    let output = cmd.output().expect("failed to run command");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
}

#[rstest]
fn test_cli_parallel_missing_file_error(post: String) {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = dir.path().join("good.txt");
    fs::write(&good, &post).expect("failed to write file");
    let expected = format(post.as_str(), 2) + "\n";
    let missing = dir.path().join("missing.txt");

    let output = Command::cargo_bin("blogwrap")
        .expect("failed to create command")
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[rstest]
fn test_cli_parallel_missing_file_in_place(post: String) {
    let dir = tempdir().expect("failed to create temporary directory");
    let good = dir.path().join("good.txt");
    fs::write(&good, &post).expect("failed to write file");
    let missing = dir.path().join("missing.txt");

    let output = Command::cargo_bin("blogwrap")
        .expect("failed to create command")
        .arg("--in-place")
        .arg(&good)
        .arg(&missing)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
    let rewritten = fs::read_to_string(&good).expect("failed to read file");
    assert_eq!(rewritten, format(post.as_str(), 2) + "\n");
}

#[test]
fn test_cli_in_place_reports_every_failure() {
    let dir = tempdir().expect("failed to create temporary directory");
    let first = dir.path().join("first-missing.txt");
    let second = dir.path().join("second-missing.txt");

    let output = Command::cargo_bin("blogwrap")
        .expect("failed to create command")
        .arg("--in-place")
        .arg(&first)
        .arg(&second)
        .output()
        .expect("failed to run command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("first-missing.txt"));
    assert!(stderr.contains("second-missing.txt"));
}
