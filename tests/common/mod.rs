//! Utility helpers shared across integration tests.
#![allow(dead_code)]

use assert_cmd::{Command, assert::Assert};
use unicode_segmentation::UnicodeSegmentation;

/// Run the binary with `args`, feeding `input` on standard input.
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> Assert {
    Command::cargo_bin("blogwrap")
        .expect("failed to create cargo command for blogwrap")
        .args(args)
        .write_stdin(input)
        .assert()
}

/// Number of grapheme clusters in `line`.
pub fn grapheme_len(line: &str) -> usize { line.graphemes(true).count() }

/// Group non-blank lines of `output` into paragraphs.
pub fn paragraphs_of(output: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();
    for line in output.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

/// Lengths of the blank-line runs that separate paragraphs in `output`.
pub fn gaps_of(output: &str) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut run = 0;
    let mut seen_text = false;
    for line in output.split('\n') {
        if line.is_empty() {
            run += 1;
            continue;
        }
        if seen_text && run > 0 {
            gaps.push(run);
        }
        run = 0;
        seen_text = true;
    }
    gaps
}
