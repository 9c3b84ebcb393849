//! Pre-wrap repair of awkward source line breaks.
//!
//! Runs once per paragraph block over the lines as the user typed them. The
//! wrapper applies its own tail repair to the lines it generates; see
//! [`crate::wrap::merge_dangling_tail`].

use crate::{
    particles::{starts_with_particle, strip_leading_quotes},
    quotes::newline_inside_quotes,
};

fn join_lines(prev: &str, next: &str) -> String { format!("{prev} {next}").trim().to_string() }

/// Merge source lines whose break falls inside a quotation or leaves a
/// particle at the start of a line.
///
/// A break inside a quotation is always merged. Otherwise a line whose first
/// token (after leading quotation marks) is a particle is appended to the
/// previous line without those marks. Every other line is kept as is.
///
/// # Examples
///
/// ```
/// use blogwrap::repair::merge_awkward_breaks;
///
/// let merged = merge_awkward_breaks(&["그리고 사과", "는 맛있었다"]);
/// assert_eq!(merged, vec!["그리고 사과 는 맛있었다"]);
/// ```
#[must_use]
pub fn merge_awkward_breaks<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines {
        let line = line.as_ref();
        let Some(prev) = merged.last_mut() else {
            merged.push(line.to_string());
            continue;
        };

        let combined = format!("{prev}\n{line}");
        if newline_inside_quotes(&combined, prev.len()) {
            *prev = join_lines(prev, line.trim_start());
            continue;
        }

        if starts_with_particle(line) {
            *prev = join_lines(prev, strip_leading_quotes(line));
        } else {
            merged.push(line.to_string());
        }
    }

    merged
}
