//! Input hygiene and paragraph segmentation.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

static LINE_ENDING_RE: LazyLock<Regex> =
    lazy_regex!(r"\r\n?", "line ending pattern regex should compile");

static TRAILING_SPACES_RE: LazyLock<Regex> =
    lazy_regex!(r"[ ]+\n", "trailing space pattern regex should compile");

static NEWLINE_RUN_RE: LazyLock<Regex> =
    lazy_regex!(r"\n+", "newline run pattern regex should compile");

/// Fold `\r\n` and lone `\r` into `\n`.
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> { LINE_ENDING_RE.replace_all(text, "\n") }

/// Turn tabs into spaces and drop spaces that end a line.
#[must_use]
pub fn tidy_whitespace(text: &str) -> String {
    let spaced = text.replace('\t', " ");
    TRAILING_SPACES_RE.replace_all(&spaced, "\n").into_owned()
}

/// Make every line break a paragraph boundary.
///
/// Each run of newlines becomes exactly one blank line, which is how the
/// browser extension prepares editor text before formatting it.
#[must_use]
pub fn expand_line_breaks(text: &str) -> Cow<'_, str> { NEWLINE_RUN_RE.replace_all(text, "\n\n") }

/// Split `text` into paragraph blocks of non-blank lines.
///
/// Any run of blank (whitespace-only) lines is a single boundary, so no block
/// is ever empty.
///
/// # Examples
///
/// ```
/// use blogwrap::paragraphs::split_paragraphs;
///
/// let blocks = split_paragraphs("가\n나\n\n \n\n다");
/// assert_eq!(blocks, vec![vec!["가", "나"], vec!["다"]]);
/// ```
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}
