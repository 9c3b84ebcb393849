//! The formatting pipeline.
//!
//! Stages run strictly forward: line endings are folded, newlines inside
//! quotations become spaces, the text is cut into paragraph blocks, each
//! block's source lines are repaired and wrapped, and the blocks are joined
//! with the configured number of blank lines.

use std::iter;

use crate::{
    options::{FormatOptions, Layout},
    paragraphs::{normalize_line_endings, split_paragraphs, tidy_whitespace},
    quotes::replace_newlines_inside_quotes,
    repair::merge_awkward_breaks,
    wrap::wrap_line,
};

/// Format `raw` text.
///
/// `options` is either a bare number, the legacy paragraph-gap count, or a
/// [`FormatOptions`] value. Blank input yields an empty string.
///
/// # Examples
///
/// ```
/// use blogwrap::format;
///
/// let out = format("한 문장.\n\n\n\n다음 문장.", 2);
/// assert_eq!(out, "한 문장.\n\n\n다음 문장.");
/// ```
#[must_use]
pub fn format(raw: &str, options: impl Into<FormatOptions>) -> String {
    format_with(raw, &options.into().resolve())
}

/// Format `raw` text with an already resolved [`Layout`].
#[must_use]
pub fn format_with(raw: &str, layout: &Layout) -> String {
    let unified = normalize_line_endings(raw);
    let unquoted = replace_newlines_inside_quotes(&unified);
    let trimmed = unquoted.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let text = tidy_whitespace(trimmed);
    let blocks = split_paragraphs(&text);
    tracing::debug!(
        paragraphs = blocks.len(),
        wrap_width = layout.wrap_width,
        paragraph_gap = layout.paragraph_gap,
        "formatting text"
    );

    let mut out: Vec<String> = Vec::new();
    for (idx, block) in blocks.iter().enumerate() {
        if idx > 0 {
            out.extend(iter::repeat_n(String::new(), layout.paragraph_gap));
        }
        for line in merge_awkward_breaks(block) {
            out.extend(
                wrap_line(&line, layout)
                    .into_iter()
                    .filter(|l| !l.is_empty()),
            );
        }
    }

    out.join("\n")
}
