//! Width-bounded wrapping of merged source lines.
//!
//! A line is split into sentences first, so a wrap never straddles a
//! sentence boundary. Each sentence longer than the wrap width is cut at the
//! best-scoring break point near the target width (see [`cut`]), then a short
//! or particle-led final line is folded back (see [`merge_dangling_tail`]).
//! All lengths are counted in the units chosen by
//! [`Segmentation`](crate::graphemes::Segmentation).

use std::sync::LazyLock;

use regex::Regex;

use crate::{options::Layout, quotes::quote_spans};

mod cut;
mod sentences;
mod tail;

pub use cut::{LOOKAHEAD, break_score, find_cut};
pub use sentences::split_sentences;
pub use tail::merge_dangling_tail;

static SPACE_RUN_RE: LazyLock<Regex> =
    lazy_regex!(r" {2,}", "space run pattern regex should compile");

/// Wrap one merged source line into output lines.
///
/// Runs of spaces collapse to one and the line is trimmed; a line that is
/// empty afterwards produces no output.
///
/// # Examples
///
/// ```
/// use blogwrap::{Layout, wrap::wrap_line};
///
/// let lines = wrap_line("첫 문장입니다.  둘째 문장입니다.", &Layout::default());
/// assert_eq!(lines, vec!["첫 문장입니다.", "둘째 문장입니다."]);
/// ```
#[must_use]
pub fn wrap_line(line: &str, layout: &Layout) -> Vec<String> {
    let collapsed = SPACE_RUN_RE.replace_all(line, " ");
    let text = collapsed.trim();
    if text.is_empty() {
        return Vec::new();
    }

    split_sentences(text)
        .into_iter()
        .flat_map(|chunk| wrap_chunk(chunk, layout))
        .collect()
}

fn push_trimmed(lines: &mut Vec<String>, units: &[&str]) {
    let line = units.concat();
    let trimmed = line.trim_end();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
}

/// Wrap a single sentence chunk.
fn wrap_chunk(chunk: &str, layout: &Layout) -> Vec<String> {
    let units = layout.segmentation.split(chunk);
    if units.len() <= layout.wrap_width {
        return vec![chunk.trim_end().to_string()];
    }

    let spans = quote_spans(&units);
    let mut lines = Vec::new();
    let mut start = 0;

    while start < units.len() {
        if units.len() - start <= layout.wrap_width {
            push_trimmed(&mut lines, &units[start..]);
            break;
        }

        let mut cut = find_cut(&units, &spans, start, layout);
        push_trimmed(&mut lines, &units[start..cut]);
        while units.get(cut) == Some(&" ") {
            cut += 1;
        }
        start = cut;
    }

    merge_dangling_tail(&mut lines, layout);
    lines
}
