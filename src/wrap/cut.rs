//! Break-point scoring.
//!
//! Candidates are searched in a window that starts `min_break` units into the
//! remaining text and reaches [`LOOKAHEAD`] units past the target width. A
//! candidate's score is its base score minus its distance from the target,
//! so a strong break slightly past the target can beat a weak one right on
//! it. A candidate whose distance exceeds its base score is never chosen.

use crate::{
    options::Layout,
    quotes::{QuoteSpan, inside_any},
};

/// Units searched beyond the target width.
pub const LOOKAHEAD: usize = 6;

const SPACE_SCORE: usize = 10;
const SOFT_PUNCT_SCORE: usize = 12;
const HARD_PUNCT_SCORE: usize = 15;

/// Base score for breaking after `unit`, or `None` when `unit` is not a
/// break candidate.
#[must_use]
pub fn break_score(unit: &str) -> Option<usize> {
    match unit {
        " " => Some(SPACE_SCORE),
        "," | "·" | ":" | ";" => Some(SOFT_PUNCT_SCORE),
        "!" | "?" | "…" | ")" | "]" | "}" | "”" | "’" => Some(HARD_PUNCT_SCORE),
        _ => None,
    }
}

fn has_digit(unit: &str) -> bool { unit.chars().any(|c| c.is_ascii_digit()) }

/// Whether the colon at `idx` sits between digits, as in `1:1` or `10:30`.
fn is_numeric_colon(units: &[&str], idx: usize) -> bool {
    units[idx] == ":"
        && idx > 0
        && units.get(idx + 1).is_some_and(|next| has_digit(next))
        && has_digit(units[idx - 1])
}

/// Choose where to end the line that begins at `start`.
///
/// Returns the exclusive end index: one past the winning candidate, or
/// `start + wrap_width` (capped at the text length) when no candidate
/// qualifies. Ties keep the earliest candidate.
#[must_use]
pub fn find_cut(units: &[&str], spans: &[QuoteSpan], start: usize, layout: &Layout) -> usize {
    let ideal_end = start.saturating_add(layout.wrap_width);
    let window_end = ideal_end.saturating_add(LOOKAHEAD).min(units.len());
    let mut best: Option<(usize, usize)> = None;

    for idx in start.saturating_add(layout.min_break)..window_end {
        if inside_any(spans, idx) || is_numeric_colon(units, idx) {
            continue;
        }
        let Some(base) = break_score(units[idx]) else {
            continue;
        };
        let Some(score) = base.checked_sub(idx.abs_diff(ideal_end)) else {
            continue;
        };
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((idx, score));
        }
    }

    if let Some((idx, score)) = best {
        tracing::trace!(start, idx, score, "break at candidate");
        idx + 1
    } else {
        let cut = ideal_end.min(units.len());
        tracing::trace!(start, cut, "no break candidate; forcing cut");
        cut
    }
}
