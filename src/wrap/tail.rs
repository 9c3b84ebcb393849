//! Post-wrap repair of the final generated line.

use crate::{
    options::Layout,
    particles::{starts_with_particle, strip_leading_quotes},
};

const SHORT_TAIL_RATIO: f64 = 0.4;

/// Lines shorter than this many units are folded into the line above.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "wrap widths are small positive integers"
)]
fn short_tail_limit(wrap_width: usize) -> usize {
    (wrap_width as f64 * SHORT_TAIL_RATIO).floor() as usize
}

/// Fold the last wrapped line into the one before it when it is too short or
/// starts with a particle.
///
/// Only the final pair is inspected, once; the merged line is not checked
/// again. Leading quotation marks and whitespace of the folded line are
/// dropped.
pub fn merge_dangling_tail(lines: &mut Vec<String>, layout: &Layout) {
    if lines.len() < 2 {
        return;
    }
    let Some(last) = lines.last() else {
        return;
    };

    let len = layout.segmentation.count(last);
    let too_short = len > 0 && len < short_tail_limit(layout.wrap_width);
    if !too_short && !starts_with_particle(last) {
        return;
    }

    if let Some(tail) = lines.pop()
        && let Some(prev) = lines.last_mut()
    {
        *prev = format!("{prev} {}", strip_leading_quotes(&tail))
            .trim()
            .to_string();
    }
}
