//! Splitting text into the units used for width measurement and cut
//! placement.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Unit in which widths and cut positions are counted.
///
/// [`Segmentation::Graphemes`] counts user-perceived characters and never
/// separates a base letter from its combining marks or splits an emoji
/// sequence. [`Segmentation::CodePoints`] counts Unicode scalar values; it
/// reproduces environments without a grapheme segmenter and measures
/// combining sequences and emoji as several units, so such text wraps earlier
/// and may be cut inside a cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Segmentation {
    #[default]
    Graphemes,
    CodePoints,
}

impl Segmentation {
    /// Split `text` into units borrowed from the input.
    #[must_use]
    pub fn split(self, text: &str) -> Vec<&str> {
        match self {
            Self::Graphemes => text.graphemes(true).collect(),
            Self::CodePoints => text
                .char_indices()
                .map(|(idx, ch)| &text[idx..idx + ch.len_utf8()])
                .collect(),
        }
    }

    /// Number of units in `text`.
    #[must_use]
    pub fn count(self, text: &str) -> usize {
        match self {
            Self::Graphemes => text.graphemes(true).count(),
            Self::CodePoints => text.chars().count(),
        }
    }
}
