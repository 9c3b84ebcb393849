//! Formatting options and their resolution into a concrete [`Layout`].
//!
//! Callers describe the layout either with a bare number, the legacy
//! paragraph-gap count, or with a structured [`FormatOptions`] value. Both
//! shapes pass through [`FormatOptions::resolve`] exactly once, so the rest of
//! the crate only ever sees a [`Layout`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graphemes::Segmentation;

/// Target grapheme count per output line when none is given.
pub const DEFAULT_WRAP_WIDTH: usize = 25;

/// Blank lines between paragraphs when none is given.
pub const DEFAULT_PARAGRAPH_GAP: usize = 2;

const MIN_PARAGRAPH_GAP: f64 = 1.0;
const MAX_PARAGRAPH_GAP: f64 = 3.0;

/// Fraction of the wrap width before which no cut is considered.
const MIN_BREAK_RATIO: f64 = 0.7;

/// Caller-facing options. Every field is optional and falls back to a default.
///
/// The serde representation uses camelCase keys so that
/// `{"wrapWidth": 30, "paragraphGap": 1}` deserializes directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormatOptions {
    pub wrap_width: Option<usize>,
    pub paragraph_gap: Option<f64>,
    pub min_break: Option<usize>,
    pub segmentation: Segmentation,
}

/// Fully resolved layout consumed by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub wrap_width: usize,
    pub paragraph_gap: usize,
    pub min_break: usize,
    pub segmentation: Segmentation,
}

impl Default for Layout {
    fn default() -> Self { FormatOptions::default().resolve() }
}

impl FormatOptions {
    /// Options carrying only a paragraph gap, as produced by the legacy
    /// number form.
    #[must_use]
    pub fn with_gap(gap: f64) -> Self {
        Self {
            paragraph_gap: Some(gap),
            ..Self::default()
        }
    }

    /// Resolve defaults and clamp values into a [`Layout`].
    ///
    /// The paragraph gap is floored and clamped to `1..=3`; a non-finite gap
    /// falls back to the default. A wrap width of zero is raised to one so
    /// the forced cut always advances. `min_break` defaults to
    /// `floor(0.7 * wrap_width)`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "gap is clamped to 1..=3 and widths are small"
    )]
    pub fn resolve(self) -> Layout {
        let wrap_width = self.wrap_width.unwrap_or(DEFAULT_WRAP_WIDTH).max(1);
        let paragraph_gap = match self.paragraph_gap {
            Some(gap) if gap.is_finite() => {
                gap.floor().clamp(MIN_PARAGRAPH_GAP, MAX_PARAGRAPH_GAP) as usize
            }
            _ => DEFAULT_PARAGRAPH_GAP,
        };
        let min_break = self
            .min_break
            .unwrap_or_else(|| (wrap_width as f64 * MIN_BREAK_RATIO).floor() as usize);
        Layout {
            wrap_width,
            paragraph_gap,
            min_break,
            segmentation: self.segmentation,
        }
    }
}

impl From<i32> for FormatOptions {
    fn from(gap: i32) -> Self { Self::with_gap(f64::from(gap)) }
}

impl From<f64> for FormatOptions {
    fn from(gap: f64) -> Self { Self::with_gap(gap) }
}

impl From<Layout> for FormatOptions {
    fn from(layout: Layout) -> Self {
        Self {
            wrap_width: Some(layout.wrap_width),
            paragraph_gap: Some(f64::from(u32::try_from(layout.paragraph_gap).unwrap_or(u32::MAX))),
            min_break: Some(layout.min_break),
            segmentation: layout.segmentation,
        }
    }
}

/// Raised when an options string is neither a number nor a valid options
/// object.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("options must be a number or a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// The two accepted shapes of an options string.
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsShape {
    Gap(f64),
    Options(FormatOptions),
}

impl FromStr for FormatOptions {
    type Err = OptionsError;

    /// Parse either a bare gap count (`"1"`) or a JSON object
    /// (`{"wrapWidth": 30}`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shape: OptionsShape = serde_json::from_str(s.trim())?;
        Ok(match shape {
            OptionsShape::Gap(gap) => Self::with_gap(gap),
            OptionsShape::Options(opts) => opts,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_follow_wrap_width() {
        let layout = FormatOptions::default().resolve();
        assert_eq!(
            layout,
            Layout {
                wrap_width: 25,
                paragraph_gap: 2,
                min_break: 17,
                segmentation: Segmentation::Graphemes,
            }
        );
    }

    #[rstest]
    #[case(0.0, 1)]
    #[case(1.0, 1)]
    #[case(2.9, 2)]
    #[case(3.0, 3)]
    #[case(7.0, 3)]
    #[case(-4.0, 1)]
    #[case(f64::NAN, 2)]
    #[case(f64::INFINITY, 2)]
    fn gap_is_floored_and_clamped(#[case] gap: f64, #[case] expected: usize) {
        assert_eq!(FormatOptions::from(gap).resolve().paragraph_gap, expected);
    }

    #[test]
    fn legacy_number_only_sets_gap() {
        let layout = FormatOptions::from(1).resolve();
        assert_eq!(layout.paragraph_gap, 1);
        assert_eq!(layout.wrap_width, DEFAULT_WRAP_WIDTH);
    }

    #[test]
    fn min_break_tracks_custom_width() {
        let layout = FormatOptions {
            wrap_width: Some(30),
            ..FormatOptions::default()
        }
        .resolve();
        assert_eq!(layout.min_break, 21);
    }

    #[test]
    fn min_break_uses_floating_point_floor() {
        // 70 * 0.7 is 48.99999999999999 in binary floating point.
        let layout = FormatOptions {
            wrap_width: Some(70),
            ..FormatOptions::default()
        }
        .resolve();
        assert_eq!(layout.min_break, 48);
    }

    #[test]
    fn zero_width_is_raised() {
        let layout = FormatOptions {
            wrap_width: Some(0),
            ..FormatOptions::default()
        }
        .resolve();
        assert_eq!(layout.wrap_width, 1);
        assert_eq!(layout.min_break, 0);
    }

    #[rstest]
    #[case("1", FormatOptions::with_gap(1.0))]
    #[case(" 2.5 ", FormatOptions::with_gap(2.5))]
    #[case(
        r#"{"wrapWidth": 30, "minBreak": 10}"#,
        FormatOptions { wrap_width: Some(30), min_break: Some(10), ..FormatOptions::default() }
    )]
    #[case(
        r#"{"segmentation": "codePoints"}"#,
        FormatOptions { segmentation: Segmentation::CodePoints, ..FormatOptions::default() }
    )]
    fn parses_both_shapes(#[case] input: &str, #[case] expected: FormatOptions) {
        assert_eq!(input.parse::<FormatOptions>().unwrap(), expected);
    }

    #[rstest]
    #[case("wide")]
    #[case(r#"{"wrapWidth": -1}"#)]
    #[case(r#"{"width": 30}"#)]
    fn rejects_malformed_options(#[case] input: &str) {
        assert!(input.parse::<FormatOptions>().is_err());
    }

    #[test]
    fn layout_roundtrips_through_options() {
        let layout = Layout {
            wrap_width: 40,
            paragraph_gap: 3,
            min_break: 12,
            segmentation: Segmentation::CodePoints,
        };
        assert_eq!(FormatOptions::from(layout).resolve(), layout);
    }
}
