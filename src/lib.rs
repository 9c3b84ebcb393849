//! Reflow Korean-dominant prose for narrow layouts.
//!
//! The crate exposes a single pure transformation, [`format`], which
//! normalises paragraph breaks, wraps long lines near a target width and
//! repairs awkward breaks such as a particle stranded at the start of a line
//! or a quotation split over two lines. Helper modules are public so callers
//! can run individual stages.

#[macro_use]
mod macros;

pub mod graphemes;
pub mod io;
pub mod options;
pub mod paragraphs;
pub mod particles;
pub mod process;
pub mod quotes;
pub mod repair;
pub mod wrap;

pub use graphemes::Segmentation;
pub use io::rewrite;
pub use options::{FormatOptions, Layout, OptionsError};
pub use paragraphs::expand_line_breaks;
pub use process::{format, format_with};
