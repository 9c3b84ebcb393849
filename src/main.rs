use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use blogwrap::{FormatOptions, Layout, Segmentation, expand_line_breaks, format_with, io as files};
use clap::{ArgAction, Parser};
use rayon::prelude::*;
use tracing_subscriber::{filter::LevelFilter, fmt};

#[derive(Parser)]
#[command(version, about = "Reflow Korean prose for blog and mobile layouts")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    opts: FormatArgs,
    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
    /// Text files to format
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone)]
struct FormatArgs {
    /// Base options: a paragraph gap count or a JSON object such as
    /// '{"wrapWidth": 30}'
    #[arg(long = "options", value_name = "NUM|JSON")]
    options: Option<FormatOptions>,
    /// Target graphemes per line
    #[arg(short = 'w', long = "width")]
    width: Option<usize>,
    /// Blank lines between paragraphs (floored, clamped to 1..=3)
    #[arg(short = 'g', long = "gap")]
    gap: Option<f64>,
    /// Earliest offset at which a line may be broken
    #[arg(long = "min-break")]
    min_break: Option<usize>,
    /// Count code points instead of grapheme clusters
    #[arg(long = "code-points")]
    code_points: bool,
    /// Treat every line break as a paragraph boundary
    #[arg(long = "split-lines")]
    split_lines: bool,
}

impl FormatArgs {
    fn layout(&self) -> Layout {
        let mut opts = self.options.unwrap_or_default();
        if self.width.is_some() {
            opts.wrap_width = self.width;
        }
        if self.gap.is_some() {
            opts.paragraph_gap = self.gap;
        }
        if self.min_break.is_some() {
            opts.min_break = self.min_break;
        }
        if self.code_points {
            opts.segmentation = Segmentation::CodePoints;
        }
        opts.resolve()
    }

    fn format(&self, text: &str, layout: &Layout) -> String {
        if self.split_lines {
            format_with(&expand_line_breaks(text), layout)
        } else {
            format_with(text, layout)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn read_path(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn rewrite_path(path: &Path, args: &FormatArgs, layout: &Layout) -> anyhow::Result<()> {
    files::rewrite_with(path, |text| args.format(text, layout))
        .with_context(|| format!("failed to rewrite {}", path.display()))
}

/// Return the first error and print the rest to standard error.
fn first_error(errors: impl IntoIterator<Item = anyhow::Error>) -> anyhow::Result<()> {
    let mut errors = errors.into_iter();
    let Some(first) = errors.next() else {
        return Ok(());
    };
    for err in errors {
        eprintln!("{err:#}");
    }
    Err(first)
}

/// Entry point for the command-line reflow tool.
///
/// Formats standard input when no files are given, otherwise formats each
/// file in parallel and prints the results in argument order, or rewrites
/// the files with `--in-place`. A failing file is reported after the others
/// have been handled.
///
/// # Examples
///
/// ```sh
/// # Format a draft and print it
/// blogwrap draft.txt
///
/// # Narrower lines, one blank line between paragraphs
/// blogwrap --width 20 --gap 1 draft.txt
///
/// # Format standard input
/// pbpaste | blogwrap --split-lines
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let layout = cli.opts.layout();
    tracing::debug!(?layout, "resolved layout");

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        println!("{}", cli.opts.format(&input, &layout));
        return Ok(());
    }

    if cli.in_place {
        let results: Vec<anyhow::Result<()>> = cli
            .files
            .par_iter()
            .map(|path| {
                tracing::info!(path = %path.display(), "rewriting file");
                rewrite_path(path, &cli.opts, &layout)
            })
            .collect();
        return first_error(results.into_iter().filter_map(Result::err));
    }

    let results: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| {
            tracing::info!(path = %path.display(), "formatting file");
            read_path(path).map(|text| cli.opts.format(&text, &layout))
        })
        .collect();

    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(formatted) => println!("{formatted}"),
            Err(err) => errors.push(err),
        }
    }
    first_error(errors)
}
