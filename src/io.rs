//! File helpers for formatting text documents.

use std::{fs, path::Path};

use crate::{options::Layout, process::format_with};

/// Read and format the file at `path`.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn format_file(path: &Path, layout: &Layout) -> std::io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(format_with(&text, layout))
}

/// Rewrite a file in place with the output of `transform`.
///
/// Non-empty output is terminated by a newline; empty output leaves an empty
/// file.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite_with<F>(path: &Path, transform: F) -> std::io::Result<()>
where
    F: FnOnce(&str) -> String,
{
    let text = fs::read_to_string(path)?;
    let formatted = transform(&text);
    if formatted.is_empty() {
        fs::write(path, "")
    } else {
        fs::write(path, formatted + "\n")
    }
}

/// Rewrite a file in place with formatted text.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, layout: &Layout) -> std::io::Result<()> {
    rewrite_with(path, |text| format_with(text, layout))
}
