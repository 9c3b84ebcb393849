//! Korean particle detection at the start of a line.

use std::sync::LazyLock;

use regex::Regex;

/// Bound grammatical particles that must not open a line on their own.
pub const PARTICLES: [&str; 13] = [
    "은", "는", "이", "가", "을", "를", "도", "만", "뿐", "까지", "부터", "조차", "마저",
];

static LEADING_QUOTES_RE: LazyLock<Regex> = lazy_regex!(
    r#"^[\s"'“”‘’]+"#,
    "leading quote pattern regex should compile",
);

/// Whether `token` is exactly one of the [`PARTICLES`].
#[must_use]
pub fn is_particle(token: &str) -> bool { PARTICLES.contains(&token) }

/// Strip leading whitespace and quotation marks.
#[must_use]
pub fn strip_leading_quotes(line: &str) -> &str {
    LEADING_QUOTES_RE
        .find(line)
        .map_or(line, |m| &line[m.end()..])
}

/// First whitespace-delimited token of `line` once leading whitespace and
/// quotation marks are stripped.
#[must_use]
pub fn first_token(line: &str) -> &str {
    strip_leading_quotes(line)
        .split_whitespace()
        .next()
        .unwrap_or("")
}

/// Whether `line` begins with a dangling particle.
///
/// # Examples
///
/// ```
/// use blogwrap::particles::starts_with_particle;
///
/// assert!(starts_with_particle("는 맛있었다"));
/// assert!(starts_with_particle("\"까지 왔다"));
/// assert!(!starts_with_particle("는데 맛있었다"));
/// ```
#[must_use]
pub fn starts_with_particle(line: &str) -> bool { is_particle(first_token(line)) }
