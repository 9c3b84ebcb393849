//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static RE: LazyLock<Regex> = blogwrap::lazy_regex!(r" {2,}", "space run");
/// assert_eq!(RE.replace_all("가  나", " "), "가 나");
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        std::sync::LazyLock::new(|| regex::Regex::new($pattern).expect($msg))
    };
}
