//! Sentence chunking ahead of wrapping.

fn is_terminator(ch: char) -> bool { matches!(ch, '.' | '!' | '?') }

/// Split `text` after every `.`, `!` or `?`.
///
/// The terminator stays with the preceding chunk; whitespace after it is
/// dropped. Chunks are trimmed and empty chunks removed. Every terminator
/// ends a chunk, so `"a.. b"` yields `["a.", ".", "b"]` and a decimal point
/// splits a number.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if is_terminator(ch) {
            let end = idx + ch.len_utf8();
            chunks.push(&text[start..end]);
            start = end;
        }
    }
    chunks.push(&text[start..]);

    chunks
        .into_iter()
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}
