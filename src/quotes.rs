//! Quotation tracking.
//!
//! Two independent views of quotation marks are used by the formatter:
//!
//! - [`QuoteParity`] toggles one flag per quote family on every mark it sees.
//!   It does not pair openers with closers, so an apostrophe used inside a
//!   word flips the straight single-quote flag for the rest of the scan.
//!   Newline removal and the pre-wrap repair pass rely on this loose view.
//! - [`quote_spans`] pairs marks with an explicit stack and is used to keep
//!   the wrapper from cutting inside a quotation. Only curly closers pair;
//!   straight marks are always pushed as openers, so an apostrophe never
//!   hides break points. Unmatched openers yield no span.

/// Parity flags for the four quote families.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuoteParity {
    straight_single: bool,
    straight_double: bool,
    curly_single: bool,
    curly_double: bool,
}

impl QuoteParity {
    /// Toggle the family of `ch` if it is a quotation mark.
    ///
    /// Returns `true` when `ch` was a quotation mark.
    pub fn observe(&mut self, ch: char) -> bool {
        let flag = match ch {
            '\'' => &mut self.straight_single,
            '"' => &mut self.straight_double,
            '‘' | '’' => &mut self.curly_single,
            '“' | '”' => &mut self.curly_double,
            _ => return false,
        };
        *flag = !*flag;
        true
    }

    /// Whether any family currently has an odd number of marks.
    #[must_use]
    pub fn is_open(self) -> bool {
        self.straight_single || self.straight_double || self.curly_single || self.curly_double
    }
}

/// Replace every `\n` that sits inside an open quotation with a space.
///
/// # Examples
///
/// ```
/// use blogwrap::quotes::replace_newlines_inside_quotes;
///
/// assert_eq!(replace_newlines_inside_quotes("“가\n나”\n다"), "“가 나”\n다");
/// ```
#[must_use]
pub fn replace_newlines_inside_quotes(text: &str) -> String {
    let mut parity = QuoteParity::default();
    text.chars()
        .map(|ch| {
            if parity.observe(ch) {
                ch
            } else if ch == '\n' && parity.is_open() {
                ' '
            } else {
                ch
            }
        })
        .collect()
}

/// Whether the newline at byte offset `newline_at` of `text` falls inside an
/// open quotation.
///
/// Only the prefix up to and including `newline_at` is scanned.
#[must_use]
pub fn newline_inside_quotes(text: &str, newline_at: usize) -> bool {
    let mut parity = QuoteParity::default();
    for (idx, ch) in text.char_indices() {
        if idx > newline_at {
            break;
        }
        parity.observe(ch);
    }
    parity.is_open()
}

/// Inclusive range of unit indices between a matched pair of quotation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteSpan {
    pub start: usize,
    pub end: usize,
}

impl QuoteSpan {
    #[must_use]
    pub fn contains(self, idx: usize) -> bool { (self.start..=self.end).contains(&idx) }
}

/// Opener glyph expected for a closing glyph.
fn opener_for(closer: &str) -> Option<&'static str> {
    match closer {
        "”" => Some("“"),
        "’" => Some("‘"),
        _ => None,
    }
}

fn is_opener(unit: &str) -> bool { matches!(unit, "\"" | "'" | "“" | "‘") }

/// Pair quotation marks in `units` and return the spans they enclose.
///
/// A curly closing glyph matches the innermost open mark it pairs with,
/// skipping over unrelated open marks. Straight marks only ever open, so
/// they never form a span.
#[must_use]
pub fn quote_spans(units: &[&str]) -> Vec<QuoteSpan> {
    let mut stack: Vec<(&str, usize)> = Vec::new();
    let mut spans = Vec::new();

    for (idx, &unit) in units.iter().enumerate() {
        if is_opener(unit) {
            stack.push((unit, idx));
        } else if let Some(opener) = opener_for(unit)
            && let Some(pos) = stack.iter().rposition(|&(glyph, _)| glyph == opener)
        {
            let (_, start) = stack.remove(pos);
            spans.push(QuoteSpan { start, end: idx });
        }
    }

    spans
}

/// Whether `idx` lies inside any of `spans`.
#[must_use]
pub fn inside_any(spans: &[QuoteSpan], idx: usize) -> bool {
    spans.iter().any(|span| span.contains(idx))
}
