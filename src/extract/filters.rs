//! Inline `| translate` filter-expression scanning.
//!
//! AngularJS templates can mark a string for translation with an
//! interpolation filter instead of a directive:
//!
//! ```text
//! {$ 'hello world' | translate $}
//! {$::'hello world'|translate$}
//! ```
//!
//! This pass is independent of tag-context tracking: the same expression
//! form appears in text nodes and inside attribute values, so both are fed
//! through [`scan_chunk`].

use std::sync::LazyLock;

use regex::Regex;

use super::message::Message;

// Matches `{$ 'literal' | translate $}` with optional whitespace around
// every part and an optional one-time-binding marker `::` before the
// literal. Only bare single- or double-quoted string literals match;
// escaped quotes and backslashes inside stay as written. Anything else on
// the left-hand side (e.g. `{$expr()|translate$}`) does not match.
static FILTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\{\$\s*(?:::)?\s*(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")\s*\|\s*translate\s*\$\}"#,
    )
    .unwrap()
});

/// Scan one chunk of template text (a data run or an attribute value) for
/// filter expressions, appending a gettext message per match.
///
/// `start_line` is the 1-based line on which the chunk begins; matches on
/// continuation lines of a multi-line chunk report their own line, counted
/// from the position of the opening `{$`.
pub fn scan_chunk(chunk: &str, start_line: usize, out: &mut Vec<Message>) {
    for captures in FILTER_REGEX.captures_iter(chunk) {
        let whole = captures.get(0).unwrap();
        let literal = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map_or("", |m| m.as_str());

        let line = start_line + chunk[..whole.start()].matches('\n').count();
        out.push(Message::gettext(line, literal));
    }
}
