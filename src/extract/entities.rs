//! Named HTML entity decoding for translate-context content.
//!
//! Only named references (`&reg;`) are decoded. Numeric character
//! references (`&#62;`, `&#x3E;`) are kept verbatim, matching the
//! convention that text an author typed as an escape stays escaped in the
//! extracted message.

use std::collections::HashMap;
use std::sync::LazyLock;

// Keyed by bare entity name ("reg"), built from the WHATWG registry.
// Only the canonical semicolon-terminated forms are accepted.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    ::entities::ENTITIES
        .iter()
        .filter(|e| e.entity.ends_with(';'))
        .map(|e| {
            let name = e.entity.trim_start_matches('&').trim_end_matches(';');
            (name, e.characters)
        })
        .collect()
});

/// Look up a named entity by its bare name (no `&`/`;`).
pub fn decode_named(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Append `text` to `out`, decoding named entity references and leaving
/// everything else (including numeric character references and unknown
/// names) exactly as written.
pub fn append_decoded(out: &mut String, text: &str) {
    let mut pos = 0;

    while pos < text.len() {
        let Some(amp) = text[pos..].find('&').map(|i| pos + i) else {
            out.push_str(&text[pos..]);
            break;
        };
        out.push_str(&text[pos..amp]);

        match parse_named_reference(&text[amp..]) {
            Some((name, len)) => {
                match decode_named(name) {
                    Some(decoded) => out.push_str(decoded),
                    None => out.push_str(&text[amp..amp + len]),
                }
                pos = amp + len;
            }
            None => {
                out.push('&');
                pos = amp + 1;
            }
        }
    }
}

/// Parse `&name;` at the start of `text`. Returns the bare name and the
/// total byte length of the reference. Numeric references (`&#...`) are
/// rejected so they pass through verbatim.
fn parse_named_reference(text: &str) -> Option<(&str, usize)> {
    let rest = text.strip_prefix('&')?;
    if rest.starts_with('#') {
        return None;
    }
    let end = rest.find(|c: char| !c.is_ascii_alphanumeric())?;
    if end == 0 || !rest[end..].starts_with(';') {
        return None;
    }
    Some((&rest[..end], 1 + end + 1))
}
