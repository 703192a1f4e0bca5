//! Translatable-string extraction from AngularJS/HTML templates.
//!
//! Three forms of markup produce messages:
//!
//! - `<translate>content</translate>` — the content is extracted.
//! - `<p translate>content</p>` — any tag with a `translate` attribute;
//!   `translate-plural` switches the message to ngettext form and
//!   `translate-comment` attaches translator comments.
//! - `{$ 'literal' | translate $}` — interpolation filter expressions, in
//!   element text and attribute values alike.
//!
//! Extraction is a single forward pass; see [`Extractor`].

mod entities;
mod filters;
mod message;
mod parser;


use std::collections::HashMap;

pub use message::{Keyword, Message, MessageText};
pub use parser::Extractor;

/// Extract translatable messages from one template source.
///
/// Returns a lazy iterator yielding [`Message`] records in the order their
/// occurrences complete in the document.
///
/// `default_keywords`, `comment_tags`, and `options` mirror the calling
/// convention of generic string-extraction tooling; none of them alter
/// template scanning today and they are accepted for interface
/// compatibility only.
pub fn extract_angular<'a>(
    source: &'a str,
    default_keywords: &[String],
    comment_tags: &[String],
    options: &HashMap<String, String>,
) -> Extractor<'a> {
    let _ = (default_keywords, comment_tags, options);
    Extractor::new(source)
}
