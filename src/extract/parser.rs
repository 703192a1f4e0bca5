//! Tag-level template scanning with a translate-context stack.
//!
//! The scanner walks the template once, byte-forward, and tracks open
//! translate contexts explicitly instead of parsing markup recursively:
//! everything inside a context is captured as raw text, so nested tags,
//! HTML comments, and attribute quoting survive verbatim in the extracted
//! message. Named entity references are the one exception; they decode to
//! their character (see [`super::entities`]).

use std::collections::VecDeque;

use super::entities;
use super::filters;
use super::message::{Keyword, Message, MessageText};

/// One parsed attribute of a start tag.
struct Attribute {
    /// Lowercased attribute name.
    name: String,
    /// Raw value text as written (no entity decoding, no unescaping).
    /// `None` for boolean attributes like a bare `translate`.
    value: Option<String>,
    /// 1-based line on which the value starts. Differs from the tag's
    /// line when the tag spans several physical lines.
    value_line: usize,
}

/// An open translate context awaiting its closing tag.
struct TranslateContext {
    /// 1-based line of the opening tag.
    line: usize,
    /// Serialized opening tag, replayed into the parent context when this
    /// one is nested.
    raw_open: String,
    /// Accumulated inner markup, entity-decoded.
    content: String,
    /// Non-translate tags opened inside this context and not yet closed.
    inner_tags: Vec<String>,
    /// `translate-comment` attribute values, in attribute order.
    comments: Vec<String>,
    /// `translate-plural` attribute value, if present.
    plural: Option<String>,
}

/// Lazy, single-pass iterator over the translatable strings of one
/// template. Create it with [`super::extract_angular`].
pub struct Extractor<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    stack: Vec<TranslateContext>,
    pending: VecDeque<Message>,
    flushed: bool,
}

impl<'a> Extractor<'a> {
    pub(super) fn new(src: &'a str) -> Self {
        Extractor {
            src,
            pos: 0,
            line: 1,
            stack: Vec::new(),
            pending: VecDeque::new(),
            flushed: false,
        }
    }

    fn in_translate(&self) -> bool {
        !self.stack.is_empty()
    }

    fn bump_lines(&mut self, consumed: &str) {
        self.line += consumed.matches('\n').count();
    }

    /// Consume the next construct at `self.pos`, queueing any messages it
    /// completes.
    fn advance(&mut self) {
        let rest = &self.src[self.pos..];
        if rest.starts_with("<!--") {
            self.consume_comment();
        } else if rest.starts_with("</") {
            self.consume_end_tag();
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            self.consume_markup_decl();
        } else if starts_tag(rest) {
            self.consume_start_tag();
        } else {
            self.consume_data();
        }
    }

    /// Text run up to the next markup construct. Stray `<` that does not
    /// open a tag, comment, or declaration counts as text.
    fn consume_data(&mut self) {
        let src = self.src;
        let mut end = src.len();
        // A leading `<` already failed the construct checks; step past it
        // so the search below makes progress.
        let mut search = if src[self.pos..].starts_with('<') {
            self.pos + 1
        } else {
            self.pos
        };
        while search <= src.len() {
            match src[search..].find('<') {
                Some(offset) => {
                    let at = search + offset;
                    let rest = &src[at..];
                    if rest.starts_with("<!")
                        || rest.starts_with("</")
                        || rest.starts_with("<?")
                        || starts_tag(rest)
                    {
                        end = at;
                        break;
                    }
                    search = at + 1;
                }
                None => break,
            }
        }

        let chunk = &src[self.pos..end];
        if let Some(context) = self.stack.last_mut() {
            entities::append_decoded(&mut context.content, chunk);
        } else {
            let mut found = Vec::new();
            filters::scan_chunk(chunk, self.line, &mut found);
            self.pending.extend(found);
        }
        self.bump_lines(chunk);
        self.pos = end;
    }

    /// `<!-- ... -->`. Kept verbatim inside a translate context, skipped
    /// outside one.
    fn consume_comment(&mut self) {
        let src = self.src;
        let end = match src[self.pos + 4..].find("-->") {
            Some(offset) => self.pos + 4 + offset + 3,
            None => src.len(),
        };
        let raw = &src[self.pos..end];
        if let Some(context) = self.stack.last_mut() {
            context.content.push_str(raw);
        }
        self.bump_lines(raw);
        self.pos = end;
    }

    /// `<!DOCTYPE ...>` and processing instructions. Kept verbatim inside
    /// a translate context, skipped outside one.
    fn consume_markup_decl(&mut self) {
        let src = self.src;
        let end = match src[self.pos..].find('>') {
            Some(offset) => self.pos + offset + 1,
            None => src.len(),
        };
        let raw = &src[self.pos..end];
        if let Some(context) = self.stack.last_mut() {
            context.content.push_str(raw);
        }
        self.bump_lines(raw);
        self.pos = end;
    }

    fn consume_end_tag(&mut self) {
        let src = self.src;
        let end = match src[self.pos..].find('>') {
            Some(offset) => self.pos + offset + 1,
            None => src.len(),
        };
        let raw = &src[self.pos..end];
        self.bump_lines(raw);
        self.pos = end;

        // Best-effort matching: an end tag first closes any still-open
        // inner tag, otherwise it closes the current translate context
        // whatever its name.
        let closed_inner = match self.stack.last_mut() {
            Some(context) => {
                if context.inner_tags.pop().is_some() {
                    context.content.push_str(raw);
                    true
                } else {
                    false
                }
            }
            None => return,
        };
        if !closed_inner {
            self.close_top(raw);
        }
    }

    fn consume_start_tag(&mut self) {
        let src = self.src;
        let start = self.pos;
        let mut cursor = start + 1;

        let name_start = cursor;
        while cursor < src.len() && is_name_byte(src.as_bytes()[cursor]) {
            cursor += 1;
        }
        let name = src[name_start..cursor].to_ascii_lowercase();

        let mut attributes: Vec<Attribute> = Vec::new();
        let mut self_closing = false;
        loop {
            cursor = skip_whitespace(src, cursor);
            if cursor >= src.len() {
                break;
            }
            match src.as_bytes()[cursor] {
                b'>' => {
                    cursor += 1;
                    break;
                }
                b'/' if src[cursor + 1..].starts_with('>') => {
                    self_closing = true;
                    cursor += 2;
                    break;
                }
                b'/' | b'=' => {
                    cursor += 1;
                }
                _ => {
                    let (attribute, next) = parse_attribute(src, start, self.line, cursor);
                    attributes.push(attribute);
                    cursor = next;
                }
            }
        }

        let raw = &src[start..cursor];
        let tag_line = self.line;
        self.bump_lines(raw);
        self.pos = cursor;
        self.handle_start_tag(&name, attributes, raw, tag_line, self_closing);
    }

    fn handle_start_tag(
        &mut self,
        name: &str,
        attributes: Vec<Attribute>,
        raw: &str,
        tag_line: usize,
        self_closing: bool,
    ) {
        // A <translate> tag or a `translate` attribute opens a context.
        // An attribute merely *valued* "translate" does not.
        let triggered = name == "translate" || attributes.iter().any(|a| a.name == "translate");

        if triggered {
            self.stack.push(TranslateContext {
                line: tag_line,
                raw_open: raw.to_string(),
                content: String::new(),
                inner_tags: Vec::new(),
                comments: attributes
                    .iter()
                    .filter(|a| a.name == "translate-comment")
                    .map(|a| a.value.clone().unwrap_or_default())
                    .collect(),
                plural: attributes
                    .iter()
                    .find(|a| a.name == "translate-plural")
                    .and_then(|a| a.value.clone()),
            });
            if self_closing {
                self.close_top("");
            }
        } else if let Some(context) = self.stack.last_mut() {
            context.content.push_str(raw);
            if !self_closing {
                context.inner_tags.push(name.to_string());
            }
        } else {
            for attribute in &attributes {
                if let Some(value) = &attribute.value
                    && !value.is_empty()
                {
                    let mut found = Vec::new();
                    filters::scan_chunk(value, attribute.value_line, &mut found);
                    self.pending.extend(found);
                }
            }
        }
    }

    /// Pop the current context and queue its message. When the context is
    /// nested, its full serialized form is replayed into the parent.
    fn close_top(&mut self, raw_end: &str) {
        let Some(context) = self.stack.pop() else {
            return;
        };

        let text = context.content.trim().to_string();
        let (keyword, text) = match context.plural {
            Some(plural) => (
                Keyword::Ngettext,
                MessageText::Plural {
                    singular: text,
                    plural,
                },
            ),
            None => (Keyword::Gettext, MessageText::Singular(text)),
        };
        self.pending.push_back(Message {
            line: context.line,
            keyword,
            text,
            comments: context.comments,
        });

        if let Some(parent) = self.stack.last_mut() {
            parent.content.push_str(&context.raw_open);
            parent.content.push_str(&context.content);
            parent.content.push_str(raw_end);
        }
    }

    /// Unterminated contexts at end of input flush best-effort, deepest
    /// first, with whatever content they collected.
    fn flush_open_contexts(&mut self) {
        while self.in_translate() {
            self.close_top("");
        }
    }
}

impl Iterator for Extractor<'_> {
    type Item = Message;

    fn next(&mut self) -> Option<Message> {
        loop {
            if let Some(message) = self.pending.pop_front() {
                return Some(message);
            }
            if self.pos >= self.src.len() {
                if self.flushed {
                    return None;
                }
                self.flush_open_contexts();
                self.flushed = true;
                continue;
            }
            self.advance();
        }
    }
}

/// Parse one attribute starting at `cursor`. Returns the attribute and the
/// cursor position after it. `tag_start`/`tag_line` anchor line counting
/// for values inside multi-line tags.
fn parse_attribute(
    src: &str,
    tag_start: usize,
    tag_line: usize,
    cursor: usize,
) -> (Attribute, usize) {
    let bytes = src.as_bytes();
    let name_start = cursor;
    let mut cursor = cursor;
    while cursor < src.len() {
        let b = bytes[cursor];
        if b.is_ascii_whitespace()
            || b == b'='
            || b == b'>'
            || (b == b'/' && src[cursor + 1..].starts_with('>'))
        {
            break;
        }
        cursor += 1;
    }
    let name = src[name_start..cursor].to_ascii_lowercase();

    let after_name = skip_whitespace(src, cursor);
    if after_name >= src.len() || bytes[after_name] != b'=' {
        // Boolean attribute.
        let attribute = Attribute {
            name,
            value: None,
            value_line: tag_line + src[tag_start..cursor].matches('\n').count(),
        };
        return (attribute, cursor);
    }

    let mut cursor = skip_whitespace(src, after_name + 1);
    if cursor >= src.len() {
        let attribute = Attribute {
            name,
            value: Some(String::new()),
            value_line: tag_line + src[tag_start..cursor].matches('\n').count(),
        };
        return (attribute, cursor);
    }

    let quote = bytes[cursor];
    let (value_start, value_end, next) = if quote == b'"' || quote == b'\'' {
        let value_start = cursor + 1;
        match src[value_start..].find(quote as char) {
            Some(offset) => (value_start, value_start + offset, value_start + offset + 1),
            None => (value_start, src.len(), src.len()),
        }
    } else {
        let value_start = cursor;
        while cursor < src.len() {
            let b = bytes[cursor];
            if b.is_ascii_whitespace() || b == b'>' {
                break;
            }
            cursor += 1;
        }
        (value_start, cursor, cursor)
    };

    let attribute = Attribute {
        name,
        value: Some(src[value_start..value_end].to_string()),
        value_line: tag_line + src[tag_start..value_start].matches('\n').count(),
    };
    (attribute, next)
}

fn skip_whitespace(src: &str, mut cursor: usize) -> usize {
    let bytes = src.as_bytes();
    while cursor < src.len() && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }
    cursor
}

/// `<` followed by an ASCII letter opens a start tag; anything else is
/// text or another construct.
fn starts_tag(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    bytes.first() == Some(&b'<') && bytes.get(1).is_some_and(|b| b.is_ascii_alphabetic())
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':' || b == b'.'
}
