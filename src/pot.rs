//! POT (gettext template) catalog building and rendering.
//!
//! Messages from all scanned files merge into one catalog keyed by msgid:
//! occurrences become `#:` reference lines, translator comments become
//! `#.` lines, and plural records render `msgid_plural` with empty
//! `msgstr[0]`/`msgstr[1]` slots.

use std::collections::HashMap;

use crate::extract::Message;

/// One catalog entry, possibly merged from several occurrences.
#[derive(Debug)]
pub struct PotEntry {
    pub msgid: String,
    pub msgid_plural: Option<String>,
    /// Translator comments (`#.`), de-duplicated, in first-seen order.
    pub comments: Vec<String>,
    /// Occurrences (`#:`) as `path:line`, in insertion order.
    pub references: Vec<String>,
}

/// A message catalog in template form (all msgstr slots empty).
#[derive(Debug, Default)]
pub struct PotCatalog {
    entries: Vec<PotEntry>,
    index: HashMap<String, usize>,
}

impl PotCatalog {
    pub fn new() -> Self {
        PotCatalog::default()
    }

    /// Merge one extracted message into the catalog.
    ///
    /// Messages with an empty msgid are dropped: the empty msgid is the
    /// catalog header slot in the POT format.
    pub fn add_message(&mut self, path: &str, message: &Message) {
        let msgid = message.text.singular();
        if msgid.is_empty() {
            return;
        }

        let reference = format!("{}:{}", path, message.line);
        let slot = match self.index.get(msgid) {
            Some(&slot) => slot,
            None => {
                self.entries.push(PotEntry {
                    msgid: msgid.to_string(),
                    msgid_plural: None,
                    comments: Vec::new(),
                    references: Vec::new(),
                });
                let slot = self.entries.len() - 1;
                self.index.insert(msgid.to_string(), slot);
                slot
            }
        };

        let entry = &mut self.entries[slot];
        entry.references.push(reference);
        if entry.msgid_plural.is_none() {
            entry.msgid_plural = message.text.plural().map(str::to_string);
        }
        for comment in &message.comments {
            if !entry.comments.contains(comment) {
                entry.comments.push(comment.clone());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[PotEntry] {
        &self.entries
    }

    /// Render the catalog as POT text. Output is deterministic for a given
    /// insertion order; no creation date is stamped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("# Translations template.\n");
        out.push_str("msgid \"\"\n");
        out.push_str("msgstr \"\"\n");
        out.push_str("\"Project-Id-Version: PACKAGE VERSION\\n\"\n");
        out.push_str("\"MIME-Version: 1.0\\n\"\n");
        out.push_str("\"Content-Type: text/plain; charset=UTF-8\\n\"\n");
        out.push_str("\"Content-Transfer-Encoding: 8bit\\n\"\n");

        for entry in &self.entries {
            out.push('\n');
            for comment in &entry.comments {
                out.push_str("#. ");
                out.push_str(comment);
                out.push('\n');
            }
            for reference in &entry.references {
                out.push_str("#: ");
                out.push_str(reference);
                out.push('\n');
            }
            out.push_str(&format!("msgid \"{}\"\n", escape(&entry.msgid)));
            match &entry.msgid_plural {
                Some(plural) => {
                    out.push_str(&format!("msgid_plural \"{}\"\n", escape(plural)));
                    out.push_str("msgstr[0] \"\"\n");
                    out.push_str("msgstr[1] \"\"\n");
                }
                None => out.push_str("msgstr \"\"\n"),
            }
        }
        out
    }
}

/// Escape a message string for a POT double-quoted literal.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
