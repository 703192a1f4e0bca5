//! Message record types produced by the extractor.

/// The gettext function family a message maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Simple translation: one message string.
    Gettext,
    /// Plural-aware translation: singular and plural forms.
    Ngettext,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Gettext => "gettext",
            Keyword::Ngettext => "ngettext",
        }
    }
}

/// The translatable text carried by a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageText {
    Singular(String),
    Plural { singular: String, plural: String },
}

impl MessageText {
    /// The singular form, which is the msgid in both variants.
    pub fn singular(&self) -> &str {
        match self {
            MessageText::Singular(text) => text,
            MessageText::Plural { singular, .. } => singular,
        }
    }

    pub fn plural(&self) -> Option<&str> {
        match self {
            MessageText::Singular(_) => None,
            MessageText::Plural { plural, .. } => Some(plural),
        }
    }
}

/// One translatable string occurrence found in a template.
///
/// Produced by the extractor, never mutated afterwards; consumed by a
/// message-catalog builder such as [`crate::pot::PotCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// 1-based line on which the occurrence starts. For tag-based
    /// extraction this is the line of the opening tag, not the closing one.
    pub line: usize,
    pub keyword: Keyword,
    pub text: MessageText,
    /// Translator comments from `translate-comment` attributes, in
    /// attribute order.
    pub comments: Vec<String>,
}

impl Message {
    pub fn gettext(line: usize, text: impl Into<String>) -> Self {
        Message {
            line,
            keyword: Keyword::Gettext,
            text: MessageText::Singular(text.into()),
            comments: Vec::new(),
        }
    }
}
