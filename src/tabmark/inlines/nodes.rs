//! Raw inline events produced by the stylizer.
//!
//! These are parse payloads, not the public document model: references keep their
//! raw delimiters so the exporter can classify them. See
//! [export](crate::tabmark::export) for the mapping to fragments.

/// Sequence of inline events for one paragraph, item or key.
pub type InlineContent = Vec<Inline>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// Whitespace joining two source lines of the same paragraph.
    Separator(String),
    /// Emphasis with the length of its asterisk run as weight.
    Emphasis {
        weight: usize,
        text: String,
        cast: Option<String>,
    },
    /// Everything after `&`, delimiters and include marker included.
    Reference { raw: String, cast: Option<String> },
    /// Grave-accent literal with escapes resolved.
    Literal { text: String, cast: Option<String> },
}

impl Inline {
    /// The line-join separator between two source lines.
    pub fn separator() -> Self {
        Inline::Separator(" ".to_string())
    }

    /// Whether this event carries no content beyond whitespace.
    pub fn is_whitespace(&self) -> bool {
        match self {
            Inline::Text(text) | Inline::Separator(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Text payload without markup.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text) | Inline::Separator(text) => text,
            Inline::Emphasis { text, .. } | Inline::Literal { text, .. } => text,
            Inline::Reference { raw, .. } => raw,
        }
    }
}
