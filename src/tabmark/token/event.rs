//! Parse events
//!
//!     The scanner turns source lines into events and the structural parser consumes
//!     them. Indentation never reaches the parser as whitespace: every change of level
//!     is spelled out as Enter/Exit events, one per level, so the parser can treat
//!     them like braces.
//!
//!     Every event records the line it came from, the indentation level it applies
//!     to, and the raw line text. The raw text is only used when the parser has to
//!     embed the event as an Exception node.

/// A parse event with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub line: usize,
    pub level: usize,
    pub source: String,
}

impl Event {
    pub fn new(kind: EventKind, line: usize, level: usize, source: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            level,
            source: source.into(),
        }
    }

    /// Structural event with no source text of its own.
    pub fn marker(kind: EventKind, line: usize, level: usize) -> Self {
        Self::new(kind, line, level, String::new())
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Indentation increased to `level`.
    Enter,
    /// Indentation decreased out of `level`.
    Exit,
    /// One or more blank lines.
    Break,
    /// A content-free separator line.
    Decoration,
    /// Leading `#!` line captured as document metadata.
    Context(String),
    /// Structurally suspicious but resolvable input.
    Warning(String),
    Section {
        path: Vec<String>,
        multiplicity: usize,
    },
    Admonition {
        severity: String,
        title: Option<String>,
    },
    Key(String),
    SetItem(String),
    SequenceItem(String),
    SyntaxOpen {
        syntax_type: String,
        qualifier: Option<String>,
    },
    ParagraphLine(String),
    LiteralLine(String),
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Enter => "enter",
            EventKind::Exit => "exit",
            EventKind::Break => "break",
            EventKind::Decoration => "decoration",
            EventKind::Context(_) => "context",
            EventKind::Warning(_) => "warning",
            EventKind::Section { .. } => "section",
            EventKind::Admonition { .. } => "admonition",
            EventKind::Key(_) => "dictionary-key",
            EventKind::SetItem(_) => "set-item",
            EventKind::SequenceItem(_) => "sequence-item",
            EventKind::SyntaxOpen { .. } => "syntax",
            EventKind::ParagraphLine(_) => "paragraph-line",
            EventKind::LiteralLine(_) => "literal-line",
        }
    }

    /// The parameters of the event, as they are recorded on an Exception node.
    pub fn parameters(&self) -> Vec<String> {
        match self {
            EventKind::Enter | EventKind::Exit | EventKind::Break | EventKind::Decoration => {
                Vec::new()
            }
            EventKind::Context(text)
            | EventKind::Warning(text)
            | EventKind::Key(text)
            | EventKind::SetItem(text)
            | EventKind::SequenceItem(text)
            | EventKind::ParagraphLine(text)
            | EventKind::LiteralLine(text) => vec![text.clone()],
            EventKind::Section { path, .. } => path.clone(),
            EventKind::Admonition { severity, title } => {
                let mut params = vec![severity.clone()];
                params.extend(title.iter().cloned());
                params
            }
            EventKind::SyntaxOpen {
                syntax_type,
                qualifier,
            } => {
                let mut params = vec![syntax_type.clone()];
                params.extend(qualifier.iter().cloned());
                params
            }
        }
    }
}
