//! Line Classification
//!
//!     Maps the content of a line (indentation already stripped) to the command it
//!     expresses. Classification looks at the leading characters only, through a fixed
//!     dispatch table ordered by specificity, so `#!` is tried before `#`:
//!
//!         | Prefix | Command          | Form                  |
//!         |--------|------------------|-----------------------|
//!         | `#!`   | syntax block     | `#!type qualifier`    |
//!         | `#`    | enumerated item  | `# text`              |
//!         | `[`    | section select   | `[ Title >> Sub ]`    |
//!         | `!`    | admonition       | `! SEVERITY: title`   |
//!         | `/`    | dictionary key   | `/key/`               |
//!         | `-`    | unordered item   | `- text`              |
//!
//!     A line whose prefix matches but whose form does not (`-flag`, `/usr/bin`,
//!     `#hashtag`) is an ordinary paragraph line. Decoration lines are checked before
//!     the table is consulted.

use crate::tabmark::config::Profile;
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\[+)(.*?)(\]*)$").expect("section pattern"));
static ADMONITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^!\s*([A-Za-z][A-Za-z0-9_-]*)\s*:\s*(.*)$").expect("admonition pattern")
});
static SYNTAX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#!\s*(\S*)\s*(.*)$").expect("syntax pattern"));

/// Commands reachable through the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SyntaxOpen,
    Enumeration,
    SectionSelect,
    AdmonitionOpen,
    DictionaryKey,
    Bullet,
}

/// The command table used by structural frames, most specific prefix first.
pub const COMMANDS: &[(&str, Command)] = &[
    ("#!", Command::SyntaxOpen),
    ("#", Command::Enumeration),
    ("[", Command::SectionSelect),
    ("!", Command::AdmonitionOpen),
    ("/", Command::DictionaryKey),
    ("-", Command::Bullet),
];

/// Classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Decoration,
    Section {
        path: Vec<String>,
        opening: usize,
        closing: usize,
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
    Paragraph(String),
}

/// Classify a line's content with the default command table.
pub fn classify(content: &str, profile: &Profile) -> LineKind {
    classify_with(content, profile, COMMANDS)
}

/// Classify a line's content against a specific command table.
pub fn classify_with(content: &str, profile: &Profile, commands: &[(&str, Command)]) -> LineKind {
    if content.is_empty() {
        return LineKind::Blank;
    }
    if profile.is_decoration(content) {
        return LineKind::Decoration;
    }

    commands
        .iter()
        .find(|(prefix, _)| content.starts_with(prefix))
        .and_then(|(_, command)| dispatch(*command, content))
        .unwrap_or_else(|| LineKind::Paragraph(content.to_string()))
}

fn dispatch(command: Command, content: &str) -> Option<LineKind> {
    match command {
        Command::SyntaxOpen => syntax_open(content),
        Command::Enumeration => item_text(content, '#').map(LineKind::SequenceItem),
        Command::SectionSelect => section(content),
        Command::AdmonitionOpen => admonition(content),
        Command::DictionaryKey => key(content),
        Command::Bullet => item_text(content, '-').map(LineKind::SetItem),
    }
}

/// `-` or `- text`; anything glued to the marker is not an item.
fn item_text(content: &str, marker: char) -> Option<String> {
    let rest = content.strip_prefix(marker)?;
    if rest.is_empty() {
        return Some(String::new());
    }
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim().to_string())
    } else {
        None
    }
}

fn section(content: &str) -> Option<LineKind> {
    let captures = SECTION.captures(content)?;
    let path = captures[2]
        .split(">>")
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(String::from)
        .collect();
    Some(LineKind::Section {
        path,
        opening: captures[1].len(),
        closing: captures[3].len(),
    })
}

fn admonition(content: &str) -> Option<LineKind> {
    let captures = ADMONITION.captures(content)?;
    let title = captures[2].trim();
    Some(LineKind::Admonition {
        severity: captures[1].to_string(),
        title: (!title.is_empty()).then(|| title.to_string()),
    })
}

fn key(content: &str) -> Option<LineKind> {
    let inner = content.strip_prefix('/')?.strip_suffix('/')?;
    if inner.trim().is_empty() {
        return None;
    }
    Some(LineKind::Key(inner.to_string()))
}

fn syntax_open(content: &str) -> Option<LineKind> {
    let captures = SYNTAX.captures(content)?;
    let qualifier = captures[2].trim();
    Some(LineKind::SyntaxOpen {
        syntax_type: captures[1].to_string(),
        qualifier: (!qualifier.is_empty()).then(|| qualifier.to_string()),
    })
}
