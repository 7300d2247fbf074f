//! Treeviz formatter
//!
//! One line per node, nesting drawn with box connectors. Useful for eyeballing the
//! shape of a parse:
//!
//!   ⧉ Document
//!   ├─ § Intro
//!   │ ├─ ¶ Some emphasis here
//!   │ │ ├─ ◦ Some
//!   │ │ └─ 𝐼 emphasis here
//!   │ └─ ☰ 2 items
//!   └─ ! NOTE: careful
//!
//! Labels are truncated to 30 characters.
//!
//! Icons
//!     Document: ⧉      Section: §       Paragraph: ¶
//!     Set: ☰           Sequence: ☷      Item: •
//!     Dictionary: ≔    Entry: ⊤         Admonition: !
//!     Syntax: 𝒱        Line: ℣          Quote: ❝
//!     Exception: ⚠
//!     Fragments by type string: text ◦, emphasis 𝐼 𝐁 𝐁𝐼, literal ƒ, reference ⊕

use crate::tabmark::document::{snapshot_from_document, Document, Snapshot};

use super::registry::{FormatError, Formatter};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Section" => "§",
        "Paragraph" => "¶",
        "Set" => "☰",
        "Sequence" => "☷",
        "Item" => "•",
        "Dictionary" => "≔",
        "Entry" => "⊤",
        "Admonition" => "!",
        "Syntax" => "𝒱",
        "Line" => "℣",
        "Quote" => "❝",
        "Exception" => "⚠",
        fragment if fragment.starts_with("text/emphasis/1") => "𝐼",
        fragment if fragment.starts_with("text/emphasis/2") => "𝐁",
        fragment if fragment.starts_with("text/emphasis/3") => "𝐁𝐼",
        fragment if fragment.starts_with("text/") => "◦",
        fragment if fragment.starts_with("literal/") => "ƒ",
        fragment if fragment.starts_with("reference/") => "⊕",
        _ => "○",
    }
}

fn format_snapshot(snapshot: &Snapshot, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, LABEL_WIDTH)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == count, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let snapshot = snapshot_from_document(doc);
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, LABEL_WIDTH)
    );
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i + 1 == count, &mut output);
    }
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "Visual tree with one line per node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabmark::parse;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer label", 8), "a longer...");
    }

    #[test]
    fn test_treeviz_output() {
        let doc = parse("[Intro]\n*Emphasis*\n\n- a\n- b\n");
        insta::assert_snapshot!(to_treeviz_str(&doc), @r"
        ⧉ Document
        └─ § Intro
          ├─ ¶ Emphasis
          │ └─ 𝐼 Emphasis
          └─ ☰ 2 items
            ├─ • a
            │ └─ ¶ a
            │   └─ ◦ a
            └─ • b
              └─ ¶ b
                └─ ◦ b
        ");
    }
}
