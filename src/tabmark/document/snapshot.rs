//! Uniform snapshot of a document tree
//!
//! Formatters that only need labels and nesting work on a [Snapshot] instead of
//! matching every element kind themselves.

use serde::Serialize;

use super::elements::{Element, Item};
use super::fragment::{FragmentType, Paragraph};
use super::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub node_type: String,
    pub label: String,
    pub children: Vec<Snapshot>,
}

impl Snapshot {
    fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<Snapshot>) -> Self {
        self.children = children;
        self
    }
}

pub fn snapshot_from_document(doc: &Document) -> Snapshot {
    let label = match &doc.context {
        Some(context) => format!("Document #!{context}"),
        None => "Document".to_string(),
    };
    Snapshot::new("Document", label).with_children(elements(&doc.children))
}

fn elements(children: &[Element]) -> Vec<Snapshot> {
    children.iter().map(snapshot_from_element).collect()
}

pub fn snapshot_from_element(element: &Element) -> Snapshot {
    match element {
        Element::Section(section) => {
            Snapshot::new("Section", section.path_text()).with_children(elements(&section.children))
        }
        Element::Paragraph(paragraph) => paragraph_snapshot("Paragraph", paragraph),
        Element::Set(list) | Element::Sequence(list) => {
            let label = format!("{} items", list.items.len());
            let items = list.items.iter().map(item_snapshot).collect();
            Snapshot::new(element.name(), label).with_children(items)
        }
        Element::Dictionary(dictionary) => {
            let label = format!("{} entries", dictionary.entries.len());
            let entries = dictionary
                .entries
                .iter()
                .map(|entry| Snapshot::new("Entry", entry.key.text()).with_children(elements(&entry.value)))
                .collect();
            Snapshot::new("Dictionary", label).with_children(entries)
        }
        Element::Admonition(admonition) => {
            let label = match &admonition.title {
                Some(title) => format!("{}: {}", admonition.severity, title),
                None => admonition.severity.clone(),
            };
            Snapshot::new("Admonition", label).with_children(elements(&admonition.children))
        }
        Element::Syntax(syntax) => {
            let mut label = syntax.syntax_type.clone();
            if let Some(qualifier) = &syntax.qualifier {
                label.push(' ');
                label.push_str(qualifier);
            }
            let lines = syntax.lines.iter().map(|line| Snapshot::new("Line", line.clone())).collect();
            Snapshot::new("Syntax", label).with_children(lines)
        }
        Element::Quote(quote) => {
            let label = format!("{} elements", quote.children.len());
            Snapshot::new("Quote", label).with_children(elements(&quote.children))
        }
        Element::Exception(exception) => Snapshot::new("Exception", exception.reason.clone()),
    }
}

fn item_snapshot(item: &Item) -> Snapshot {
    let label = match item.children.first() {
        Some(Element::Paragraph(paragraph)) => paragraph.text(),
        _ => String::new(),
    };
    Snapshot::new("Item", label).with_children(elements(&item.children))
}

fn paragraph_snapshot(node_type: &str, paragraph: &Paragraph) -> Snapshot {
    let fragments = paragraph
        .fragments
        .iter()
        .filter(|fragment| fragment.kind != FragmentType::LineBreak)
        .map(|fragment| Snapshot::new(fragment.type_string(), fragment.data.clone()))
        .collect();
    Snapshot::new(node_type, paragraph.text()).with_children(fragments)
}
