//! Typed elements.

use serde::Serialize;

use super::fragment::Paragraph;
use crate::tabmark::ast::Exception;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Section(Section),
    Paragraph(Paragraph),
    Set(List),
    Sequence(List),
    Dictionary(Dictionary),
    Admonition(Admonition),
    Syntax(Syntax),
    Quote(Quote),
    Exception(Exception),
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Section(_) => "Section",
            Element::Paragraph(_) => "Paragraph",
            Element::Set(_) => "Set",
            Element::Sequence(_) => "Sequence",
            Element::Dictionary(_) => "Dictionary",
            Element::Admonition(_) => "Admonition",
            Element::Syntax(_) => "Syntax",
            Element::Quote(_) => "Quote",
            Element::Exception(_) => "Exception",
        }
    }

    /// Elements one level down: section and container children, item bodies and
    /// dictionary values, in document order.
    pub fn children(&self) -> Vec<&Element> {
        match self {
            Element::Section(section) => section.children.iter().collect(),
            Element::Admonition(admonition) => admonition.children.iter().collect(),
            Element::Quote(quote) => quote.children.iter().collect(),
            Element::Set(list) | Element::Sequence(list) => list
                .items
                .iter()
                .flat_map(|item| item.children.iter())
                .collect(),
            Element::Dictionary(dictionary) => dictionary
                .entries
                .iter()
                .flat_map(|entry| entry.value.iter())
                .collect(),
            Element::Paragraph(_) | Element::Syntax(_) | Element::Exception(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub path: Vec<String>,
    pub multiplicity: usize,
    pub children: Vec<Element>,
}

impl Section {
    /// The last component of the title path.
    pub fn title(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or("")
    }

    /// The title path as written in a header.
    pub fn path_text(&self) -> String {
        self.path.join(" >> ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct List {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dictionary {
    pub entries: Vec<Entry>,
}

impl Dictionary {
    /// Value of the first entry whose key text equals `key`.
    pub fn get(&self, key: &str) -> Option<&[Element]> {
        self.entries
            .iter()
            .find(|entry| entry.key.text() == key)
            .map(|entry| entry.value.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: Paragraph,
    pub value: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Admonition {
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syntax {
    pub syntax_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub children: Vec<Element>,
}
