//! Typed document model
//!
//!     This is the public result of a parse. Paragraph content is a list of
//!     [Fragment]s with stable type strings (see [fragment]); everything else is an
//!     [Element] tree. The model is plain data: it serializes with serde and is
//!     immutable once exported.

pub mod elements;
pub mod fragment;
pub mod snapshot;

pub use elements::{Admonition, Dictionary, Element, Entry, Item, List, Quote, Section, Syntax};
pub use fragment::{Fragment, FragmentType, Paragraph, UnknownFragmentType};
pub use snapshot::{snapshot_from_document, Snapshot};

use serde::Serialize;

use crate::tabmark::ast::{Exception, Warning};
use crate::tabmark::config::Profile;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub children: Vec<Element>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl Document {
    /// All elements depth-first, in document order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack: Vec<&Element> = self.children.iter().rev().collect();
        while let Some(element) = stack.pop() {
            out.push(element);
            stack.extend(element.children().into_iter().rev());
        }
        out
    }

    pub fn exceptions(&self) -> Vec<&Exception> {
        self.elements()
            .into_iter()
            .filter_map(|element| match element {
                Element::Exception(exception) => Some(exception),
                _ => None,
            })
            .collect()
    }

    /// Section with the given title path, at any depth.
    pub fn section(&self, path: &[&str]) -> Option<&Section> {
        self.elements().into_iter().find_map(|element| match element {
            Element::Section(section) if section.path.iter().map(String::as_str).eq(path.iter().copied()) => {
                Some(section)
            }
            _ => None,
        })
    }

    /// Metadata entries declared in top-level admonitions tagged with `keyword`.
    ///
    /// ```text
    /// ! CONTEXT: build
    ///     /target/
    ///         release
    /// ```
    ///
    /// yields `("target", [Paragraph "release"])`.
    pub fn context_metadata(&self, keyword: &str) -> Vec<(String, &[Element])> {
        self.children
            .iter()
            .filter_map(|element| match element {
                Element::Admonition(admonition) if admonition.severity == keyword => Some(admonition),
                _ => None,
            })
            .flat_map(|admonition| admonition.children.iter())
            .filter_map(|element| match element {
                Element::Dictionary(dictionary) => Some(dictionary),
                _ => None,
            })
            .flat_map(|dictionary| dictionary.entries.iter())
            .map(|entry| (entry.key.text(), entry.value.as_slice()))
            .collect()
    }

    /// [Document::context_metadata] under the profile's configured keyword.
    pub fn context_metadata_with(&self, profile: &Profile) -> Vec<(String, &[Element])> {
        self.context_metadata(profile.context_keyword())
    }
}
