//! Element-specific assertion types.

mod admonition;
mod dictionary;
mod document;
mod exception;
mod list;
mod paragraph;
mod section;
mod syntax;

pub use admonition::{AdmonitionAssertion, QuoteAssertion};
pub use dictionary::{DictionaryAssertion, EntryAssertion};
pub use document::DocumentAssertion;
pub use exception::ExceptionAssertion;
pub use list::{ItemAssertion, ListAssertion};
pub use paragraph::{FragmentAssertion, ParagraphAssertion};
pub use section::SectionAssertion;
pub use syntax::SyntaxAssertion;

use crate::tabmark::document::Element;
use crate::tabmark::testing::ElementAssertion;

pub(super) fn summarize(elements: &[Element]) -> String {
    elements
        .iter()
        .map(Element::name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn assert_child_count(children: &[Element], expected: usize, context: &str) {
    let actual = children.len();
    assert_eq!(
        actual,
        expected,
        "{}: Expected {} children, found {} children: [{}]",
        context,
        expected,
        actual,
        summarize(children)
    );
}

pub(super) fn assert_child<'a, F, R>(children: &'a [Element], index: usize, context: &str, assertion: F)
where
    F: FnOnce(ElementAssertion<'a>) -> R,
{
    assert!(
        index < children.len(),
        "{}: Child index {} out of bounds ({} children)",
        context,
        index,
        children.len()
    );
    assertion(ElementAssertion {
        element: &children[index],
        context: format!("{}[{}]", context, index),
    });
}
