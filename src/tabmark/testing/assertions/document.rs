//! Document-level assertions

use super::summarize;
use crate::tabmark::document::Document;
use crate::tabmark::testing::ElementAssertion;

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.children.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize(&self.doc.children)
        );
        self
    }

    pub fn item<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>) -> R,
    {
        assert!(
            index < self.doc.children.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.children.len()
        );
        assertion(ElementAssertion {
            element: &self.doc.children[index],
            context: format!("items[{}]", index),
        });
        self
    }

    pub fn context(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.doc.context.as_deref(),
            expected,
            "Expected document context {:?}, found {:?}",
            expected,
            self.doc.context
        );
        self
    }

    pub fn warning_count(self, expected: usize) -> Self {
        let actual = self.doc.warnings.len();
        assert_eq!(
            actual, expected,
            "Expected {} warnings, found {}: {:?}",
            expected, actual, self.doc.warnings
        );
        self
    }

    /// Exceptions anywhere in the document.
    pub fn exception_count(self, expected: usize) -> Self {
        let actual = self.doc.exceptions().len();
        assert_eq!(
            actual, expected,
            "Expected {} exceptions, found {}",
            expected, actual
        );
        self
    }
}
