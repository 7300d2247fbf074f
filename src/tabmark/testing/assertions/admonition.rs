//! Admonition and Quote assertions

use super::{assert_child, assert_child_count};
use crate::tabmark::document::{Admonition, Quote};
use crate::tabmark::testing::ElementAssertion;

pub struct AdmonitionAssertion<'a> {
    pub(crate) admonition: &'a Admonition,
    pub(crate) context: String,
}

impl<'a> AdmonitionAssertion<'a> {
    pub fn severity(self, expected: &str) -> Self {
        assert_eq!(
            self.admonition.severity, expected,
            "{}: Expected severity '{}', found '{}'",
            self.context, expected, self.admonition.severity
        );
        self
    }
    pub fn title(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.admonition.title.as_deref(),
            expected,
            "{}: Expected title {:?}, found {:?}",
            self.context,
            expected,
            self.admonition.title
        );
        self
    }
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.admonition.children, expected, &self.context);
        self
    }
    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>) -> R,
    {
        assert_child(&self.admonition.children, index, &self.context, assertion);
        self
    }
}

pub struct QuoteAssertion<'a> {
    pub(crate) quote: &'a Quote,
    pub(crate) context: String,
}

impl<'a> QuoteAssertion<'a> {
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.quote.children, expected, &self.context);
        self
    }
    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>) -> R,
    {
        assert_child(&self.quote.children, index, &self.context, assertion);
        self
    }
}
