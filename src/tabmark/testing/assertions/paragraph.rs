//! Paragraph and fragment assertions

use crate::tabmark::document::{Fragment, Paragraph};
use crate::tabmark::testing::matchers::TextMatch;

pub struct ParagraphAssertion<'a> {
    pub(crate) para: &'a Paragraph,
    pub(crate) context: String,
}

impl<'a> ParagraphAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn fragment_count(self, expected: usize) -> Self {
        let actual = self.para.fragments.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} fragments, found {}: {:?}",
            self.context,
            expected,
            actual,
            self.para.type_strings()
        );
        self
    }
    /// Type strings of all fragments, in order.
    pub fn type_strings(self, expected: &[&str]) -> Self {
        let actual = self.para.type_strings();
        assert_eq!(
            actual, expected,
            "{}: Expected fragment types {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }
    pub fn fragment<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(FragmentAssertion<'a>) -> R,
    {
        assert!(
            index < self.para.fragments.len(),
            "{}: Fragment index {} out of bounds ({} fragments)",
            self.context,
            index,
            self.para.fragments.len()
        );
        assertion(FragmentAssertion {
            fragment: &self.para.fragments[index],
            context: format!("{}:fragments[{}]", self.context, index),
        });
        self
    }
}

pub struct FragmentAssertion<'a> {
    pub(crate) fragment: &'a Fragment,
    pub(crate) context: String,
}

impl<'a> FragmentAssertion<'a> {
    pub fn type_string(self, expected: &str) -> Self {
        let actual = self.fragment.type_string();
        assert_eq!(
            actual, expected,
            "{}: Expected fragment type '{}', found '{}'",
            self.context, expected, actual
        );
        self
    }
    pub fn data(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.fragment.data, &self.context);
        self
    }
    pub fn cast(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.fragment.cast.as_deref(),
            expected,
            "{}: Expected cast {:?}, found {:?}",
            self.context,
            expected,
            self.fragment.cast
        );
        self
    }
    pub fn include(self, expected: bool) -> Self {
        assert_eq!(
            self.fragment.include, expected,
            "{}: Expected include flag {}, found {}",
            self.context, expected, self.fragment.include
        );
        self
    }
}
