//! Dictionary assertions

use super::{assert_child, assert_child_count};
use crate::tabmark::document::{Dictionary, Entry};
use crate::tabmark::testing::matchers::TextMatch;
use crate::tabmark::testing::ElementAssertion;

pub struct DictionaryAssertion<'a> {
    pub(crate) dictionary: &'a Dictionary,
    pub(crate) context: String,
}

impl<'a> DictionaryAssertion<'a> {
    pub fn entry_count(self, expected: usize) -> Self {
        let actual = self.dictionary.entries.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} entries, found {} entries",
            self.context, expected, actual
        );
        self
    }
    /// Key texts of all entries, in order.
    pub fn keys(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self.dictionary.entries.iter().map(|entry| entry.key.text()).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected keys {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }
    pub fn entry<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(EntryAssertion<'a>) -> R,
    {
        assert!(
            index < self.dictionary.entries.len(),
            "{}: Entry index {} out of bounds ({} entries)",
            self.context,
            index,
            self.dictionary.entries.len()
        );
        assertion(EntryAssertion {
            entry: &self.dictionary.entries[index],
            context: format!("{}:entries[{}]", self.context, index),
        });
        self
    }
}

pub struct EntryAssertion<'a> {
    pub(crate) entry: &'a Entry,
    pub(crate) context: String,
}

impl<'a> EntryAssertion<'a> {
    pub fn key(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.entry.key.text(), &self.context);
        self
    }
    pub fn value_count(self, expected: usize) -> Self {
        assert_child_count(&self.entry.value, expected, &format!("{}:value", self.context));
        self
    }
    pub fn value<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>) -> R,
    {
        assert_child(&self.entry.value, index, &format!("{}:value", self.context), assertion);
        self
    }
}
