//! Set, Sequence and Item assertions

use super::{assert_child, assert_child_count};
use crate::tabmark::document::{Element, Item, List};
use crate::tabmark::testing::matchers::TextMatch;
use crate::tabmark::testing::ElementAssertion;

pub struct ListAssertion<'a> {
    pub(crate) list: &'a List,
    pub(crate) context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} list items, found {} list items",
            self.context, expected, actual
        );
        self
    }
    pub fn item<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>) -> R,
    {
        assert!(
            index < self.list.items.len(),
            "{}: Item index {} out of bounds (list has {} items)",
            self.context,
            index,
            self.list.items.len()
        );
        assertion(ItemAssertion {
            item: &self.list.items[index],
            context: format!("{}:items[{}]", self.context, index),
        });
        self
    }
}

pub struct ItemAssertion<'a> {
    pub(crate) item: &'a Item,
    pub(crate) context: String,
}

impl<'a> ItemAssertion<'a> {
    fn first_text(&self) -> String {
        match self.item.children.first() {
            Some(Element::Paragraph(para)) => para.text(),
            _ => String::new(),
        }
    }

    /// Text of the item's first paragraph.
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.first_text(), &self.context);
        self
    }
    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.first_text(), &self.context);
        self
    }
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.item.children, expected, &self.context);
        self
    }
    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>) -> R,
    {
        assert_child(&self.item.children, index, &self.context, assertion);
        self
    }
}
