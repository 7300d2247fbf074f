//! Section assertions

use super::{assert_child, assert_child_count};
use crate::tabmark::document::Section;
use crate::tabmark::testing::ElementAssertion;

pub struct SectionAssertion<'a> {
    pub(crate) section: &'a Section,
    pub(crate) context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn path(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.section.path, expected,
            "{}: Expected section path {:?}, found {:?}",
            self.context, expected, self.section.path
        );
        self
    }
    pub fn multiplicity(self, expected: usize) -> Self {
        assert_eq!(
            self.section.multiplicity, expected,
            "{}: Expected multiplicity {}, found {}",
            self.context, expected, self.section.multiplicity
        );
        self
    }
    pub fn child_count(self, expected: usize) -> Self {
        assert_child_count(&self.section.children, expected, &self.context);
        self
    }
    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>) -> R,
    {
        assert_child(&self.section.children, index, &self.context, assertion);
        self
    }
}
