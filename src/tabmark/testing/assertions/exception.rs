//! Exception assertions

use crate::tabmark::ast::Exception;
use crate::tabmark::testing::matchers::TextMatch;

pub struct ExceptionAssertion<'a> {
    pub(crate) exception: &'a Exception,
    pub(crate) context: String,
}

impl<'a> ExceptionAssertion<'a> {
    /// Name of the event that could not be placed.
    pub fn event(self, expected: &str) -> Self {
        assert_eq!(
            self.exception.event, expected,
            "{}: Expected exception for '{}' event, found '{}'",
            self.context, expected, self.exception.event
        );
        self
    }
    pub fn line(self, expected: usize) -> Self {
        assert_eq!(
            self.exception.line, expected,
            "{}: Expected exception on line {}, found line {}",
            self.context, expected, self.exception.line
        );
        self
    }
    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.exception.level, expected,
            "{}: Expected exception at level {}, found level {}",
            self.context, expected, self.exception.level
        );
        self
    }
    pub fn reason_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.exception.reason, &self.context);
        self
    }
}
