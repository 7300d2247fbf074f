//! Syntax block assertions

use crate::tabmark::document::Syntax;

pub struct SyntaxAssertion<'a> {
    pub(crate) syntax: &'a Syntax,
    pub(crate) context: String,
}

impl<'a> SyntaxAssertion<'a> {
    pub fn syntax_type(self, expected: &str) -> Self {
        assert_eq!(
            self.syntax.syntax_type, expected,
            "{}: Expected syntax type '{}', found '{}'",
            self.context, expected, self.syntax.syntax_type
        );
        self
    }
    pub fn qualifier(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.syntax.qualifier.as_deref(),
            expected,
            "{}: Expected qualifier {:?}, found {:?}",
            self.context,
            expected,
            self.syntax.qualifier
        );
        self
    }
    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.syntax.lines, expected,
            "{}: Expected lines {:?}, found {:?}",
            self.context, expected, self.syntax.lines
        );
        self
    }
}
