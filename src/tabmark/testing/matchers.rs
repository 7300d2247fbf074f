//! Text matching utilities for assertions

#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Panic with `context` unless `actual` matches.
    pub fn assert(&self, actual: &str, context: &str) {
        let (relation, expected) = match self {
            TextMatch::Exact(expected) => ("to be", expected),
            TextMatch::StartsWith(prefix) => ("to start with", prefix),
            TextMatch::Contains(substring) => ("to contain", substring),
        };
        assert!(
            self.matches(actual),
            "{}: Expected text {} '{}', but got '{}'",
            context,
            relation,
            expected,
            actual
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(TextMatch::Exact("a b".into()).matches("a b"));
        assert!(TextMatch::StartsWith("a".into()).matches("a b"));
        assert!(TextMatch::Contains(" b".into()).matches("a b"));
        assert!(!TextMatch::Exact("a".into()).matches("a b"));
    }

    #[test]
    #[should_panic(expected = "ctx: Expected text to start with 'x', but got 'a b'")]
    fn test_assert_reports_context() {
        TextMatch::StartsWith("x".into()).assert("a b", "ctx");
    }
}
