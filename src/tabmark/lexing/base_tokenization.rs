//! Base tokenization for the tabmark lexer
//!
//! This is where source strings become token streams, and where those tokens are
//! grouped into source lines. No classification happens here.

use crate::tabmark::token::{SourceLine, Token};
use logos::Logos;

/// Tokenize source text with location information.
///
/// Bytes logos cannot match are dropped.
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Split a source into lines, measuring the indentation of each one.
pub fn source_lines(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut builder = LineBuilder::new(0);

    for (token, span) in tokenize(source) {
        match token {
            Token::Indentation => {
                if builder.content.is_none() {
                    builder.level += 1;
                    builder.indent_ends.push(span.end - builder.start);
                }
            }
            Token::Whitespace => {}
            Token::Text => builder.content = Some(span),
            Token::Newline => {
                let next = LineBuilder::new(span.end);
                let done = std::mem::replace(&mut builder, next);
                lines.push(done.finish(source, span.start, lines.len() + 1));
            }
        }
    }

    if builder.start < source.len() {
        let end = source.len();
        lines.push(builder.finish(source, end, lines.len() + 1));
    }

    lines
}

struct LineBuilder {
    start: usize,
    level: usize,
    indent_ends: Vec<usize>,
    content: Option<logos::Span>,
}

impl LineBuilder {
    fn new(start: usize) -> Self {
        Self {
            start,
            level: 0,
            indent_ends: Vec::new(),
            content: None,
        }
    }

    fn finish(self, source: &str, end: usize, number: usize) -> SourceLine<'_> {
        let raw = &source[self.start..end];
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let content = match self.content {
            Some(span) => source[span].trim(),
            None => "",
        };
        SourceLine {
            number,
            level: self.level,
            raw,
            content,
            indent_ends: self.indent_ends,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("hello world");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, Token::Text);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(source_lines("").is_empty());
    }

    #[test]
    fn test_line_levels() {
        let lines = source_lines("top\n\tone\n        two\n  \nlast");
        let levels: Vec<_> = lines.iter().map(|l| (l.number, l.level, l.content)).collect();
        assert_eq!(
            levels,
            vec![
                (1, 0, "top"),
                (2, 1, "one"),
                (3, 2, "two"),
                (4, 0, ""),
                (5, 0, "last"),
            ]
        );
    }

    #[test]
    fn test_trailing_newline_does_not_add_a_line() {
        assert_eq!(source_lines("a\nb\n").len(), 2);
    }

    #[test]
    fn test_carriage_returns_are_stripped() {
        let lines = source_lines("one\r\n\ttwo\r\n");
        assert_eq!(lines[0].raw, "one");
        assert_eq!(lines[1].content, "two");
        assert_eq!(lines[1].raw, "\ttwo");
    }

    #[test]
    fn test_dedent_keeps_relative_indentation() {
        let lines = source_lines("\t\t\tdeep  code");
        assert_eq!(lines[0].dedent(1), "\t\tdeep  code");
        assert_eq!(lines[0].dedent(3), "deep  code");
    }
}
