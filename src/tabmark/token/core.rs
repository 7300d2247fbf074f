//! Core tokens produced by the logos lexer.
//!
//! Indentation is recognized only at the start of a line: once a Text token begins
//! it runs to the end of the line, so tabs inside content never become Indentation.
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // One indentation level: a tab or exactly four spaces
    #[regex(r" {4}|\t", priority = 3)]
    Indentation,

    // Leftover spaces that do not make a full indentation level
    #[regex(r" {1,3}", priority = 1)]
    Whitespace,

    #[token("\n")]
    Newline,

    // Everything else up to the end of the line (a trailing \r included)
    #[regex(r"[^ \t\n][^\n]*")]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        Token::lexer(source).filter_map(Result::ok).collect()
    }

    #[test]
    fn test_indentation_units() {
        assert_eq!(kinds("\t"), vec![Token::Indentation]);
        assert_eq!(kinds("    "), vec![Token::Indentation]);
        assert_eq!(
            kinds("        x"),
            vec![Token::Indentation, Token::Indentation, Token::Text]
        );
    }

    #[test]
    fn test_partial_spaces_are_whitespace() {
        assert_eq!(kinds("  x"), vec![Token::Whitespace, Token::Text]);
    }

    #[test]
    fn test_text_runs_to_end_of_line() {
        assert_eq!(
            kinds("a\tb  c\n\tnext"),
            vec![Token::Text, Token::Newline, Token::Indentation, Token::Text]
        );
    }
}
