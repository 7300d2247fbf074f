//! Lexer
//!
//!     Lexing turns source text into the event stream the structural parser consumes.
//!     It runs in three steps:
//!
//!         1. Core tokenization with logos. See [base_tokenization](base_tokenization).
//!            Indentation units (a tab or four spaces) are only recognized at the start
//!            of a line, everything after them is a single Text token.
//!
//!         2. Line grouping. The tokens of each physical line become a
//!            [SourceLine](crate::tabmark::token::SourceLine), recording its level and
//!            keeping the raw text around for literal blocks.
//!
//!         3. Scanning. See [scanner](scanner). Each line is classified through the
//!            command table of the current frame (see
//!            [line_classification](line_classification)) and indentation changes
//!            become explicit Enter/Exit events.
//!
//!     Inline content is not touched here: paragraph, item and key events carry their
//!     text as-is and the parser runs it through [inlines](crate::tabmark::inlines).

pub mod base_tokenization;
pub mod line_classification;
pub mod scanner;

pub use base_tokenization::{source_lines, tokenize};
pub use line_classification::{classify, LineKind};
pub use scanner::Scanner;

use crate::tabmark::config::Profile;
use crate::tabmark::token::Event;

/// Collect the complete event stream of a source.
///
/// The parser reads the scanner lazily; this is mostly useful for inspection and tests.
pub fn scan(source: &str, profile: &Profile) -> Vec<Event> {
    Scanner::new(source_lines(source), profile).collect()
}
