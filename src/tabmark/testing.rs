//! Testing utilities
//!
//!     Tests should not walk the document model by hand. Walking code is verbose, breaks
//!     whenever an element changes shape, and tends to check counts instead of content.
//!     The fluent API here abstracts over the model: a test states what it expects from
//!     an element, and only the assertion implementation knows where that lives.
//!
//!     Every assertion carries a context path (`items[1]:entries[0]:value[2]`) that is
//!     included in panic messages, so a failing test points at the element directly.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     use tabmark::tabmark::{parse, testing::assert_doc};
//!
//!     let doc = parse("[Intro]\nSome *text*\n\n- first\n- second\n");
//!
//!     assert_doc(&doc)
//!         .item_count(1)
//!         .item(0, |item| {
//!             item.assert_section()
//!                 .path(&["Intro"])
//!                 .child(0, |child| {
//!                     child.assert_paragraph()
//!                         .text("Some text")
//!                         .type_strings(&["text/normal", "text/emphasis/1"])
//!                 })
//!                 .child(1, |child| {
//!                     child.assert_set()
//!                         .item_count(2)
//!                         .item(1, |item| item.text("second"))
//!                 })
//!         });
//!     ```

mod assertions;
pub mod matchers;

pub use assertions::{
    AdmonitionAssertion, DictionaryAssertion, DocumentAssertion, EntryAssertion, ExceptionAssertion,
    FragmentAssertion, ItemAssertion, ListAssertion, ParagraphAssertion, QuoteAssertion,
    SectionAssertion, SyntaxAssertion,
};

use crate::tabmark::document::{Document, Element};

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct ElementAssertion<'a> {
    pub(crate) element: &'a Element,
    pub(crate) context: String,
}

impl<'a> ElementAssertion<'a> {
    fn unexpected(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.element.name()
        )
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.element {
            Element::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            _ => self.unexpected("Paragraph"),
        }
    }

    pub fn assert_section(self) -> SectionAssertion<'a> {
        match self.element {
            Element::Section(section) => SectionAssertion {
                section,
                context: self.context,
            },
            _ => self.unexpected("Section"),
        }
    }

    pub fn assert_set(self) -> ListAssertion<'a> {
        match self.element {
            Element::Set(list) => ListAssertion {
                list,
                context: self.context,
            },
            _ => self.unexpected("Set"),
        }
    }

    pub fn assert_sequence(self) -> ListAssertion<'a> {
        match self.element {
            Element::Sequence(list) => ListAssertion {
                list,
                context: self.context,
            },
            _ => self.unexpected("Sequence"),
        }
    }

    pub fn assert_dictionary(self) -> DictionaryAssertion<'a> {
        match self.element {
            Element::Dictionary(dictionary) => DictionaryAssertion {
                dictionary,
                context: self.context,
            },
            _ => self.unexpected("Dictionary"),
        }
    }

    pub fn assert_admonition(self) -> AdmonitionAssertion<'a> {
        match self.element {
            Element::Admonition(admonition) => AdmonitionAssertion {
                admonition,
                context: self.context,
            },
            _ => self.unexpected("Admonition"),
        }
    }

    pub fn assert_syntax(self) -> SyntaxAssertion<'a> {
        match self.element {
            Element::Syntax(syntax) => SyntaxAssertion {
                syntax,
                context: self.context,
            },
            _ => self.unexpected("Syntax"),
        }
    }

    pub fn assert_quote(self) -> QuoteAssertion<'a> {
        match self.element {
            Element::Quote(quote) => QuoteAssertion {
                quote,
                context: self.context,
            },
            _ => self.unexpected("Quote"),
        }
    }

    pub fn assert_exception(self) -> ExceptionAssertion<'a> {
        match self.element {
            Element::Exception(exception) => ExceptionAssertion {
                exception,
                context: self.context,
            },
            _ => self.unexpected("Exception"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabmark::parse;

    #[test]
    fn test_fluent_walk() {
        let doc = parse("[Intro]\nSome *text*\n\n- first\n- second\n");
        assert_doc(&doc).item_count(1).item(0, |item| {
            item.assert_section()
                .path(&["Intro"])
                .child_count(2)
                .child(0, |child| {
                    child
                        .assert_paragraph()
                        .text("Some text")
                        .type_strings(&["text/normal", "text/emphasis/1"])
                })
                .child(1, |child| {
                    child.assert_set().item_count(2).item(1, |item| {
                        item.text("second");
                    });
                });
        });
    }

    #[test]
    #[should_panic(expected = "items[0]: Expected Dictionary, found Paragraph")]
    fn test_wrong_kind_names_context() {
        let doc = parse("text\n");
        assert_doc(&doc).item(0, |item| {
            item.assert_dictionary();
        });
    }

    #[test]
    #[should_panic(expected = "Expected 2 items, found 1 items: [Paragraph]")]
    fn test_item_count_lists_kinds() {
        let doc = parse("text\n");
        assert_doc(&doc).item_count(2);
    }
}
