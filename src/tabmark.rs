//! tabmark: a line-oriented, indentation-sensitive markup language
//!
//!     Text goes through four stages:
//!
//!         1. [lexing]: logos tokens are grouped into lines, each line is classified and
//!            the scanner emits parse events, with indentation changes spelled out as
//!            Enter/Exit events.
//!         2. [parsing]: a recursive builder with a replay cursor assembles the events
//!            into the raw [ast::Tree]. Paragraph lines go through [inlines] on the way.
//!         3. [export]: the raw tree becomes the typed [document::Document], with paragraph
//!            content as typed fragments.
//!         4. [formats]: the document is rendered back to canonical text, or serialized
//!            for inspection.
//!
//!     Parsing never fails. Suspicious input produces warnings, and events that fit
//!     nowhere are embedded in the tree as exception nodes.
//!
//!     ```rust,ignore
//!     let doc = tabmark::tabmark::parse("Some *emphasis*\n");
//!     assert_eq!(tabmark::tabmark::render_text(&doc), "Some *emphasis*\n");
//!     ```

pub mod ast;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod formats;
pub mod inlines;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;

pub use config::{Loader, Profile, TabmarkConfig};
pub use document::Document;
pub use error::{Error, Result};
pub use export::export;
pub use formats::{FormatRegistry, Renderer};
pub use parsing::parse_tree;

/// Parse with the default profile.
pub fn parse(source: &str) -> Document {
    parse_with(source, &Profile::default())
}

pub fn parse_with(source: &str, profile: &Profile) -> Document {
    export(&parse_tree(source, profile))
}

/// Render with the default indentation unit.
pub fn render(doc: &Document) -> Vec<String> {
    Renderer::default().render(doc)
}

pub fn render_text(doc: &Document) -> String {
    Renderer::default().render_text(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let doc = parse("Some *emphasis*\n");
        assert_eq!(render(&doc), vec!["Some *emphasis*"]);
        assert_eq!(render_text(&doc), "Some *emphasis*\n");
    }

    #[test]
    fn test_profile_changes_decorations() {
        let config = Loader::new()
            .set_override("parsing.decoration_minimum", 3_i64)
            .unwrap()
            .build()
            .unwrap();
        let profile = Profile::from(&config);
        assert!(parse_with("===\n", &profile).children.is_empty());
        assert_eq!(parse("===\n").children.len(), 1);
    }

    #[test]
    fn test_profile_sets_context_keyword() {
        let config = Loader::new()
            .set_override("parsing.context_keyword", "META")
            .unwrap()
            .build()
            .unwrap();
        let profile = Profile::from(&config);
        let doc = parse("! META:\n\t/owner/\n\t\tdocs\n\n! CONTEXT:\n\t/target/\n\t\trelease\n");

        let keys = |entries: Vec<(String, &[document::Element])>| -> Vec<String> {
            entries.into_iter().map(|(key, _)| key).collect()
        };
        assert_eq!(keys(doc.context_metadata_with(&profile)), vec!["owner"]);
        assert_eq!(keys(doc.context_metadata_with(&Profile::default())), vec!["target"]);
    }
}
