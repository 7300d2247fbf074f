//! Structural parser
//!
//!     The parser consumes the scanner's event stream and assembles the raw
//!     [Tree](crate::tabmark::ast::Tree). Indentation arrives as explicit Enter and Exit
//!     events, so the builder is a plain recursive descent: each structure that owns an
//!     indented body (list item, dictionary value, admonition, syntax block) descends
//!     one level and returns when the matching Exit arrives.
//!
//!     Structures end by running into an event they do not handle. That event is
//!     pushed back onto the cursor (see [cursor]) and the builder returns
//!     [Outcome::Replay], so the parent sees it next. This is how a list hands a
//!     paragraph line back to its container, or an item body hands an Exit to the list.
//!
//!     Nothing here fails. Events that fit nowhere become Exception nodes at the place
//!     they occurred and parsing goes on.

pub mod builder;
pub mod cursor;

pub use builder::{Outcome, TreeBuilder};
pub use cursor::Events;

use crate::tabmark::ast::Tree;
use crate::tabmark::config::Profile;

/// Parse a source into the raw tree.
pub fn parse_tree(source: &str, profile: &Profile) -> Tree {
    TreeBuilder::new(source, profile).build()
}
