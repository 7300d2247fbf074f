//! Raw document tree
//!
//!     The structural parser builds an arena of nodes addressed by [NodeId]. The
//!     root is always the Document node. Nodes hold their children as ids, so the
//!     builder can keep handles to open containers (the current section, the open
//!     paragraph, the open dictionary) while it keeps appending.
//!
//!     The raw tree still carries inline events as the stylizer produced them. The
//!     exporter turns it into the typed [Document](crate::tabmark::document::Document).
//!
//!     Problems found while parsing are recorded two ways, see [diagnostics]:
//!     warnings live next to the tree, exceptions are nodes inside it.

pub mod diagnostics;
pub mod tree;

pub use diagnostics::{Exception, Warning};
pub use tree::{Node, NodeId, NodeKind, Tree};
