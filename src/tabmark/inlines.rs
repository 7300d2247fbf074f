//! Inline stylizing
//!
//!     Paragraph lines, list item lines and dictionary keys are split into typed inline
//!     events here. Splitting happens in two passes: grave-accent literals first, then
//!     references and emphasis inside the text between literals. So nothing inside a
//!     literal is ever interpreted, and an emphasis span never crosses one.
//!
//!     Any of the typed events may be followed by a parenthesized cast, for example
//!     `` `x`(python) `` or `&[Intro](chapter)`, which is detached and recorded on the
//!     event. Plain text never takes a cast.

pub mod nodes;
pub mod parser;

pub use nodes::{Inline, InlineContent};
pub use parser::parse_inlines;
