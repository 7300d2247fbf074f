//! Token types shared by the lexer and the structural parser.
//!
//! Token Layers
//!
//!     Core Tokens:
//!         Produced by the logos lexer. There are only four of them: one unit of
//!         indentation (a tab or four spaces), short runs of spaces, newlines and the
//!         text that makes up the rest of a line. See [core](core).
//!
//!     Source Lines:
//!         Core tokens grouped per physical line, carrying the indentation level,
//!         the raw text and the content with indentation removed. See [line](line).
//!
//!     Events:
//!         What the parser actually consumes. Each classified line becomes one event,
//!         bracketed by Enter/Exit events whenever indentation changes. See [event](event).

pub mod core;
pub mod event;
pub mod line;

pub use core::Token;
pub use event::{Event, EventKind};
pub use line::SourceLine;
