//! Output formats: the canonical text renderer plus inspection formats.

pub mod registry;
pub mod render;
pub mod structured;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use render::{Renderer, TabmarkFormatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
