//! Format registry
//!
//! Each output format implements [Formatter] and is looked up by name, so the CLI
//! and library users pick formats the same way.

use std::collections::HashMap;

use thiserror::Error;

use super::render::{Renderer, TabmarkFormatter};
use super::structured::{JsonFormatter, YamlFormatter};
use super::treeviz::TreevizFormatter;
use crate::tabmark::document::Document;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

pub trait Formatter: Send + Sync {
    /// Name used to select the format, e.g. "treeviz".
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// Format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn with_defaults() -> Self {
        Self::with_renderer(Renderer::default())
    }

    /// Default formatters, with `tabmark` output produced by `renderer`.
    pub fn with_renderer(renderer: Renderer) -> Self {
        let mut registry = Self::new();
        registry.register(TabmarkFormatter::new(renderer));
        registry.register(TreevizFormatter);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.serialize(&Document::default(), "test").unwrap(), "test output");
    }

    #[test]
    fn test_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["json", "tabmark", "treeviz", "yaml"]);
    }

    #[test]
    fn test_missing_format() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.serialize(&Document::default(), "html"),
            Err(FormatError::FormatNotFound("html".into()))
        );
        assert_eq!(
            FormatError::FormatNotFound("html".into()).to_string(),
            "format 'html' not found"
        );
    }
}
