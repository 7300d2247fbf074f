//! Configuration loading and the precomputed parsing profile.
//!
//! `defaults/tabmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top of
//! those defaults via [`Loader`] before deserializing into [`TabmarkConfig`].
//!
//! The parser never reads configuration directly: [`Profile`] is computed once from
//! the `[parsing]` table and is immutable afterwards, so a single profile can be
//! shared by any number of parses.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/tabmark.default.toml");

/// Top-level configuration consumed by tabmark applications.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct TabmarkConfig {
    pub parsing: ParsingConfig,
    pub rendering: RenderingConfig,
}

/// Knobs of the line classifier and the structural parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub decoration_characters: String,
    pub decoration_minimum: usize,
    pub decoration_variety: usize,
    pub context_keyword: String,
    pub nesting_limit: usize,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            decoration_characters: "-=_*~+#.".to_string(),
            decoration_minimum: 5,
            decoration_variety: 3,
            context_keyword: "CONTEXT".to_string(),
            nesting_limit: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderingConfig {
    pub indentation: String,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            indentation: "\t".to_string(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TabmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Precomputed lexical tables for one parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    decoration: BTreeSet<char>,
    decoration_minimum: usize,
    decoration_variety: usize,
    context_keyword: String,
    nesting_limit: usize,
}

impl Profile {
    pub fn new(config: &ParsingConfig) -> Self {
        Self {
            decoration: config.decoration_characters.chars().collect(),
            decoration_minimum: config.decoration_minimum,
            decoration_variety: config.decoration_variety,
            context_keyword: config.context_keyword.clone(),
            nesting_limit: config.nesting_limit,
        }
    }

    /// Whether a line's content is a content-free separator.
    pub fn is_decoration(&self, content: &str) -> bool {
        if content.chars().count() < self.decoration_minimum {
            return false;
        }
        let mut distinct = BTreeSet::new();
        for ch in content.chars() {
            if !self.decoration.contains(&ch) {
                return false;
            }
            distinct.insert(ch);
        }
        distinct.len() <= self.decoration_variety
    }

    pub fn context_keyword(&self) -> &str {
        &self.context_keyword
    }

    pub fn nesting_limit(&self) -> usize {
        self.nesting_limit
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(&ParsingConfig::default())
    }
}

impl From<&TabmarkConfig> for Profile {
    fn from(config: &TabmarkConfig) -> Self {
        Self::new(&config.parsing)
    }
}
