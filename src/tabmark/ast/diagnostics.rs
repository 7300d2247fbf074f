//! Parse diagnostics.

use std::fmt;

use serde::Serialize;

use crate::tabmark::token::Event;

/// Suspicious but resolvable input. The tree shape is not affected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub line: usize,
    pub message: String,
}

impl Warning {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: warning: {}", self.line, self.message)
    }
}

/// An event the parser could not place, embedded in the tree where it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exception {
    /// Name of the offending event.
    pub event: String,
    pub line: usize,
    pub level: usize,
    pub parameters: Vec<String>,
    /// Source line of the event, without indentation.
    pub source: String,
    pub reason: String,
}

impl Exception {
    pub fn from_event(event: &Event, reason: impl Into<String>) -> Self {
        Self {
            event: event.name().to_string(),
            line: event.line,
            level: event.level,
            parameters: event.kind.parameters(),
            source: event.source.trim().to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: exception: unexpected {} event at level {}: {}",
            self.line, self.event, self.level, self.reason
        )
    }
}
