//! Errors of the tabmark front end.
//!
//! Parsing itself never fails: problems in the input are reported as warnings and
//! exception nodes inside the document. These errors cover everything around it.

use std::path::PathBuf;

use thiserror::Error;

use crate::tabmark::formats::FormatError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
