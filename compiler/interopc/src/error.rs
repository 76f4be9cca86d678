//! Driver errors.

use std::io;
use std::path::PathBuf;

use interop_codegen::{CodegenError, SignatureError};
use thiserror::Error;

/// Anything that stops the driver. Every variant maps to exit code 1.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid descriptor document `{}`: {source}", path.display())]
    Descriptors {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration `{}`: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

impl DriverError {
    pub fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }
}
