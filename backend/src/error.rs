//! Generator errors
//!
//! Every variant is fatal for a generation run. Lookup misses are not
//! errors (see [`crate::lookup::resolver`]) and an unknown cost category is
//! reported separately as [`crate::models::InvalidCategory`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Input dataset missing or unreadable
    #[error("Failed to read county dataset {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input dataset is not the expected JSON shape
    #[error("Failed to parse county dataset {}: {source}", .path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output artifact could not be written
    #[error("Failed to write generated module {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rendering into the in-memory buffer failed
    #[error("Failed to render generated module: {0}")]
    Render(#[from] std::fmt::Error),
}
