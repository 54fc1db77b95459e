//! Error types for the glyph I/O crate.

use std::io;
use std::path::PathBuf;

use textpath_core::SourceError;
use thiserror::Error;

/// Errors that can occur while loading glyphs or moving text through files.
#[derive(Error, Debug)]
pub enum GlyphIoError {
    /// The glyph directory does not exist or is not a directory.
    #[error("Glyph directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A glyph definition file is malformed.
    #[error("Invalid glyph file {path}: {source}")]
    InvalidDefinition {
        path: PathBuf,
        #[source]
        source: SourceError,
    },
}

impl GlyphIoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for glyph I/O operations.
pub type GlyphIoResult<T> = Result<T, GlyphIoError>;
