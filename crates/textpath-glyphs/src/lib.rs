//! # TextPath Glyphs
//!
//! Filesystem side of TextPath: a [`DirectoryGlyphSource`] that feeds glyph
//! definition files into the core repository, and helpers for reading the
//! input text and writing the compiled toolpath.

pub mod directory;
pub mod error;
pub mod file_io;

pub use directory::{DirectoryGlyphSource, GlyphFile};
pub use error::{GlyphIoError, GlyphIoResult};
pub use file_io::{read_text, write_toolpath, STDIO_PATH};

use std::path::Path;

use textpath_core::{Glyph, GlyphRepository, SourceError};
use tracing::warn;

/// Builds a repository from the glyph files below `dir`.
///
/// A malformed definition is reported with the path of its file.
pub fn load_repository(dir: impl AsRef<Path>, space_width: f64) -> GlyphIoResult<GlyphRepository> {
    let source = DirectoryGlyphSource::load(dir)?;
    for path in source.shadowed() {
        warn!("Glyph in {} is overridden by a later file", path.display());
    }

    let mut builder = GlyphRepository::builder().space_width(space_width);
    for file in source.files() {
        let glyph = Glyph::parse(&file.block).map_err(|err| GlyphIoError::InvalidDefinition {
            path: file.path.clone(),
            source: SourceError::InvalidGlyph {
                symbol: file.symbol,
                source: err,
            },
        })?;
        builder = builder.glyph(file.symbol, glyph);
    }
    Ok(builder.build())
}
