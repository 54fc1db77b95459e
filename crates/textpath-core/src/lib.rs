//! # TextPath Core
//!
//! Converts plain text into a 2D pen toolpath for plotters and engravers.
//!
//! ## Pipeline
//!
//! ```text
//! GlyphSource ──> GlyphRepository
//!                       │
//! text ──> LayoutEngine (cursor, wrapping) ──> CharacterRun per char
//!                                                   │
//!                 MultiPassExpander (passes, baseline anchors)
//!                                                   │
//!                          serializer::render ──> toolpath text
//! ```
//!
//! The repository is built once and shared read-only; every compile call is
//! an independent, pure transformation of its inputs.
//!
//! ## Usage
//!
//! ```rust
//! use textpath_core::{compile, GlyphRepository, InMemoryGlyphSource, LayoutParams};
//!
//! let source = InMemoryGlyphSource::new().with_glyph('-', "G0 X0 Y3\nG1 X4 Y3\n");
//! let repository = GlyphRepository::from_source(&source)?;
//! let toolpath = compile(&repository, "- -", &LayoutParams::default())?;
//! assert!(toolpath.starts_with("G0 X0.00000 Y0.00000 #-"));
//! # Ok::<(), textpath_core::TextPathError>(())
//! ```

pub mod error;
pub mod glyph;
pub mod instruction;
pub mod layout;
pub mod multipass;
pub mod pipeline;
pub mod preview;
pub mod repository;
pub mod serializer;

pub use error::{FormatError, ParameterError, Result, SourceError, TextPathError};
pub use glyph::Glyph;
pub use instruction::{Instruction, Motion};
pub use layout::{CharacterRun, LayoutCursor, LayoutEngine, LayoutParams, RunKind};
pub use multipass::{direction_for_pass, Direction, MultiPassExpander};
pub use pipeline::{compile, compile_instructions};
pub use preview::{Bounds, Preview, PreviewPoint};
pub use repository::{
    split_definition, GlyphRepository, GlyphRepositoryBuilder, GlyphSource, InMemoryGlyphSource,
    DEFAULT_SPACE_WIDTH,
};
