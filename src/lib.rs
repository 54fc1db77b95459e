//! # TextPath
//!
//! Converts plain text into a 2D pen toolpath for plotters and engravers,
//! using per-character glyph definitions.
//!
//! ## Architecture
//!
//! TextPath is organized as a workspace with multiple crates:
//!
//! 1. **textpath-core** - Glyphs, repository, layout, multi-pass expansion, toolpath format
//! 2. **textpath-glyphs** - Directory glyph source and file I/O
//! 3. **textpath-settings** - Configuration files and validation
//! 4. **textpath** - Command-line front end that integrates all crates

pub mod cli;

pub use textpath_core::{
    compile, compile_instructions, preview, GlyphRepository, Instruction, LayoutParams, Motion,
    TextPathError,
};
pub use textpath_glyphs::{load_repository, read_text, write_toolpath, GlyphIoError};
pub use textpath_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout can carry the toolpath
/// - RUST_LOG environment variable support
/// - `info` as the default level, raised by `verbose`
/// - One JSON object per event when `json` is set
pub fn init_logging(verbose: bool, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false);
        registry.with(fmt_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .compact();
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
