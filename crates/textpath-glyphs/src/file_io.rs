//! Reading input text and writing toolpaths.
//!
//! The path `-` stands for standard input or standard output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{GlyphIoError, GlyphIoResult};

/// Path that selects a standard stream.
pub const STDIO_PATH: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Reads the text to compile from `path`, or from stdin for `-`.
pub fn read_text(path: impl AsRef<Path>) -> GlyphIoResult<String> {
    let path = path.as_ref();
    let text = if is_stdio(path) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| GlyphIoError::io(path, err))?;
        text
    } else {
        fs::read_to_string(path).map_err(|err| GlyphIoError::io(path, err))?
    };
    debug!("Read {} bytes of input from {}", text.len(), path.display());
    Ok(text)
}

/// Writes toolpath text to `path`, or to stdout for `-`.
pub fn write_toolpath(path: impl AsRef<Path>, toolpath: &str) -> GlyphIoResult<()> {
    let path = path.as_ref();
    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(toolpath.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|err| GlyphIoError::io(path, err))?;
    } else {
        fs::write(path, toolpath).map_err(|err| GlyphIoError::io(path, err))?;
    }
    debug!("Wrote {} bytes of toolpath to {}", toolpath.len(), path.display());
    Ok(())
}
