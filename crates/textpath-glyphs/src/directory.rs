//! Glyph definitions read from a directory tree.
//!
//! Every regular file below the root is one definition: the second character
//! of its first line names the glyph and the remaining lines hold the
//! instruction block. Files are applied in sorted path order, so when two
//! files define the same glyph the later path wins.

use std::fs;
use std::path::{Path, PathBuf};

use textpath_core::{split_definition, GlyphSource};
use tracing::{debug, warn};

use crate::error::{GlyphIoError, GlyphIoResult};

/// One definition loaded from disk.
#[derive(Debug, Clone)]
pub struct GlyphFile {
    pub path: PathBuf,
    pub symbol: char,
    pub block: String,
}

/// Glyph source backed by a directory of definition files.
#[derive(Debug, Clone, Default)]
pub struct DirectoryGlyphSource {
    root: PathBuf,
    files: Vec<GlyphFile>,
}

impl DirectoryGlyphSource {
    /// Reads every definition below `root`.
    pub fn load(root: impl AsRef<Path>) -> GlyphIoResult<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(GlyphIoError::DirectoryNotFound(root));
        }

        let mut paths = Vec::new();
        collect_files(&root, &mut paths)?;
        paths.sort();

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let content = fs::read_to_string(&path).map_err(|err| GlyphIoError::io(&path, err))?;
            let (symbol, block) = split_definition(&content).map_err(|source| {
                GlyphIoError::InvalidDefinition {
                    path: path.clone(),
                    source,
                }
            })?;
            let block = block.to_string();
            files.push(GlyphFile {
                path,
                symbol,
                block,
            });
        }

        debug!("Loaded {} glyph definitions from {}", files.len(), root.display());
        Ok(Self { root, files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[GlyphFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Paths of files whose symbol is defined again by a later file.
    pub fn shadowed(&self) -> Vec<&Path> {
        self.files
            .iter()
            .enumerate()
            .filter(|(i, file)| self.files[i + 1..].iter().any(|f| f.symbol == file.symbol))
            .map(|(_, file)| file.path.as_path())
            .collect()
    }
}

impl GlyphSource for DirectoryGlyphSource {
    fn entries(&self) -> Box<dyn Iterator<Item = (char, &str)> + '_> {
        Box::new(self.files.iter().map(|f| (f.symbol, f.block.as_str())))
    }
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> GlyphIoResult<()> {
    let entries = fs::read_dir(dir).map_err(|err| GlyphIoError::io(dir, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| GlyphIoError::io(dir, err))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| GlyphIoError::io(&path, err))?;

        if file_type.is_dir() {
            collect_files(&path, out)?;
        } else if file_type.is_file() {
            out.push(path);
        } else {
            warn!("Skipping non-regular file {}", path.display());
        }
    }
    Ok(())
}
