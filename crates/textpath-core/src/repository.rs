//! Glyph repository and the sources it is built from.
//!
//! The repository maps single characters to [`Glyph`]s. It is built once from
//! a [`GlyphSource`] and is read-only afterwards, so a single value can be
//! shared by any number of layout calls.

use std::collections::HashMap;

use tracing::debug;

use crate::error::SourceError;
use crate::glyph::Glyph;

/// Advance width of the seeded space glyph.
pub const DEFAULT_SPACE_WIDTH: f64 = 4.0;

/// Capability that yields raw glyph definitions as `(symbol, block)` pairs.
///
/// Implementations decide where definitions come from; the repository only
/// sees parsed symbols and their instruction blocks.
pub trait GlyphSource {
    /// Yields every definition in the order it should be applied.
    fn entries(&self) -> Box<dyn Iterator<Item = (char, &str)> + '_>;
}

/// Splits a full definition text into its symbol and instruction block.
///
/// The symbol is the second character of the first line; the remaining lines
/// form the block. A header such as `(a)` therefore defines `a`.
pub fn split_definition(text: &str) -> Result<(char, &str), SourceError> {
    let (header, block) = match text.split_once('\n') {
        Some((header, block)) => (header, block),
        None => (text, ""),
    };
    let header = header.trim_end_matches('\r');

    let symbol = header
        .chars()
        .nth(1)
        .ok_or_else(|| SourceError::MissingSymbol {
            header: header.to_string(),
        })?;

    Ok((symbol, block))
}

/// Glyph definitions held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGlyphSource {
    entries: Vec<(char, String)>,
}

impl InMemoryGlyphSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition for `symbol`.
    pub fn with_glyph(mut self, symbol: char, block: impl Into<String>) -> Self {
        self.entries.push((symbol, block.into()));
        self
    }

    /// Builds a source from full definition texts, each with its header line.
    pub fn from_definitions<'a>(
        definitions: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, SourceError> {
        let mut source = Self::new();
        for text in definitions {
            let (symbol, block) = split_definition(text)?;
            source.entries.push((symbol, block.to_string()));
        }
        Ok(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GlyphSource for InMemoryGlyphSource {
    fn entries(&self) -> Box<dyn Iterator<Item = (char, &str)> + '_> {
        Box::new(self.entries.iter().map(|(ch, block)| (*ch, block.as_str())))
    }
}

/// Builder for [`GlyphRepository`].
#[derive(Debug, Clone)]
pub struct GlyphRepositoryBuilder {
    space_width: f64,
    glyphs: HashMap<char, Glyph>,
}

impl Default for GlyphRepositoryBuilder {
    fn default() -> Self {
        Self {
            space_width: DEFAULT_SPACE_WIDTH,
            glyphs: HashMap::new(),
        }
    }
}

impl GlyphRepositoryBuilder {
    /// Sets the advance width used for the seeded space glyph.
    pub fn space_width(mut self, width: f64) -> Self {
        self.space_width = width;
        self
    }

    /// Inserts a glyph, replacing any earlier one for the same character.
    pub fn glyph(mut self, ch: char, glyph: Glyph) -> Self {
        self.glyphs.insert(ch, glyph);
        self
    }

    /// Parses and inserts every definition of `source`.
    pub fn load<S: GlyphSource + ?Sized>(mut self, source: &S) -> Result<Self, SourceError> {
        for (symbol, block) in source.entries() {
            let glyph = Glyph::parse(block).map_err(|err| SourceError::InvalidGlyph {
                symbol,
                source: err,
            })?;
            self.glyphs.insert(symbol, glyph);
        }
        Ok(self)
    }

    /// Seeds the control characters and freezes the mapping.
    ///
    /// Entries already provided for space or newline take precedence over
    /// the seeded sentinels.
    pub fn build(self) -> GlyphRepository {
        let mut glyphs = HashMap::with_capacity(self.glyphs.len() + 2);
        glyphs.insert(' ', Glyph::blank(self.space_width));
        glyphs.insert('\n', Glyph::blank(f64::INFINITY));
        glyphs.extend(self.glyphs);

        debug!("Glyph repository built with {} glyphs", glyphs.len());
        GlyphRepository { glyphs }
    }
}

/// Read-only mapping from character to glyph.
#[derive(Debug, Clone)]
pub struct GlyphRepository {
    glyphs: HashMap<char, Glyph>,
}

impl Default for GlyphRepository {
    fn default() -> Self {
        GlyphRepositoryBuilder::default().build()
    }
}

impl GlyphRepository {
    pub fn builder() -> GlyphRepositoryBuilder {
        GlyphRepositoryBuilder::default()
    }

    /// Builds a repository from `source` with the default space width.
    pub fn from_source<S: GlyphSource + ?Sized>(source: &S) -> Result<Self, SourceError> {
        Ok(Self::builder().load(source)?.build())
    }

    pub fn get(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.glyphs.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterates over all glyphs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Glyph)> {
        self.glyphs.iter().map(|(ch, glyph)| (*ch, glyph))
    }

    /// Returns the distinct characters of `text` that have no glyph, in order
    /// of first occurrence.
    pub fn missing_characters(&self, text: &str) -> Vec<char> {
        let mut missing: Vec<char> = Vec::new();
        for ch in text.chars() {
            if !self.contains(ch) && !missing.contains(&ch) {
                missing.push(ch);
            }
        }
        missing
    }
}
