//! Text layout.
//!
//! Walks the input text, positions each glyph with a running cursor and wraps
//! lines once the cursor passes the configured line length. The result is one
//! [`CharacterRun`] per input character, in input order.

use tracing::{debug, trace};

use crate::error::{ParameterError, Result, TextPathError};
use crate::instruction::Instruction;
use crate::repository::GlyphRepository;

/// Parameters controlling layout and multi-pass expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Cursor x at or beyond which the line wraps
    pub line_length: f64,
    /// Vertical distance between consecutive lines
    pub line_spacing: f64,
    /// Extra space after each character; negative values overlap glyphs
    pub padding: f64,
    /// Number of stroke passes per drawn character
    pub passes: u32,
    /// Height of the anchor moves bracketing each expanded character
    pub baseline: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            line_length: 100.0,
            line_spacing: 8.0,
            padding: 1.5,
            passes: 1,
            baseline: 0.0,
        }
    }
}

impl LayoutParams {
    /// Creates single-pass parameters on a zero baseline.
    pub fn new(line_length: f64, line_spacing: f64, padding: f64) -> Self {
        Self {
            line_length,
            line_spacing,
            padding,
            passes: 1,
            baseline: 0.0,
        }
    }

    pub fn with_passes(mut self, passes: u32) -> Self {
        self.passes = passes;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Rejects negative spacing, zero passes and non-finite values.
    pub fn validate(&self) -> std::result::Result<(), ParameterError> {
        let finite = [
            ("line_length", self.line_length),
            ("line_spacing", self.line_spacing),
            ("padding", self.padding),
            ("baseline", self.baseline),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }

        for (name, value) in [
            ("line_length", self.line_length),
            ("line_spacing", self.line_spacing),
        ] {
            if value < 0.0 {
                return Err(ParameterError::Negative { name, value });
            }
        }

        if self.passes == 0 {
            return Err(ParameterError::ZeroPasses);
        }

        Ok(())
    }
}

/// What a run represents in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// A drawn glyph, eligible for multi-pass expansion
    Glyph,
    /// A space; advances the cursor only
    Space,
    /// A newline; forces a line break
    Newline,
}

impl RunKind {
    pub fn of(ch: char) -> Self {
        match ch {
            ' ' => RunKind::Space,
            '\n' => RunKind::Newline,
            _ => RunKind::Glyph,
        }
    }
}

/// Positioned instructions produced by one input character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRun {
    pub ch: char,
    pub kind: RunKind,
    /// Cursor x at which the glyph was placed
    pub offset_x: f64,
    /// Line offset at which the glyph was placed
    pub offset_y: f64,
    /// Absolute, tagged instructions; empty for spaces and newlines
    pub instructions: Vec<Instruction>,
}

impl CharacterRun {
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Running layout position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutCursor {
    pub x: f64,
    pub y: f64,
}

impl LayoutCursor {
    /// Moves right by `width + padding`, wrapping once `x >= line_length`.
    ///
    /// Returns `true` when the advance wrapped the line.
    pub fn advance(
        &mut self,
        width: f64,
        padding: f64,
        line_length: f64,
        line_spacing: f64,
    ) -> bool {
        self.x += width + padding;
        if self.x >= line_length {
            self.line_break(line_spacing);
            true
        } else {
            false
        }
    }

    /// Returns to the start of the next line down.
    pub fn line_break(&mut self, line_spacing: f64) {
        self.x = 0.0;
        self.y -= line_spacing;
    }
}

/// Places text glyph by glyph using a shared repository.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    repository: &'a GlyphRepository,
    params: LayoutParams,
}

impl<'a> LayoutEngine<'a> {
    /// Creates an engine after validating `params`.
    pub fn new(repository: &'a GlyphRepository, params: LayoutParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { repository, params })
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Lays out `text`, returning one run per character.
    ///
    /// Fails on the first character missing from the repository; no partial
    /// output is returned in that case.
    pub fn place(&self, text: &str) -> Result<Vec<CharacterRun>> {
        let params = &self.params;
        let mut cursor = LayoutCursor::default();
        let mut runs = Vec::with_capacity(text.len());

        for (position, ch) in text.chars().enumerate() {
            let glyph = self
                .repository
                .get(ch)
                .ok_or(TextPathError::UnknownCharacter { ch, position })?;

            let kind = RunKind::of(ch);
            let instructions = match kind {
                RunKind::Newline => Vec::new(),
                RunKind::Space | RunKind::Glyph => glyph.placed(cursor.x, cursor.y, ch),
            };
            runs.push(CharacterRun {
                ch,
                kind,
                offset_x: cursor.x,
                offset_y: cursor.y,
                instructions,
            });

            let wrapped = cursor.advance(
                glyph.advance_width(),
                params.padding,
                params.line_length,
                params.line_spacing,
            );
            // A newline glyph wider than any line always wraps, but a custom
            // finite-width newline glyph must still break the line.
            if kind == RunKind::Newline && !wrapped {
                cursor.line_break(params.line_spacing);
            }
            trace!(?ch, x = cursor.x, y = cursor.y, wrapped, "Placed character");
        }

        debug!(
            "Laid out {} characters over {} lines",
            runs.len(),
            line_count(&runs, params.line_spacing)
        );
        Ok(runs)
    }
}

/// Number of distinct line offsets used by `runs`.
fn line_count(runs: &[CharacterRun], line_spacing: f64) -> usize {
    if runs.is_empty() {
        return 0;
    }
    if line_spacing == 0.0 {
        return 1;
    }
    let lowest = runs.iter().map(|run| run.offset_y).fold(0.0_f64, f64::min);
    (-lowest / line_spacing).round() as usize + 1
}
