//! Glyph definitions.
//!
//! A glyph is an immutable polyline for one character together with the
//! horizontal advance used to place the next character.

use std::fmt;

use crate::error::{FormatError, FormatResult};
use crate::instruction::Instruction;

/// Immutable polyline definition for one character.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    instructions: Vec<Instruction>,
    advance_width: f64,
}

impl Glyph {
    /// Parses a raw block of `G X Y` lines; blank lines are ignored.
    ///
    /// The advance width is the horizontal extent of the parsed points. A
    /// block without any instruction has no extent and is rejected; use
    /// [`Glyph::blank`] or [`Glyph::from_parts`] for sentinel glyphs.
    pub fn parse(block: &str) -> FormatResult<Self> {
        let instructions = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Instruction::parse_source_line)
            .collect::<FormatResult<Vec<_>>>()?;

        let (min_x, max_x) =
            horizontal_extent(&instructions).ok_or(FormatError::NoInstructions)?;
        let advance_width = max_x - min_x;

        Ok(Self {
            instructions,
            advance_width,
        })
    }

    /// Builds a glyph from an explicit instruction list and width.
    pub fn from_parts(instructions: Vec<Instruction>, advance_width: f64) -> Self {
        Self {
            instructions,
            advance_width,
        }
    }

    /// Creates a glyph that draws nothing but still advances the cursor.
    pub fn blank(advance_width: f64) -> Self {
        Self::from_parts(Vec::new(), advance_width)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn advance_width(&self) -> f64 {
        self.advance_width
    }

    pub fn is_blank(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns the glyph's instructions shifted by `(dx, dy)` and tagged with `ch`.
    pub fn placed(&self, dx: f64, dy: f64, ch: char) -> Vec<Instruction> {
        self.instructions
            .iter()
            .map(|instr| instr.translated(dx, dy).tagged(ch))
            .collect()
    }
}

/// Renders the glyph back into its source block form.
impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instr in &self.instructions {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}

/// Minimum and maximum x over a run of instructions.
pub(crate) fn horizontal_extent(instructions: &[Instruction]) -> Option<(f64, f64)> {
    instructions.iter().fold(None, |acc, instr| {
        let x = instr.x();
        Some(match acc {
            None => (x, x),
            Some((min_x, max_x)) => (min_x.min(x), max_x.max(x)),
        })
    })
}
