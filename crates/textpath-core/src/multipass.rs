//! Multiple stroke passes per character.
//!
//! Engraving a character several times deepens the cut. Each pass replays the
//! character's instructions, alternating direction so the pen ends each pass
//! where the next one begins. The expanded run is bracketed by two travel
//! anchors on a common baseline so that every character enters and leaves at
//! the same height regardless of its line.

use tracing::trace;

use crate::glyph::horizontal_extent;
use crate::instruction::Instruction;
use crate::layout::{CharacterRun, RunKind};

/// Traversal order of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Direction of the 1-based pass `pass`: odd passes run forward, even passes
/// run in reverse.
pub fn direction_for_pass(pass: u32) -> Direction {
    if pass % 2 == 0 {
        Direction::Reverse
    } else {
        Direction::Forward
    }
}

/// Concatenates `passes` traversals of `instructions` without anchors.
pub fn repeat_passes(instructions: &[Instruction], passes: u32) -> Vec<Instruction> {
    let mut out = Vec::with_capacity(instructions.len() * passes.max(1) as usize);
    for pass in 1..=passes.max(1) {
        match direction_for_pass(pass) {
            Direction::Forward => out.extend(instructions.iter().copied()),
            Direction::Reverse => out.extend(instructions.iter().rev().copied()),
        }
    }
    out
}

/// Expands character runs into multiple passes with baseline anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiPassExpander {
    passes: u32,
    baseline: f64,
}

impl MultiPassExpander {
    /// Creates an expander. A pass count of zero is treated as one.
    pub fn new(passes: u32, baseline: f64) -> Self {
        Self {
            passes: passes.max(1),
            baseline,
        }
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Expands one run; the anchors sit at `baseline + run.offset_y`.
    pub fn expand_run(&self, run: &CharacterRun) -> Vec<Instruction> {
        match run.kind {
            RunKind::Newline | RunKind::Space => run.instructions.clone(),
            RunKind::Glyph => self.expand(&run.instructions, self.baseline + run.offset_y),
        }
    }

    /// Expands a drawn run into its passes, bracketed by travel anchors at
    /// `(min_x, baseline)` and `(max_x, baseline)`.
    ///
    /// Both anchors carry the tag of the first instruction. An empty run has
    /// no extent and is returned empty.
    pub fn expand(&self, instructions: &[Instruction], baseline: f64) -> Vec<Instruction> {
        let repeated = repeat_passes(instructions, self.passes);
        let Some((min_x, max_x)) = horizontal_extent(&repeated) else {
            return repeated;
        };
        let tag = repeated[0].source_char();

        let mut out = Vec::with_capacity(repeated.len() + 2);
        out.push(Instruction::travel(min_x, baseline).with_tag(tag));
        out.extend(repeated);
        out.push(Instruction::travel(max_x, baseline).with_tag(tag));

        trace!(passes = self.passes, count = out.len(), "Expanded run into passes");
        out
    }
}
