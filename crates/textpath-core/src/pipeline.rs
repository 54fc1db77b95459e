//! Text to toolpath compilation.
//!
//! Ties the stages together: layout, multi-pass expansion and serialization.
//! This is the boundary the command line and any other front end call into.

use tracing::debug;

use crate::error::Result;
use crate::instruction::Instruction;
use crate::layout::{LayoutEngine, LayoutParams};
use crate::multipass::MultiPassExpander;
use crate::repository::GlyphRepository;
use crate::serializer;

/// Lays out and expands `text`, returning the final instruction sequence.
pub fn compile_instructions(
    repository: &GlyphRepository,
    text: &str,
    params: &LayoutParams,
) -> Result<Vec<Instruction>> {
    let engine = LayoutEngine::new(repository, *params)?;
    let runs = engine.place(text)?;

    let expander = MultiPassExpander::new(params.passes, params.baseline);
    let instructions: Vec<Instruction> = runs
        .iter()
        .flat_map(|run| expander.expand_run(run))
        .collect();

    debug!(
        "Compiled {} characters into {} instructions ({} passes)",
        runs.len(),
        instructions.len(),
        params.passes
    );
    Ok(instructions)
}

/// Compiles `text` into toolpath text.
pub fn compile(repository: &GlyphRepository, text: &str, params: &LayoutParams) -> Result<String> {
    let instructions = compile_instructions(repository, text, params)?;
    Ok(serializer::render(&instructions))
}
