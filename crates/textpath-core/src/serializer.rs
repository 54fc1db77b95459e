//! Toolpath text format.
//!
//! Each instruction is written on its own line as
//! `G<k> X<x> Y<y> [#<c>]`, with coordinates at five decimal places and an
//! optional source character tag. Every line, the last included, ends with a
//! newline, so the text ends with an empty terminator line.
//!
//! A tag that is whitespace, a control character or `\` is written as a
//! Unicode escape (`#\u{20}` for a space) so every line stays four tokens.
//!
//! Parsing is lenient: lines that do not decode are skipped rather than
//! reported, so preview tooling can read files with stray content.

use std::fmt::Write as _;

use crate::error::{FormatError, FormatResult};
use crate::instruction::{parse_axis, Instruction, Motion, TAG_MARKER};

/// Renders instructions as toolpath text.
pub fn render(instructions: &[Instruction]) -> String {
    let mut out = String::with_capacity(instructions.len() * 32);
    for instr in instructions {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{instr}");
    }
    out
}

/// Parses toolpath text, skipping every line that does not decode.
pub fn parse(text: &str) -> Vec<Instruction> {
    text.lines().filter_map(|line| parse_line(line).ok()).collect()
}

/// Decodes one toolpath line.
///
/// Accepts three tokens (untagged) or four tokens where the last is a tag.
pub fn parse_line(line: &str) -> FormatResult<Instruction> {
    let line = line.trim_end_matches('\r');
    let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();
    if tokens.len() != 3 && tokens.len() != 4 {
        return Err(FormatError::WrongTokenCount {
            line: line.to_string(),
            expected: 4,
            found: tokens.len(),
        });
    }

    let motion = Motion::parse_token(tokens[0], line)?;
    let x = parse_axis(tokens[1], 'X', line)?;
    let y = parse_axis(tokens[2], 'Y', line)?;
    let instr = Instruction::new(motion, x, y);

    match tokens.get(3) {
        None => Ok(instr),
        Some(token) => parse_tag(token, line).map(|ch| instr.tagged(ch)),
    }
}

fn parse_tag(token: &str, line: &str) -> FormatResult<char> {
    let rest = token
        .strip_prefix(TAG_MARKER)
        .ok_or_else(|| FormatError::MissingMarker {
            line: line.to_string(),
            marker: TAG_MARKER,
        })?;

    let mut chars = rest.chars();
    let tag = match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => unescape_tag(rest),
    };
    tag.ok_or_else(|| FormatError::InvalidTag {
        line: line.to_string(),
        tag: token.to_string(),
    })
}

/// Decodes a `\u{hex}` tag escape.
fn unescape_tag(escaped: &str) -> Option<char> {
    let hex = escaped.strip_prefix("\\u{")?.strip_suffix('}')?;
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
