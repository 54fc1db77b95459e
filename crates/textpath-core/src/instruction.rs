//! Single pen motion steps.
//!
//! An [`Instruction`] is one line of a toolpath: a pen-up travel or a pen-down
//! stroke to an absolute point, optionally tagged with the character that
//! produced it. Instructions are immutable; translation and tagging return
//! new values.

use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, FormatResult};

/// Decimal places used when writing coordinates.
pub const COORDINATE_PRECISION: usize = 5;

/// Marker that introduces the source character tag on a serialized line.
pub const TAG_MARKER: char = '#';

/// Tags that would not survive as a single token are written as `\u{..}`.
pub(crate) fn tag_needs_escape(ch: char) -> bool {
    ch.is_whitespace() || ch.is_control() || ch == '\\'
}

/// Pen state for a motion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Pen-up travel (G0)
    Move,
    /// Pen-down stroke (G1)
    Write,
}

impl Motion {
    /// Returns the numeric G code for this motion.
    pub fn code(self) -> u8 {
        match self {
            Motion::Move => 0,
            Motion::Write => 1,
        }
    }

    /// Decodes a motion token such as `G0` or `G01`.
    pub fn parse_token(token: &str, line: &str) -> FormatResult<Self> {
        let digits = token.strip_prefix('G').ok_or_else(|| FormatError::MissingMarker {
            line: line.to_string(),
            marker: 'G',
        })?;

        match digits.parse::<u8>() {
            Ok(0) => Ok(Motion::Move),
            Ok(1) => Ok(Motion::Write),
            _ => Err(FormatError::UnknownMotion {
                line: line.to_string(),
                code: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.code())
    }
}

/// A single typed 2D motion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
    motion: Motion,
    x: f64,
    y: f64,
    source_char: Option<char>,
}

impl Instruction {
    /// Creates an untagged instruction.
    pub fn new(motion: Motion, x: f64, y: f64) -> Self {
        Self {
            motion,
            x,
            y,
            source_char: None,
        }
    }

    /// Creates a pen-up travel to `(x, y)`.
    pub fn travel(x: f64, y: f64) -> Self {
        Self::new(Motion::Move, x, y)
    }

    /// Creates a pen-down stroke to `(x, y)`.
    pub fn stroke(x: f64, y: f64) -> Self {
        Self::new(Motion::Write, x, y)
    }

    /// Decodes a glyph-source line of the form `G0 X1.5 Y2`.
    ///
    /// Exactly three whitespace separated tokens are required.
    pub fn parse_source_line(line: &str) -> FormatResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(FormatError::WrongTokenCount {
                line: line.to_string(),
                expected: 3,
                found: tokens.len(),
            });
        }
        let motion = Motion::parse_token(tokens[0], line)?;
        let x = parse_axis(tokens[1], 'X', line)?;
        let y = parse_axis(tokens[2], 'Y', line)?;
        Ok(Self::new(motion, x, y))
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn source_char(&self) -> Option<char> {
        self.source_char
    }

    /// Returns a copy shifted by `(dx, dy)` with motion and tag unchanged.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Returns a copy tagged with the character that produced it.
    #[must_use]
    pub fn tagged(&self, ch: char) -> Self {
        Self {
            source_char: Some(ch),
            ..*self
        }
    }

    pub(crate) fn with_tag(mut self, tag: Option<char>) -> Self {
        self.source_char = tag;
        self
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} X{:.prec$} Y{:.prec$}",
            self.motion,
            self.x,
            self.y,
            prec = COORDINATE_PRECISION
        )?;
        match self.source_char {
            Some(ch) if tag_needs_escape(ch) => write!(f, " {TAG_MARKER}{}", ch.escape_unicode())?,
            Some(ch) => write!(f, " {TAG_MARKER}{ch}")?,
            None => {}
        }
        Ok(())
    }
}

impl FromStr for Instruction {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_source_line(s)
    }
}

/// Parses an axis token such as `X12.5`, checking its marker letter.
pub(crate) fn parse_axis(token: &str, marker: char, line: &str) -> FormatResult<f64> {
    let value = token
        .strip_prefix(marker)
        .ok_or_else(|| FormatError::MissingMarker {
            line: line.to_string(),
            marker,
        })?;
    value.parse::<f64>().map_err(|_| FormatError::InvalidNumber {
        line: line.to_string(),
        value: value.to_string(),
    })
}
