//! Error types for the core crate.
//!
//! This module provides structured error types for glyph parsing,
//! repository construction, layout parameter validation and text layout.

use thiserror::Error;

/// Errors raised when a single instruction line cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The line does not have the expected number of tokens.
    #[error("Expected {expected} tokens, found {found}: '{line}'")]
    WrongTokenCount {
        line: String,
        expected: usize,
        found: usize,
    },

    /// A token lacks its leading marker letter.
    #[error("Missing '{marker}' marker in '{line}'")]
    MissingMarker { line: String, marker: char },

    /// The motion code is neither a move nor a write.
    #[error("Unknown motion code '{code}' in '{line}'")]
    UnknownMotion { line: String, code: String },

    /// A coordinate could not be parsed as a number.
    #[error("Invalid number '{value}' in '{line}'")]
    InvalidNumber { line: String, value: String },

    /// A source tag is not a marker followed by exactly one character.
    #[error("Invalid tag '{tag}' in '{line}'")]
    InvalidTag { line: String, tag: String },

    /// A glyph block contained no instruction lines, so it has no width.
    #[error("Glyph block contains no instructions")]
    NoInstructions,
}

/// Errors raised while building a glyph repository from a source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// A definition header did not name a glyph symbol.
    #[error("Glyph definition has no symbol: '{header}'")]
    MissingSymbol { header: String },

    /// A glyph definition contains an unparsable line.
    #[error("Invalid glyph {symbol:?}: {source}")]
    InvalidGlyph {
        symbol: char,
        #[source]
        source: FormatError,
    },
}

/// Errors related to layout parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter that must be non-negative was negative.
    #[error("Parameter '{name}' must not be negative: {value}")]
    Negative { name: &'static str, value: f64 },

    /// A parameter was NaN or infinite.
    #[error("Parameter '{name}' must be finite: {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// The pass count was zero.
    #[error("Pass count must be at least 1")]
    ZeroPasses,
}

/// Top level error for toolpath compilation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextPathError {
    /// An instruction line failed to parse.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// The glyph source could not be turned into a repository.
    #[error("Glyph source error: {0}")]
    Source(#[from] SourceError),

    /// The text references a character the repository does not contain.
    #[error("Unknown character {ch:?} at position {position}")]
    UnknownCharacter { ch: char, position: usize },

    /// A layout parameter was rejected before any work began.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
}

/// Result type alias for toolpath compilation.
pub type Result<T> = std::result::Result<T, TextPathError>;

/// Result type alias for instruction parsing.
pub type FormatResult<T> = std::result::Result<T, FormatError>;
