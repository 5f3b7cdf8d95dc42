//! Parse failures.
//!
//! Every failure is synchronous and fatal for the parse that raised it:
//! there is no partial result and no recovery. Numeric coercion failures
//! are a separate concern and live in [`crate::number::NumberError`],
//! because they surface after the parse, whenever a caller asks the
//! deferred value for a concrete representation.
use alloc::string::String;

use thiserror::Error;

/// A parse failure, located at the character that triggered it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{source} at {line}:{column}")]
pub struct ParseError {
    pub(crate) source: SyntaxError,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character.
    pub column: usize,
}

impl ParseError {
    /// The error class, without its position.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }
}

/// What went wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("expected ',' before the next element")]
    ExpectedComma,
    #[error("expected ':' after object key")]
    ExpectedColon,
    #[error("trailing comma before '{0}'")]
    TrailingComma(char),
    #[error("object keys must be strings")]
    NonStringKey,
    #[error("cannot close object: {0} expected")]
    UnexpectedObjectClose(&'static str),
    #[error("expected literal '{expected}', found '{found}'")]
    LiteralMismatch {
        expected: &'static str,
        found: char,
    },
    #[error("incomplete literal '{0}'")]
    IncompleteLiteral(&'static str),
    #[error("invalid hex digits '{0}' in escape sequence")]
    InvalidHexEscape(String),
    #[error("escape sequence {0:#06X} is not a valid code point")]
    InvalidEscapeCodePoint(u32),
    #[error("unexpected content after the top-level value")]
    TrailingContent,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("{0}")]
    Unexpected(&'static str),
}
