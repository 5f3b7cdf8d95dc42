//! Buffering and decoding of hex escape sequences inside strings.
//!
//! [`HexEscapeBuffer`] accumulates a fixed number of characters (four for
//! `\u`, two for `\x`) and converts them to a [`char`] once the last one
//! arrives. Characters are collected without inspection; validation happens
//! only at decode time, when the full buffer is parsed as a hexadecimal
//! code point. After a successful conversion the buffer resets for the next
//! escape sequence.
use alloc::string::String;

use crate::error::SyntaxError;

#[derive(Debug)]
pub(crate) struct HexEscapeBuffer {
    digits: String,
    collected: usize,
    need: usize,
}

impl HexEscapeBuffer {
    /// A `\u` escape: four hex digits.
    pub fn unicode() -> Self {
        Self {
            digits: String::with_capacity(4),
            collected: 0,
            need: 4,
        }
    }

    /// An `\x` escape: two hex digits.
    pub fn two_digit() -> Self {
        Self {
            digits: String::with_capacity(2),
            collected: 0,
            need: 2,
        }
    }

    /// Collects one character.
    ///
    /// Returns `Ok(None)` while the buffer is still filling and
    /// `Ok(Some(ch))` once the final character arrives and the buffer
    /// decodes. Malformed content is only detected here, at decode time:
    /// either the collected text is not hexadecimal, or the code point it
    /// names is not a valid Unicode scalar value.
    pub fn feed(&mut self, c: char) -> Result<Option<char>, SyntaxError> {
        self.digits.push(c);
        self.collected += 1;
        if self.collected < self.need {
            return Ok(None);
        }

        let digits = core::mem::take(&mut self.digits);
        self.collected = 0;
        let code = u32::from_str_radix(&digits, 16)
            .map_err(|_| SyntaxError::InvalidHexEscape(digits))?;
        let decoded = char::from_u32(code).ok_or(SyntaxError::InvalidEscapeCodePoint(code))?;
        Ok(Some(decoded))
    }
}
