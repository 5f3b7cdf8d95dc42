//! Deferred numeric values.
//!
//! The number generator records the raw lexeme of a numeric token without
//! deciding what kind of number it is. [`Number`] holds that text and
//! converts it to a concrete representation only when a caller asks for
//! one. Each coercion re-parses the lexeme against the target type's own
//! grammar, so a lexeme may be a valid float and an invalid integer at the
//! same time, and a lexeme the parser accepted may turn out to be no number
//! at all (`"1+-2"` is lexically fine and fails every coercion).
use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

/// A numeric value kept as its raw matched text.
///
/// # Examples
///
/// ```
/// use jsonstack::Number;
///
/// let n = Number::new("1e10");
/// assert_eq!(n.as_f64().unwrap(), 1e10);
/// assert!(n.as_i64().is_err());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Number(String);

impl Number {
    /// Wraps a raw lexeme. No validation happens here.
    pub fn new(lexeme: impl Into<String>) -> Self {
        Self(lexeme.into())
    }

    /// The raw matched text.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.0
    }

    /// Coerces the lexeme to an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidInteger`] if the lexeme is not a valid
    /// `i32` literal.
    pub fn as_i32(&self) -> Result<i32, NumberError> {
        self.0
            .parse()
            .map_err(|_| NumberError::InvalidInteger(self.0.clone()))
    }

    /// Coerces the lexeme to an `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidInteger`] if the lexeme is not a valid
    /// `i64` literal.
    pub fn as_i64(&self) -> Result<i64, NumberError> {
        self.0
            .parse()
            .map_err(|_| NumberError::InvalidInteger(self.0.clone()))
    }

    /// Coerces the lexeme to an `f32`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidFloat`] if the lexeme is not a valid
    /// `f32` literal.
    pub fn as_f32(&self) -> Result<f32, NumberError> {
        self.0
            .parse()
            .map_err(|_| NumberError::InvalidFloat(self.0.clone()))
    }

    /// Coerces the lexeme to an `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::InvalidFloat`] if the lexeme is not a valid
    /// `f64` literal.
    pub fn as_f64(&self) -> Result<f64, NumberError> {
        self.0
            .parse()
            .map_err(|_| NumberError::InvalidFloat(self.0.clone()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self(v.to_string())
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self(v.to_string())
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self(v.to_string())
    }
}

/// A lexeme failed to coerce to the requested representation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("'{0}' is not a valid integer")]
    InvalidInteger(String),
    #[error("'{0}' is not a valid float")]
    InvalidFloat(String),
}

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn integer_lexeme_coerces_both_ways() {
        let n = Number::new("42");
        assert_eq!(n.as_i32().unwrap(), 42);
        assert_eq!(n.as_i64().unwrap(), 42);
        assert_eq!(n.as_f64().unwrap(), 42.0);
    }

    #[test]
    fn fractional_lexeme_is_not_an_integer() {
        let n = Number::new("1.5");
        assert!(n.as_i64().is_err());
        assert_eq!(n.as_f64().unwrap(), 1.5);
    }

    #[test]
    fn exponent_lexeme_is_float_only() {
        let n = Number::new("1e10");
        assert!(n.as_i64().is_err());
        assert_eq!(n.as_f64().unwrap(), 1e10);
        assert_eq!(n.as_f32().unwrap(), 1e10);
    }

    #[test]
    fn leading_plus_is_accepted() {
        let n = Number::new("+5");
        assert_eq!(n.as_i64().unwrap(), 5);
        assert_eq!(n.as_f64().unwrap(), 5.0);
    }

    #[test]
    fn garbage_lexeme_fails_every_coercion() {
        // Lexically accepted by the number generator, invalid everywhere.
        let n = Number::new("1+-2e");
        assert!(n.as_i32().is_err());
        assert!(n.as_i64().is_err());
        assert!(n.as_f32().is_err());
        assert!(n.as_f64().is_err());
    }

    #[test]
    fn coercions_are_independent() {
        // No caching: a failed coercion does not poison a later one.
        let n = Number::new("7");
        assert!(Number::new("x").as_i64().is_err());
        assert_eq!(n.as_i64().unwrap(), 7);
        assert_eq!(n.as_i64().unwrap(), 7);
    }
}
