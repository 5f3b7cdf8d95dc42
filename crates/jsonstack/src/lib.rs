//! A single-pass, non-recursive parser for JSON-like text.
//!
//! Parsing is driven by a pushdown automaton: an explicit stack of small
//! per-production state machines ("generators"), one per open token or
//! structure, fed by a character-classification loop. There is no
//! recursion, so nesting depth is bounded only by memory, and no grammar
//! tables or parser-generator machinery.
//!
//! The accepted grammar is JSON plus a few deliberate extensions:
//! single-quoted strings, `\x` two-digit hex escapes alongside `\u`,
//! a leading `+` on numbers, and case-insensitive `true`/`false`/`null`.
//! Numbers are kept as raw lexemes ([`Number`]) and only coerced to a
//! concrete representation on demand.
//!
//! ```rust
//! use jsonstack::{Value, parse};
//!
//! let value = parse(r#"{"id": 7, "tags": ["a", "b"], "score": 1e10}"#).unwrap();
//! let Value::Object(map) = value else {
//!     unreachable!()
//! };
//! let Value::Number(score) = &map["score"] else {
//!     unreachable!()
//! };
//! assert_eq!(score.as_f64().unwrap(), 1e10);
//! assert!(score.as_i64().is_err());
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod escape;
mod generator;
mod literal;
mod number;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, SyntaxError};
pub use number::{Number, NumberError};
pub use parser::parse;
pub use value::{Array, Map, Value};
