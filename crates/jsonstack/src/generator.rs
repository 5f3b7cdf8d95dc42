//! Per-production state machines.
//!
//! A [`Generator`] is an ephemeral state machine over one grammar
//! production. It is created the instant the driver recognizes the opening
//! character of its token or structure, lives on the driver's stack while
//! that production is open, and is destroyed the instant its terminator
//! predicate fires, producing its final [`Value`] for the parent.
//!
//! Every variant exposes the same capability set:
//!
//! - [`is_terminator`]: does this character end the production? May itself
//!   fail for illegal early closes (`]` where a value is still expected).
//! - [`self_consuming_close`]: whether the closing character is the
//!   generator's own punctuation (`]`, `}`, a quote) or still carries
//!   meaning for the parent and must be reprocessed (the character that
//!   ends a number or literal token).
//! - [`generate`]: build the final value from buffered state, exactly once.
//! - [`accept_value`] / [`accept_char`]: receive a freshly completed child
//!   value, or a raw character, never both.
//!
//! [`is_terminator`]: Generator::is_terminator
//! [`self_consuming_close`]: Generator::self_consuming_close
//! [`generate`]: Generator::generate
//! [`accept_value`]: Generator::accept_value
//! [`accept_char`]: Generator::accept_char
use alloc::string::String;

use crate::{
    error::SyntaxError,
    escape::HexEscapeBuffer,
    literal::{LiteralMatcher, Step},
    number::Number,
    value::{Array, Map, Value},
};

/// Characters that may appear anywhere in a number lexeme.
///
/// Deliberately positionless: `1-2e+` is lexically acceptable and only
/// fails once a coercion is requested.
pub(crate) fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

/// Punctuation that ends a literal token (besides whitespace).
const TOKEN_BREAKERS: &str = ":[]{},";

/// One active grammar production on the driver's stack.
#[derive(Debug)]
pub(crate) enum Generator {
    Root(RootGenerator),
    Array(ArrayGenerator),
    Object(ObjectGenerator),
    Str(StringGenerator),
    Number(NumberGenerator),
    Constant(ConstantGenerator),
}

impl Generator {
    pub fn root() -> Self {
        Generator::Root(RootGenerator { result: None })
    }

    pub fn array() -> Self {
        Generator::Array(ArrayGenerator {
            state: ArrayState::Begin,
            items: Array::new(),
        })
    }

    pub fn object() -> Self {
        Generator::Object(ObjectGenerator {
            state: ObjectState::Begin,
            pending_key: None,
            map: Map::new(),
        })
    }

    /// Opens a string. The opening quote is consumed here and recorded as
    /// the required closing delimiter, without being copied to the output.
    pub fn string(delimiter: char) -> Self {
        Generator::Str(StringGenerator {
            delimiter,
            buf: String::new(),
            escape: EscapeState::Verbatim,
        })
    }

    pub fn number() -> Self {
        Generator::Number(NumberGenerator { buf: String::new() })
    }

    /// Opens a constant, committing to a candidate literal from the first
    /// character.
    ///
    /// # Errors
    ///
    /// Fails if the character begins none of `true`, `false`, `null`.
    pub fn constant(first: char) -> Result<Self, SyntaxError> {
        let matcher =
            LiteralMatcher::new(first).ok_or(SyntaxError::UnexpectedCharacter(first))?;
        Ok(Generator::Constant(ConstantGenerator { matcher }))
    }

    /// Does `c` end this generator's token or structure?
    ///
    /// # Errors
    ///
    /// An illegal early close (a `]` or `}` arriving in a state the grammar
    /// forbids) is reported here rather than returning `true`.
    pub fn is_terminator(&self, c: char) -> Result<bool, SyntaxError> {
        match self {
            // The root sentinel never closes.
            Generator::Root(_) => Ok(false),
            Generator::Array(array) => array.is_terminator(c),
            Generator::Object(object) => object.is_terminator(c),
            Generator::Str(string) => Ok(string.is_terminator(c)),
            Generator::Number(_) => Ok(!is_number_char(c)),
            Generator::Constant(_) => Ok(c.is_whitespace() || TOKEN_BREAKERS.contains(c)),
        }
    }

    /// Whether the closing character is entirely this generator's own
    /// punctuation. When `false`, the character that triggered the close
    /// still carries grammatical meaning for the parent and must be
    /// reprocessed by the driver.
    pub fn self_consuming_close(&self) -> bool {
        match self {
            Generator::Array(_) | Generator::Object(_) | Generator::Str(_) => true,
            Generator::Root(_) | Generator::Number(_) | Generator::Constant(_) => false,
        }
    }

    /// Whether running out of input closes this generator like any other
    /// non-token character would. Strings and containers need their real
    /// closing delimiter and fail at end of input instead.
    pub fn closes_at_end_of_input(&self) -> bool {
        matches!(self, Generator::Number(_) | Generator::Constant(_))
    }

    /// Produces the final value from buffered state. Consumes the
    /// generator; called exactly once, at close.
    ///
    /// # Errors
    ///
    /// A constant whose spelling never completed fails here; the root
    /// sentinel fails if no top-level value was ever produced.
    pub fn generate(self) -> Result<Value, SyntaxError> {
        match self {
            Generator::Root(root) => root.result.ok_or(SyntaxError::UnexpectedEndOfInput),
            Generator::Array(array) => Ok(Value::Array(array.items)),
            Generator::Object(object) => Ok(Value::Object(object.map)),
            Generator::Str(string) => Ok(Value::String(string.buf)),
            Generator::Number(number) => Ok(Value::Number(Number::new(number.buf))),
            Generator::Constant(constant) => {
                if constant.matcher.is_complete() {
                    Ok(constant.matcher.value())
                } else {
                    Err(SyntaxError::IncompleteLiteral(constant.matcher.expected()))
                }
            }
        }
    }

    /// Feeds a freshly completed child value into this generator.
    pub fn accept_value(&mut self, value: Value) -> Result<(), SyntaxError> {
        match self {
            Generator::Root(root) => root.accept_value(value),
            Generator::Array(array) => array.accept_value(value),
            Generator::Object(object) => object.accept_value(value),
            Generator::Str(_) | Generator::Number(_) | Generator::Constant(_) => {
                Err(SyntaxError::Unexpected("value routed to a token generator"))
            }
        }
    }

    /// Feeds a raw character into this generator: token content for the
    /// scalar generators, a structural marker (`:` or `,`) for the rest.
    pub fn accept_char(&mut self, c: char) -> Result<(), SyntaxError> {
        match self {
            Generator::Root(root) => root.accept_char(c),
            Generator::Array(array) => array.accept_char(c),
            Generator::Object(object) => object.accept_char(c),
            Generator::Str(string) => string.accept_char(c),
            Generator::Number(number) => {
                number.buf.push(c);
                Ok(())
            }
            Generator::Constant(constant) => constant.accept_char(c),
        }
    }
}

/// The permanent bottom-of-stack sentinel. Captures the single top-level
/// value and rejects anything that follows it.
#[derive(Debug)]
pub(crate) struct RootGenerator {
    result: Option<Value>,
}

impl RootGenerator {
    /// True once the top-level value has been produced.
    pub fn is_done(&self) -> bool {
        self.result.is_some()
    }

    fn accept_value(&mut self, value: Value) -> Result<(), SyntaxError> {
        if self.result.is_some() {
            return Err(SyntaxError::TrailingContent);
        }
        self.result = Some(value);
        Ok(())
    }

    fn accept_char(&mut self, c: char) -> Result<(), SyntaxError> {
        if self.result.is_some() {
            Err(SyntaxError::TrailingContent)
        } else {
            Err(SyntaxError::UnexpectedCharacter(c))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    Begin,
    ExpectValue,
    ExpectComma,
}

#[derive(Debug)]
pub(crate) struct ArrayGenerator {
    state: ArrayState,
    items: Array,
}

impl ArrayGenerator {
    fn is_terminator(&self, c: char) -> Result<bool, SyntaxError> {
        if c != ']' {
            return Ok(false);
        }
        // ExpectValue is only entered after a comma, so a close here is a
        // dangling trailing comma.
        if self.state == ArrayState::ExpectValue {
            return Err(SyntaxError::TrailingComma(']'));
        }
        Ok(true)
    }

    fn accept_value(&mut self, value: Value) -> Result<(), SyntaxError> {
        match self.state {
            ArrayState::Begin | ArrayState::ExpectValue => {
                self.items.push(value);
                self.state = ArrayState::ExpectComma;
                Ok(())
            }
            ArrayState::ExpectComma => Err(SyntaxError::ExpectedComma),
        }
    }

    fn accept_char(&mut self, c: char) -> Result<(), SyntaxError> {
        match (self.state, c) {
            (ArrayState::ExpectComma, ',') => {
                self.state = ArrayState::ExpectValue;
                Ok(())
            }
            (_, c) => Err(SyntaxError::UnexpectedCharacter(c)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ObjectState {
    Begin,
    ExpectKey,
    ExpectColon,
    ExpectValue,
    ExpectComma,
}

#[derive(Debug)]
pub(crate) struct ObjectGenerator {
    state: ObjectState,
    pending_key: Option<String>,
    map: Map,
}

impl ObjectGenerator {
    fn is_terminator(&self, c: char) -> Result<bool, SyntaxError> {
        if c != '}' {
            return Ok(false);
        }
        match self.state {
            ObjectState::Begin | ObjectState::ExpectComma => Ok(true),
            ObjectState::ExpectKey => Err(SyntaxError::TrailingComma('}')),
            ObjectState::ExpectColon => Err(SyntaxError::UnexpectedObjectClose("colon")),
            ObjectState::ExpectValue => Err(SyntaxError::UnexpectedObjectClose("value")),
        }
    }

    fn accept_value(&mut self, value: Value) -> Result<(), SyntaxError> {
        match self.state {
            ObjectState::Begin | ObjectState::ExpectKey => {
                let Value::String(key) = value else {
                    return Err(SyntaxError::NonStringKey);
                };
                self.pending_key = Some(key);
                self.state = ObjectState::ExpectColon;
                Ok(())
            }
            ObjectState::ExpectColon => Err(SyntaxError::ExpectedColon),
            ObjectState::ExpectValue => {
                // Duplicate keys: last write wins.
                let key = self.pending_key.take().unwrap_or_default();
                self.map.insert(key, value);
                self.state = ObjectState::ExpectComma;
                Ok(())
            }
            ObjectState::ExpectComma => Err(SyntaxError::ExpectedComma),
        }
    }

    fn accept_char(&mut self, c: char) -> Result<(), SyntaxError> {
        match (self.state, c) {
            (ObjectState::ExpectColon, ':') => {
                self.state = ObjectState::ExpectValue;
                Ok(())
            }
            (ObjectState::ExpectComma, ',') => {
                self.state = ObjectState::ExpectKey;
                Ok(())
            }
            (ObjectState::ExpectColon, _) => Err(SyntaxError::ExpectedColon),
            (ObjectState::ExpectComma, _) => Err(SyntaxError::ExpectedComma),
            (_, c) => Err(SyntaxError::UnexpectedCharacter(c)),
        }
    }
}

/// Escape sub-state of an open string.
#[derive(Debug)]
enum EscapeState {
    /// Copy characters verbatim; a backslash switches to `Escaped`.
    Verbatim,
    /// The character after a backslash decides what happens next.
    Escaped,
    /// Collecting the hex digits of a `\u` or `\x` escape.
    Hex(HexEscapeBuffer),
}

#[derive(Debug)]
pub(crate) struct StringGenerator {
    delimiter: char,
    buf: String,
    escape: EscapeState,
}

impl StringGenerator {
    fn is_terminator(&self, c: char) -> bool {
        // An escaped quote never closes the string.
        c == self.delimiter && matches!(self.escape, EscapeState::Verbatim)
    }

    fn accept_char(&mut self, c: char) -> Result<(), SyntaxError> {
        match &mut self.escape {
            EscapeState::Verbatim => {
                if c == '\\' {
                    self.escape = EscapeState::Escaped;
                } else {
                    self.buf.push(c);
                }
            }
            EscapeState::Escaped => match c {
                'b' => {
                    self.buf.push('\u{0008}');
                    self.escape = EscapeState::Verbatim;
                }
                't' => {
                    self.buf.push('\t');
                    self.escape = EscapeState::Verbatim;
                }
                'n' => {
                    self.buf.push('\n');
                    self.escape = EscapeState::Verbatim;
                }
                'f' => {
                    self.buf.push('\u{000C}');
                    self.escape = EscapeState::Verbatim;
                }
                'r' => {
                    self.buf.push('\r');
                    self.escape = EscapeState::Verbatim;
                }
                'u' => self.escape = EscapeState::Hex(HexEscapeBuffer::unicode()),
                'x' => self.escape = EscapeState::Hex(HexEscapeBuffer::two_digit()),
                // Escaping any other character yields that character.
                other => {
                    self.buf.push(other);
                    self.escape = EscapeState::Verbatim;
                }
            },
            EscapeState::Hex(hex) => {
                if let Some(decoded) = hex.feed(c)? {
                    self.buf.push(decoded);
                    self.escape = EscapeState::Verbatim;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct NumberGenerator {
    buf: String,
}

#[derive(Debug)]
pub(crate) struct ConstantGenerator {
    matcher: LiteralMatcher,
}

impl ConstantGenerator {
    fn accept_char(&mut self, c: char) -> Result<(), SyntaxError> {
        match self.matcher.step(c) {
            Step::Matched => Ok(()),
            Step::Mismatch(found) => Err(SyntaxError::LiteralMismatch {
                expected: self.matcher.expected(),
                found,
            }),
        }
    }
}
