//! The dispatch driver.
//!
//! The driver owns an explicit stack of active generators and consumes the
//! input one character at a time. Per character, in order:
//!
//! 1. While the top-of-stack generator's terminator predicate holds, pop
//!    it, produce its value, and feed that value into the new top of stack.
//!    A self-consuming close (a `]`, `}`, or closing quote) swallows the
//!    character; a non-self-consuming close (the character that ends a
//!    number or literal) leaves it to be re-examined against the parent,
//!    which is how a `,` or `]` right after a number still counts as real
//!    punctuation.
//! 2. In mid-token mode (inside a string, number, or literal), forward the
//!    character verbatim to the active generator.
//! 3. Skip whitespace.
//! 4. `:` and `,` go to the active generator as structural markers; `{` and
//!    `[` push container generators; a quote (either style) pushes a string
//!    generator; a digit or sign pushes a number generator; anything else
//!    is a candidate literal.
//!
//! The stack replaces call-stack recursion, so nesting depth is bounded by
//! memory, not by the call stack. One parse invocation owns one driver and
//! one stack; nothing is shared across calls.
use alloc::{vec, vec::Vec};

use crate::{
    error::{ParseError, SyntaxError},
    generator::Generator,
    value::Value,
};

/// Parses a complete character sequence into a [`Value`].
///
/// The accepted grammar is JSON with a few deliberate extensions:
/// single-quoted strings, `\x` two-digit hex escapes, leading `+` on
/// numbers, and case-insensitive literals.
///
/// # Errors
///
/// Fails on any grammar violation; there is no partial result. See
/// [`SyntaxError`] for the failure classes.
///
/// # Examples
///
/// ```
/// use jsonstack::{Value, parse};
///
/// let value = parse(r#"{"a": 1, "b": [2, 3]}"#).unwrap();
/// let Value::Object(map) = value else {
///     unreachable!()
/// };
/// assert_eq!(map["b"], Value::Array(vec![2.into(), 3.into()]));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Driver::new().run(text)
}

#[derive(Debug)]
struct Driver {
    /// Active generators; the root sentinel sits at the bottom and never
    /// pops, so the stack is never empty during a parse.
    stack: Vec<Generator>,
    /// Inside a string, number, or literal token: raw characters bypass
    /// classification and go straight to the active generator.
    mid_token: bool,
    line: usize,
    column: usize,
}

impl Driver {
    fn new() -> Self {
        Self {
            stack: vec![Generator::root()],
            mid_token: false,
            line: 1,
            column: 1,
        }
    }

    fn run(mut self, text: &str) -> Result<Value, ParseError> {
        for c in text.chars() {
            self.step(c)?;
            self.advance(c);
        }
        self.finish()
    }

    fn step(&mut self, c: char) -> Result<(), ParseError> {
        // Close every generator this character terminates, feeding each
        // produced value into its parent. Consecutive closes (`]]`) cascade
        // through this loop in a single step.
        while self.top().is_terminator(c).map_err(|e| self.located(e))? {
            self.mid_token = false;
            let done = self.stack.pop().expect("the root sentinel never closes");
            let consumed = done.self_consuming_close();
            let value = done.generate().map_err(|e| self.located(e))?;
            self.top_mut()
                .accept_value(value)
                .map_err(|e| self.located(e))?;
            if consumed {
                return Ok(());
            }
        }

        if self.mid_token {
            return self
                .top_mut()
                .accept_char(c)
                .map_err(|e| self.located(e));
        }

        if c.is_whitespace() {
            return Ok(());
        }

        if let Generator::Root(root) = self.top() {
            if root.is_done() {
                return Err(self.located(SyntaxError::TrailingContent));
            }
        }

        match c {
            ':' | ',' => self
                .top_mut()
                .accept_char(c)
                .map_err(|e| self.located(e))?,
            '{' => self.stack.push(Generator::object()),
            '[' => self.stack.push(Generator::array()),
            '"' | '\'' => {
                self.mid_token = true;
                self.stack.push(Generator::string(c));
            }
            c if c.is_ascii_digit() || matches!(c, '-' | '+') => {
                self.mid_token = true;
                let mut number = Generator::number();
                number.accept_char(c).map_err(|e| self.located(e))?;
                self.stack.push(number);
            }
            c => {
                self.mid_token = true;
                let constant = Generator::constant(c).map_err(|e| self.located(e))?;
                self.stack.push(constant);
            }
        }
        Ok(())
    }

    /// End of input: number and literal tokens close as if a terminating
    /// character had arrived; anything else still open is an error.
    fn finish(mut self) -> Result<Value, ParseError> {
        while self.stack.len() > 1 {
            let done = self.stack.pop().expect("the root sentinel never closes");
            if !done.closes_at_end_of_input() {
                return Err(self.located(SyntaxError::UnexpectedEndOfInput));
            }
            let value = done.generate().map_err(|e| self.located(e))?;
            self.top_mut()
                .accept_value(value)
                .map_err(|e| self.located(e))?;
        }

        let root = self.stack.pop().expect("the stack holds the root sentinel");
        root.generate().map_err(|e| self.located(e))
    }

    fn top(&self) -> &Generator {
        self.stack.last().expect("the stack is never empty")
    }

    fn top_mut(&mut self) -> &mut Generator {
        self.stack.last_mut().expect("the stack is never empty")
    }

    fn located(&self, source: SyntaxError) -> ParseError {
        ParseError {
            source,
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}
