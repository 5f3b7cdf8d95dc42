//! Candidate-literal matching for `true`, `false`, and `null`.
//!
//! The matcher commits to a candidate from the first character it sees,
//! case-insensitively, and then checks every subsequent character against
//! the expected spelling. It does not decide when the literal ends; the
//! constant generator closes on whitespace or punctuation and asks the
//! matcher whether the spelling was completed.
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CandidateLiteral {
    Null,
    True,
    False,
}

impl CandidateLiteral {
    fn spelling(self) -> &'static str {
        match self {
            CandidateLiteral::Null => "null",
            CandidateLiteral::True => "true",
            CandidateLiteral::False => "false",
        }
    }

    fn value(self) -> Value {
        match self {
            CandidateLiteral::Null => Value::Null,
            CandidateLiteral::True => Value::Boolean(true),
            CandidateLiteral::False => Value::Boolean(false),
        }
    }
}

/// What happened after feeding one more character into the matcher?
pub(crate) enum Step {
    /// Character matched the next expected one.
    Matched,
    /// Character did not match (or the literal was already complete).
    Mismatch(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LiteralMatcher {
    kind: CandidateLiteral,
    matched: usize,
}

impl LiteralMatcher {
    /// Commit to a candidate based on the first character (`t`, `f`, or
    /// `n`, in either case). Any other character matches no literal.
    pub fn new(first: char) -> Option<Self> {
        let kind = match first.to_ascii_lowercase() {
            'n' => CandidateLiteral::Null,
            't' => CandidateLiteral::True,
            'f' => CandidateLiteral::False,
            _ => return None,
        };
        Some(Self { kind, matched: 1 })
    }

    /// The full spelling this matcher committed to.
    pub fn expected(&self) -> &'static str {
        self.kind.spelling()
    }

    /// Give the matcher the next input character.
    pub fn step(&mut self, c: char) -> Step {
        let spelling = self.expected().as_bytes();
        let want = spelling.get(self.matched).map(|b| *b as char);
        if want == Some(c.to_ascii_lowercase()) {
            self.matched += 1;
            Step::Matched
        } else {
            Step::Mismatch(c)
        }
    }

    /// True once every character of the spelling has matched.
    pub fn is_complete(&self) -> bool {
        self.matched == self.expected().len()
    }

    /// The literal's value. Only meaningful once [`is_complete`] holds.
    ///
    /// [`is_complete`]: LiteralMatcher::is_complete
    pub fn value(&self) -> Value {
        self.kind.value()
    }
}
