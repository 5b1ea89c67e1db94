use std::fmt;
use thiserror::Error;

/// A syntax-level failure. `position` is a byte offset into the normalized expression.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("error at position {position}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// An operator without an operand on one side; `found` is what stood in its place.
    MissingOperand { found: Option<char> },
    TrailingGarbage { found: char },
    UnbalancedBracket,
    IntegerOverflow,
    TooDeep { max: usize },
    TooLong { len: usize, max: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperand { found: Some(c) } => {
                write!(f, "missing operand; found {:?}", c)
            }
            Self::MissingOperand { found: None } => {
                write!(f, "missing operand at end of input")
            }
            Self::TrailingGarbage { found } => write!(f, "unexpected character {:?}", found),
            Self::UnbalancedBracket => write!(f, "')' without a matching '('"),
            Self::IntegerOverflow => write!(f, "integer literal is too large"),
            Self::TooDeep { max } => write!(f, "brackets nested deeper than {}", max),
            Self::TooLong { len, max } => {
                write!(f, "expression is {} bytes long; the limit is {}", len, max)
            }
        }
    }
}
