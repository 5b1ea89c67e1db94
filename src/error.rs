use crate::parse::{ParseError, ParseErrorKind};
use crate::roll::RollError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Roll(#[from] RollError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use ErrorKind::*;

        match self {
            Self::Parse(e) => match e.kind {
                ParseErrorKind::MissingOperand { .. } => MissingOperand,
                ParseErrorKind::TrailingGarbage { .. } => TrailingGarbage,
                ParseErrorKind::UnbalancedBracket => UnbalancedBracket,
                ParseErrorKind::IntegerOverflow => Overflow,
                ParseErrorKind::TooDeep { .. } => TooDeep,
                ParseErrorKind::TooLong { .. } => TooLong,
            },
            Self::Roll(e) => match e {
                RollError::TooManyRolls => TooManyRolls,
                RollError::ZeroDivision | RollError::ZeroModulo => DivideByZero,
                RollError::InvalidFaces(_) | RollError::InvalidCount(_) => InvalidArgument,
                RollError::Overflow => Overflow,
            },
        }
    }
}

/// Coarse classification of an [Error], for callers deciding what to show a user.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    MissingOperand,
    TrailingGarbage,
    UnbalancedBracket,
    InvalidArgument,
    DivideByZero,
    Overflow,
    TooManyRolls,
    TooDeep,
    TooLong,
}

impl ErrorKind {
    /// The input stopped short of a complete expression, typically a harmless typo.
    pub fn is_incomplete(self) -> bool {
        matches!(self, Self::MissingOperand)
    }
}
