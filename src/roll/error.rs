use crate::common::Int;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("too many dice rolled")]
    TooManyRolls,
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error("cannot take modulus by zero")]
    ZeroModulo,
    #[error("dice must have at least one face, not {0}")]
    InvalidFaces(Int),
    #[error("at least one die must be rolled, not {0}")]
    InvalidCount(Int),
    #[error("integer overflow")]
    Overflow,
}
