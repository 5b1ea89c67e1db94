mod check;
mod ctx;
mod error;
mod outcome;
mod roller;

pub(crate) type RResult<T> = Result<T, RollError>;

pub use check::{Grade, PercentileCheck};
pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use outcome::{Outcome, Verdict};
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::StepRoller;
