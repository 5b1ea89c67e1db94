use super::roller::Roller;
use crate::common::*;
use std::fmt;

const PERCENTILE: NonZeroUInt = match NonZeroUInt::new(100) {
    Some(x) => x,
    None => unreachable!(),
};

/// How well a percentile roll did against its skill target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Grade {
    Critical,
    Extreme,
    Hard,
    Regular,
    Failure,
    Fumble,
}

impl Grade {
    /// Grades a `1..=100` roll against `target`.
    ///
    /// A 100 always fumbles, and so does anything over 95 when the target is below 50. A 1
    /// is always critical. Otherwise rolls above the target fail, and successes are extreme
    /// at a fifth of the target or less and hard at half or less.
    pub fn judge(roll: UInt, target: Int) -> Self {
        let roll = roll as Int;
        match roll {
            100 => Self::Fumble,
            96..=99 if target < 50 => Self::Fumble,
            1 => Self::Critical,
            _ if roll > target => Self::Failure,
            _ if roll * 5 <= target => Self::Extreme,
            _ if roll * 2 <= target => Self::Hard,
            _ => Self::Regular,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Critical => "critical success",
            Self::Extreme => "extreme success",
            Self::Hard => "hard success",
            Self::Regular => "success",
            Self::Failure => "failure",
            Self::Fumble => "fumble",
        })
    }
}

/// A `1d100` skill check.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PercentileCheck {
    pub target: Int,
    pub roll: UInt,
    pub grade: Grade,
}

impl PercentileCheck {
    pub fn roll<R: Roller>(target: Int, roller: &mut R) -> Self {
        let roll = roller.roll_die(PERCENTILE);
        let grade = Grade::judge(roll, target);
        tracing::debug!(skill = target, roll, %grade, "percentile check");
        Self {
            target,
            roll,
            grade,
        }
    }
}

impl fmt::Display for PercentileCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (<= {}: {})", self.roll, self.target, self.grade)
    }
}
