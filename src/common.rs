use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::num::NonZeroU64;

/// The integer type every expression evaluates to.
pub type Int = i64;
pub type UInt = u64;
pub type NonZeroUInt = NonZeroU64;

pub type Float = f64;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
        };
        f.write_char(c)
    }
}

/// The trailing comparison of an expression such as `1d20 >= 15`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Comparison {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
}

impl Comparison {
    /// Builds a comparison from a relational symbol (`<` is `Less`, `>` is `Greater`) and
    /// whether a `=` followed it. Returns `None` for the contradictory "neither" case.
    pub fn from_parts(relation: Option<Ordering>, inclusive: bool) -> Option<Self> {
        use Ordering::*;
        Some(match (relation, inclusive) {
            (Some(Less), false) => Self::Lt,
            (Some(Greater), false) => Self::Gt,
            (Some(Less), true) => Self::Le,
            (Some(Greater), true) => Self::Ge,
            (None, true) => Self::Eq,
            (Some(Equal), _) | (None, false) => return None,
        })
    }

    pub fn judge(self, actual: Int, target: Int) -> bool {
        match self {
            Self::Lt => actual < target,
            Self::Gt => actual > target,
            Self::Le => actual <= target,
            Self::Ge => actual >= target,
            Self::Eq => actual == target,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Eq => "=",
        };
        f.write_str(s)
    }
}
