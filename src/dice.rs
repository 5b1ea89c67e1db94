use crate::common::*;
use crate::roll::{RResult, RollContext, RollError, Roller};
use std::fmt;

#[enum_dispatch::enum_dispatch]
pub trait Throw {
    /// Rolls every die once and returns the sum.
    fn throw<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Int>;
}

/// `count` dice with `faces` faces each.
///
/// One-faced dice always land on 1, so they collapse to a [ConstDice] and never touch the
/// roller. Everything else is [PolyDice].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Throw)]
pub enum Dice {
    Const(ConstDice),
    Poly(PolyDice),
}

impl Dice {
    pub fn new(count: Int, faces: Int) -> RResult<Self> {
        let faces = positive(faces).ok_or(RollError::InvalidFaces(faces))?;
        let count = positive(count).ok_or(RollError::InvalidCount(count))?;

        Ok(if faces.get() == 1 {
            ConstDice::new(count).into()
        } else {
            PolyDice::new(count, faces).into()
        })
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(x) => fmt::Display::fmt(x, f),
            Self::Poly(x) => fmt::Display::fmt(x, f),
        }
    }
}

fn positive(x: Int) -> Option<NonZeroUInt> {
    UInt::try_from(x).ok().and_then(NonZeroUInt::new)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ConstDice {
    value: NonZeroUInt,
}

impl ConstDice {
    pub const ONE: Self = Self {
        value: NonZeroUInt::MIN,
    };

    pub fn new(value: NonZeroUInt) -> Self {
        Self { value }
    }

    pub fn value(&self) -> NonZeroUInt {
        self.value
    }
}

impl Throw for ConstDice {
    fn throw<R: Roller>(&self, _: &mut RollContext<R>) -> RResult<Int> {
        // `value` came from a non-negative `Int`, so it fits.
        Int::try_from(self.value.get()).map_err(|_| RollError::Overflow)
    }
}

impl fmt::Display for ConstDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d1", self.value)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PolyDice {
    pub count: NonZeroUInt,
    pub faces: NonZeroUInt,
}

impl PolyDice {
    pub fn new(count: NonZeroUInt, faces: NonZeroUInt) -> Self {
        Self { count, faces }
    }
}

impl Throw for PolyDice {
    fn throw<R: Roller>(&self, ctx: &mut RollContext<R>) -> RResult<Int> {
        let total = ctx
            .roll(self.count, self.faces)?
            .try_fold(0 as Int, |acc, x| {
                Int::try_from(x).ok().and_then(|x| acc.checked_add(x))
            })
            .ok_or(RollError::Overflow)?;
        tracing::trace!(dice = %self, total, "rolled");
        Ok(total)
    }
}

impl fmt::Display for PolyDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}
