use super::{error::RollError, outcome::Outcome, roller::Roller, RResult};
use crate::common::*;
use crate::dice::{Dice, Throw};
use crate::parse::{
    ast,
    visit::{Accept, AstVisitor},
};

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Evaluates parsed expressions against a [Roller], counting every die drawn.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    /// Number of dice drawn so far.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    fn count_rolls(&mut self, n: usize) -> RResult<()> {
        self.rolls = self.rolls.checked_add(n).ok_or(RollError::TooManyRolls)?;
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(RollError::TooManyRolls)
        } else {
            Ok(())
        }
    }

    /// Draws `count` dice of `faces` faces, failing before any draw if that would exceed the
    /// limit.
    pub fn roll(
        &mut self,
        count: NonZeroUInt,
        faces: NonZeroUInt,
    ) -> RResult<impl Iterator<Item = UInt> + '_> {
        let count = usize::try_from(count.get()).map_err(|_| RollError::TooManyRolls)?;
        self.count_rolls(count)?;
        Ok(self.roller.roll_dice(count, faces))
    }

    /// Evaluates the expression and, if it has one, its comparison.
    ///
    /// The two sides are evaluated independently: dice appearing on both sides are rolled
    /// separately.
    pub fn eval(&mut self, expr: &ast::Expression) -> RResult<Outcome> {
        let actual = self.visit(expr.roll())?;
        let outcome = match expr.condition() {
            None => Outcome::new(actual, None),
            Some(condition) => {
                let target = self.visit(&condition.target)?;
                Outcome::judged(actual, condition.comparison, target)
            }
        };
        tracing::debug!(%outcome, rolls = self.rolls, "evaluated");
        Ok(outcome)
    }
}

impl<R: Roller> AstVisitor for RollContext<R> {
    type Output = RResult<Int>;

    fn visit_literal(&mut self, x: Int) -> Self::Output {
        Ok(x)
    }

    fn visit_group(&mut self, inner: &ast::Node) -> Self::Output {
        inner.accept(self)
    }

    fn visit_binary(&mut self, l: &ast::Node, op: BinaryOperator, r: &ast::Node) -> Self::Output {
        let left = l.accept(self)?;
        let right = r.accept(self)?;
        apply(op, left, right)
    }

    fn visit_power(&mut self, base: &ast::Node, exponent: &ast::Node) -> Self::Output {
        let base = base.accept(self)?;
        let exponent = exponent.accept(self)?;
        power(base, exponent)
    }

    fn visit_dice(&mut self, count: &ast::Node, faces: &ast::Node) -> Self::Output {
        let count = count.accept(self)?;
        let faces = faces.accept(self)?;
        Dice::new(count, faces)?.throw(self)
    }
}

fn apply(op: BinaryOperator, l: Int, r: Int) -> RResult<Int> {
    use BinaryOperator::*;

    let value = match op {
        Add => l.checked_add(r),
        Sub => l.checked_sub(r),
        Mul => l.checked_mul(r),
        Div if r == 0 => return Err(RollError::ZeroDivision),
        Div => l.checked_div(r),
        Rem if r == 0 => return Err(RollError::ZeroModulo),
        Rem => l.checked_rem(r),
    };
    value.ok_or(RollError::Overflow)
}

/// Raises in floating point and truncates toward zero.
fn power(base: Int, exponent: Int) -> RResult<Int> {
    let value = (base as Float).powf(exponent as Float).trunc();
    // `Int::MAX as Float` rounds up to 2^63, which is itself out of range.
    if value.is_finite() && value >= Int::MIN as Float && value < Int::MAX as Float {
        Ok(value as Int)
    } else {
        Err(RollError::Overflow)
    }
}
