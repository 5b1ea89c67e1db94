//! Parsing and rolling of dice arithmetic such as `2d6 + 3`, `3(1d4)^2` or `1d100 <= 65`.
//!
//! ```
//! let outcome = dice_expr::roll("10d1 * 2 >= 15").unwrap();
//! assert_eq!(outcome.actual(), 20);
//! assert_eq!(outcome.judgement(), Some(true));
//! assert_eq!(outcome.target(), Some(15));
//! ```

pub mod common;
pub mod config;
pub mod dice;
mod error;
mod normalize;
pub mod parse;
pub mod roll;
mod stringify;

#[cfg(test)]
mod test_strategies;

pub use config::Limits;
pub use error::{Error, ErrorKind};
pub use normalize::normalize;
pub use parse::ast::Expression;
pub use roll::{Grade, Outcome, PercentileCheck, RollContext, Roller, Verdict};
pub use stringify::Stringifier;

use parse::{ParseError, ParseErrorKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Normalizes and parses an expression under the default [Limits].
pub fn parse(expression: &str) -> Result<Expression> {
    parse_with(expression, &Limits::default())
}

/// Normalizes and parses an expression. Error positions refer to the normalized text.
pub fn parse_with(expression: &str, limits: &Limits) -> Result<Expression> {
    if expression.len() > limits.max_length {
        let kind = ParseErrorKind::TooLong {
            len: expression.len(),
            max: limits.max_length,
        };
        return Err(ParseError::new(kind, 0).into());
    }
    let normalized = normalize(expression);
    Ok(parse::parse(&normalized, limits)?)
}

/// Parses and rolls an expression with the thread-local generator and default [Limits].
pub fn roll(expression: &str) -> Result<Outcome> {
    roll_with(expression, &Limits::default(), rand::thread_rng())
}

/// Parses and rolls an expression with the given limits and source of randomness.
pub fn roll_with<R: Roller>(expression: &str, limits: &Limits, roller: R) -> Result<Outcome> {
    let expr = parse_with(expression, limits)?;
    let mut ctx = RollContext::new_bounded(limits.max_rolls, roller);
    Ok(ctx.eval(&expr)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Int;
    use crate::test_strategies::{arithmetic_strategy, dice_strategy};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn check(s: &str, expected: Int) {
        let outcome = roll(s).unwrap_or_else(|e| panic!("{:?} failed: {}", s, e));
        assert_eq!(outcome.actual(), expected, "{:?}", s);
        assert_eq!(outcome.verdict(), None, "{:?}", s);
    }

    fn check_judged(s: &str) {
        let outcome = roll(s).unwrap_or_else(|e| panic!("{:?} failed: {}", s, e));
        assert_eq!(outcome.judgement(), Some(true), "{:?}", s);
        assert!(outcome.target().is_some(), "{:?}", s);
    }

    fn check_err(s: &str, kind: ErrorKind) {
        assert_eq!(roll(s).map_err(|e| e.kind()), Err(kind), "{:?}", s);
    }

    #[test]
    fn test_literals_and_signs() {
        check("1", 1);
        check("2", 2);
        check("+1", 1);
        check("-1", -1);
        check("(1)", 1);
        check("(2)", 2);
    }

    #[test]
    fn test_collapsed_dice() {
        check("d1", 1);
        check("D1", 1);
        check("1d1d1", 1);
        check("2D1D1", 2);
        check("100d1", 100);
        check("100D1", 100);
        check("100D(1D1)", 100);
    }

    #[test]
    fn test_arithmetic() {
        check("3+3", 6);
        check("3-3", 0);
        check("3*3", 9);
        check("3x3", 9);
        check("3/3", 1);
        check("3\\3", 0);
        check("3%3", 0);
        check("3^3", 27);
        check("3D1+3", 6);
        check("3D1-3", 0);
        check("3D1*3", 9);
        check("3D1/3", 1);
        check("3D1\\3", 0);
        check("3D1^3", 27);
    }

    #[test]
    fn test_implicit_multiplication() {
        check("3(3)", 9);
        check("(3)3", 9);
        check("3 (3)", 9);
        check("3(3)+3(3)", 18);
        check("(3)3+(3)3", 18);
        check("3(3)3+3(3)3", 54);
        check("1+(2*3", 7);
    }

    #[test]
    fn test_precedence() {
        check("3+3*3", 12);
        check("3*3+3", 12);
        check("3*3^3", 81);
        check("3^3*3", 81);
        check("3+3*3^3", 84);
        check("3+3^3*3", 84);
        check("3*3^3+3", 84);
        check("3^3*3+3", 84);
        check("3*3+3^3", 36);
        check("3^3+3*3", 36);
        check("3*(3+3)^3", 648);
        check("3^(3+3)*3", 2187);
        check("3(3+3)^3", 648);
        check("3^(3+3)3", 2187);
        check("3D1*(3D1+3D1)^3D1", 648);
        check("3D1^(3D1+3D1)*3D1", 2187);
        check("3D1(3D1+3D1)^3D1", 648);
        check("3D1^(3D1+3D1)3D1", 2187);
        check("1d1x2d1+3D1^(4d1*5d1/6d1\\7d1)%8d1", 5);
    }

    #[test]
    fn test_comparisons() {
        for s in [
            "2>1",
            "2>=1",
            "1<2",
            "1<=2",
            "1>=1",
            "1<=1",
            "1=1",
            "2D1>1D1",
            "1D1<2D1",
            "2D1>=1D1",
            "1D1>=1D1",
            "1D1<=1D1",
            "1D1=1D1",
            "100D(1D1) > 1",
        ] {
            check_judged(s);
        }

        let outcome = roll("2>1").unwrap();
        assert_eq!(outcome.actual(), 2);
        assert_eq!(outcome.target(), Some(1));
        assert_eq!(roll("1>2").unwrap().judgement(), Some(false));
    }

    #[test]
    fn test_random_rolls_are_positive() {
        for s in ["D100", "1D100", "1D(100D1)", "100D100"] {
            for _ in 0..20 {
                assert!(roll(s).unwrap().actual() > 0, "{:?}", s);
            }
        }
    }

    #[test]
    fn test_missing_operand() {
        for s in ["1x", "1*", "1+", "1-", "1D", "1d", "()", "", "1>", "2*-1"] {
            check_err(s, ErrorKind::MissingOperand);
        }
        assert!(ErrorKind::MissingOperand.is_incomplete());
    }

    #[test]
    fn test_invalid_expression() {
        for s in ["a", "a1", "1+1b", "1+1b1+1", "1b", "1s", "1>2>3"] {
            check_err(s, ErrorKind::TrailingGarbage);
        }
        check_err("1+1)", ErrorKind::UnbalancedBracket);
        check_err("1d0", ErrorKind::InvalidArgument);
        check_err("(0-1)d6", ErrorKind::InvalidArgument);
        check_err("1/0", ErrorKind::DivideByZero);
        check_err("1%0", ErrorKind::DivideByZero);
        check_err("2^64", ErrorKind::Overflow);
        check_err("10000d6", ErrorKind::TooManyRolls);
        assert!(!ErrorKind::TrailingGarbage.is_incomplete());
    }

    #[test]
    fn test_adjacent_brackets() {
        check("(1)(2)", 2);
        check_err(")(", ErrorKind::UnbalancedBracket);
        check_err("1d1d", ErrorKind::MissingOperand);
        check_err("(0-2)d1", ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_parse_errors_come_first() {
        check_err("1/0)", ErrorKind::UnbalancedBracket);
        check_err("1/0 b", ErrorKind::TrailingGarbage);
    }

    #[test]
    fn test_limits() {
        let limits = Limits {
            max_length: 8,
            max_depth: 1,
            max_rolls: 4,
        };
        let roller = || StdRng::seed_from_u64(0);

        let err = roll_with("1+1+1+1+1", &limits, roller()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooLong);
        let err = roll_with("((1))", &limits, roller()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooDeep);
        let err = roll_with("5d6", &limits, roller()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyRolls);
        assert!(roll_with("4d6", &limits, roller()).is_ok());
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let limits = Limits::default();
        let first = roll_with("10d20 > 100", &limits, StdRng::seed_from_u64(42)).unwrap();
        let second = roll_with("10d20 > 100", &limits, StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_rolls() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..100)
                        .map(|_| roll("3d6").map(|o| o.actual()))
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect();
        for handle in handles {
            let rolls = handle.join().unwrap().unwrap();
            assert!(rolls.iter().all(|x| (3..=18).contains(x)));
        }
    }

    #[test]
    fn test_error_display() {
        let err = roll("1+1b").unwrap_err();
        assert_eq!(err.to_string(), "error at position 3: unexpected character 'b'");
        let err = roll("1/0").unwrap_err();
        assert_eq!(err.to_string(), "cannot divide by zero");
    }

    proptest! {
        #[test]
        fn test_arithmetic_is_deterministic(s in arithmetic_strategy()) {
            prop_assert_eq!(roll(&s), roll(&s));
        }

        #[test]
        fn test_dice_within_bounds(
            (count, faces) in dice_strategy(),
            seed in any::<u64>(),
        ) {
            let s = format!("{}d{}", count, faces);
            let actual = roll_with(&s, &Limits::default(), StdRng::seed_from_u64(seed))
                .unwrap()
                .actual();
            prop_assert!(actual >= count && actual <= count * faces);
        }

        #[test]
        fn test_one_faced_dice_collapse(count in 1..=10_000i64) {
            prop_assert_eq!(roll(&format!("{}d1", count)).unwrap().actual(), count);
        }
    }
}
