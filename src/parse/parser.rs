use super::{
    ast::*,
    error::{ParseError, ParseErrorKind},
    lexer::*,
};
use crate::common::*;
use logos_iter::LogosIter;
use std::cmp::Ordering;
use std::ops::Range;

type PResult<T = Option<Node>> = Result<T, ParseError>;

/// A single-use precedence-climbing parser.
///
/// Every level returns `Ok(None)` when no operand starts at the cursor, which is distinct
/// from a literal `0`. The operator loops decide whether a missing operand is an error.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    /// Span of the most recently consumed token.
    span: Range<usize>,
    open_brackets: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    const ADDITION_OPS: &'static [TokenKind] = &[TokenKind::Plus, TokenKind::Minus];

    const MULTIPLICATION_OPS: &'static [TokenKind] = &[
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Backslash,
        TokenKind::Percent,
    ];

    pub fn new(source: &'a str, max_depth: usize) -> Self {
        Self {
            source,
            lexer: lexer(source),
            span: 0..0,
            open_brackets: 0,
            depth: 0,
            max_depth,
        }
    }

    pub fn parse(mut self) -> Result<Expression, ParseError> {
        let expr = self.parse_comparison()?;
        self.expect_end_of_input()?;
        expr.ok_or_else(|| self.missing_operand())
    }

    fn advance(&mut self) -> Option<TokenKind> {
        let token = self.lexer.next()?;
        self.span = self.lexer.span();
        Some(token)
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.lexer
            .peek()
            .map_or(false, |peeked| options.contains(peeked))
    }

    fn eat_binary_op(&mut self, options: &[TokenKind]) -> Option<BinaryOperator> {
        if self.matches_any(options) {
            self.advance().and_then(|t| t.as_binary_op())
        } else {
            None
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.matches(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Offset and first character of the input that has not been consumed yet.
    fn upcoming(&self) -> (usize, Option<char>) {
        let rest = &self.source[self.span.end..];
        let trimmed = rest.trim_start();
        (
            self.span.end + (rest.len() - trimmed.len()),
            trimmed.chars().next(),
        )
    }

    fn error_at_last(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.span.start)
    }

    fn missing_operand(&self) -> ParseError {
        let (position, found) = self.upcoming();
        ParseError::new(ParseErrorKind::MissingOperand { found }, position)
    }

    fn require(&self, operand: Option<Node>) -> PResult<Node> {
        operand.ok_or_else(|| self.missing_operand())
    }

    /// Like `require`, for an operand left of the operator that was just consumed.
    fn require_left(&self, operand: Option<Node>) -> PResult<Node> {
        operand.ok_or_else(|| {
            let found = self.source[self.span.clone()].chars().next();
            self.error_at_last(ParseErrorKind::MissingOperand { found })
        })
    }

    fn expect_end_of_input(&mut self) -> PResult<()> {
        if self.advance().is_none() {
            return Ok(());
        }
        // `span.start` is always a char boundary because every valid token is ASCII.
        let found = self.source[self.span.start..]
            .chars()
            .next()
            .unwrap_or_default();
        Err(self.error_at_last(ParseErrorKind::TrailingGarbage { found }))
    }

    fn parse_comparison(&mut self) -> PResult<Option<Expression>> {
        let roll = match self.parse_close_bracket()? {
            Some(roll) => roll,
            None => return Ok(None),
        };

        let relation = if self.eat(TokenKind::LessThan) {
            Some(Ordering::Less)
        } else if self.eat(TokenKind::GreaterThan) {
            Some(Ordering::Greater)
        } else {
            None
        };
        let inclusive = self.eat(TokenKind::Equal);

        if relation.is_none() && !inclusive {
            return Ok(Some(Expression::new(roll, None)));
        }

        let comparison = Comparison::from_parts(relation, inclusive)
            .ok_or_else(|| self.missing_operand())?;
        let target = self.parse_close_bracket()?;
        let target = self.require(target)?;

        Ok(Some(Expression::new(
            roll,
            Some(Condition::new(comparison, target)),
        )))
    }

    fn parse_close_bracket(&mut self) -> PResult {
        let node = self.parse_addition()?;
        self.close_bracket()?;
        Ok(node)
    }

    fn close_bracket(&mut self) -> PResult<()> {
        if self.eat(TokenKind::RightParen) {
            if self.open_brackets == 0 {
                return Err(self.error_at_last(ParseErrorKind::UnbalancedBracket));
            }
            self.open_brackets -= 1;
        }
        Ok(())
    }

    fn parse_addition(&mut self) -> PResult {
        let mut lhs = self.parse_multiplication()?;

        while let Some(op) = self.eat_binary_op(Self::ADDITION_OPS) {
            let rhs = self.parse_multiplication()?;
            let rhs = self.require(rhs)?;
            // A leading sign applies to an implicit zero.
            let left = lhs.unwrap_or_else(|| Node::new_literal(0));

            lhs = Some(Node::new_binary(op, left, rhs));
        }

        Ok(lhs)
    }

    fn parse_multiplication(&mut self) -> PResult {
        let mut lhs = self.parse_power()?;

        while let Some(op) = self.eat_binary_op(Self::MULTIPLICATION_OPS) {
            let left = self.require_left(lhs)?;
            let rhs = self.parse_power()?;
            let rhs = self.require(rhs)?;

            lhs = Some(Node::new_binary(op, left, rhs));
        }

        Ok(lhs)
    }

    fn parse_power(&mut self) -> PResult {
        let mut lhs = self.parse_dice()?;

        while self.eat(TokenKind::Caret) {
            let base = self.require_left(lhs)?;
            let exponent = self.parse_dice()?;
            let exponent = self.require(exponent)?;

            lhs = Some(Node::new_power(base, exponent));
        }

        Ok(lhs)
    }

    fn parse_dice(&mut self) -> PResult {
        let mut lhs = self.parse_open_bracket()?;

        while self.eat(TokenKind::Dice) {
            let count = lhs.unwrap_or_else(|| Node::new_literal(1));
            let faces = self.parse_open_bracket()?;
            let faces = self.require(faces)?;

            lhs = Some(Node::new_dice(count, faces));
        }

        Ok(lhs)
    }

    /// A `(` opens a sub-expression that ends at the matching `)` or at end of input.
    fn parse_open_bracket(&mut self) -> PResult {
        let lhs = self.parse_primary()?;

        if !self.eat(TokenKind::LeftParen) {
            return Ok(lhs);
        }
        if self.depth == self.max_depth {
            return Err(self.error_at_last(ParseErrorKind::TooDeep {
                max: self.max_depth,
            }));
        }

        self.open_brackets += 1;
        self.depth += 1;
        let inner = self.parse_addition()?;
        let inner = Node::new_group(self.require(inner)?);
        self.close_bracket()?;
        self.depth -= 1;

        Ok(Some(match lhs {
            Some(lhs) => Node::new_binary(BinaryOperator::Mul, lhs, inner),
            None => inner,
        }))
    }

    fn parse_primary(&mut self) -> PResult {
        if !self.eat(TokenKind::Integer) {
            return Ok(None);
        }

        let value = self.source[self.span.clone()]
            .parse::<Int>()
            .map_err(|_| self.error_at_last(ParseErrorKind::IntegerOverflow))?;
        Ok(Some(Node::new_literal(value)))
    }
}
