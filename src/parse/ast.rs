use crate::common::*;

/// A parsed expression: the rolled value and an optional trailing comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub(crate) roll: Node,
    pub(crate) condition: Option<Condition>,
}

impl Expression {
    pub(crate) fn new(roll: Node, condition: Option<Condition>) -> Self {
        Self { roll, condition }
    }

    pub fn roll(&self) -> &Node {
        &self.roll
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

/// The right-hand side of `actual <op> target`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub comparison: Comparison,
    pub target: Node,
}

impl Condition {
    pub(crate) fn new(comparison: Comparison, target: Node) -> Self {
        Self { comparison, target }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Int),
    Group(Box<Node>),
    Binary(Box<Node>, BinaryOperator, Box<Node>),
    Power(Box<Node>, Box<Node>),
    /// `count d faces`
    Dice(Box<Node>, Box<Node>),
}

impl Node {
    pub fn new_literal(x: Int) -> Self {
        Self::Literal(x)
    }

    pub fn new_group(inner: Node) -> Self {
        Self::Group(Box::new(inner))
    }

    pub fn new_binary(op: BinaryOperator, lhs: Node, rhs: Node) -> Self {
        Self::Binary(Box::new(lhs), op, Box::new(rhs))
    }

    pub fn new_power(base: Node, exponent: Node) -> Self {
        Self::Power(Box::new(base), Box::new(exponent))
    }

    pub fn new_dice(count: Node, faces: Node) -> Self {
        Self::Dice(Box::new(count), Box::new(faces))
    }
}

