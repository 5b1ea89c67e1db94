use crate::common::*;
use crate::parse::{
    ast,
    visit::{Accept, AstVisitor},
};
use std::fmt;

/// Renders a parsed expression back into canonical text.
#[derive(Default)]
pub struct Stringifier;

impl Stringifier {
    pub fn new() -> Self {
        Self
    }

    pub fn expression(&mut self, expr: &ast::Expression) -> String {
        let roll = self.visit(expr.roll());
        match expr.condition() {
            Some(condition) => format!(
                "{} {} {}",
                roll,
                condition.comparison,
                self.visit(&condition.target)
            ),
            None => roll,
        }
    }
}

impl AstVisitor for Stringifier {
    type Output = String;

    fn visit_literal(&mut self, x: Int) -> Self::Output {
        x.to_string()
    }

    fn visit_group(&mut self, inner: &ast::Node) -> Self::Output {
        format!("({})", inner.accept(self))
    }

    fn visit_binary(&mut self, l: &ast::Node, op: BinaryOperator, r: &ast::Node) -> Self::Output {
        format!("{} {} {}", l.accept(self), op, r.accept(self))
    }

    fn visit_power(&mut self, base: &ast::Node, exponent: &ast::Node) -> Self::Output {
        format!("{}^{}", base.accept(self), exponent.accept(self))
    }

    fn visit_dice(&mut self, count: &ast::Node, faces: &ast::Node) -> Self::Output {
        format!("{}d{}", count.accept(self), faces.accept(self))
    }
}

impl fmt::Display for ast::Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Stringifier::new().expression(self))
    }
}
