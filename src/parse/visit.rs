use crate::common::*;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_literal(&mut self, x: Int) -> Self::Output;

    fn visit_group(&mut self, inner: &ast::Node) -> Self::Output;

    fn visit_binary(&mut self, l: &ast::Node, op: BinaryOperator, r: &ast::Node) -> Self::Output;

    fn visit_power(&mut self, base: &ast::Node, exponent: &ast::Node) -> Self::Output;

    fn visit_dice(&mut self, count: &ast::Node, faces: &ast::Node) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Node {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Literal(x) => v.visit_literal(*x),
            Self::Group(x) => v.visit_group(x),
            Self::Binary(l, op, r) => v.visit_binary(l, *op, r),
            Self::Power(l, r) => v.visit_power(l, r),
            Self::Dice(count, faces) => v.visit_dice(count, faces),
        }
    }
}
