use crate::expression::operator::Operator;

/// An expression tree over real-valued operands.
///
/// A binary node carries the value its operator produced when the node was
/// built, so the root value is known as soon as the tree exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
        value: f64,
    },
}
