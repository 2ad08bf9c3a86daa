use std::fmt;

use crate::expression::errors::ExpressionError;
use crate::solver::constants::EPSILON;

/// The four binary operators a formula may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in the order combinations are enumerated.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Add and Mul may be regrouped and reordered freely.
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when dividing by a value
    /// whose magnitude is below [`EPSILON`].
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right.abs() < EPSILON {
                    Err(ExpressionError::DivisionByZero(right))
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
