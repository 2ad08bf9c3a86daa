use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

impl Expression {
    /// Build a binary node, computing its value from the children's values.
    ///
    /// # Errors
    ///
    /// Fails when `op` is undefined for the children's values (a near-zero
    /// divisor). The children are dropped in that case.
    pub fn combine(
        op: Operator,
        left: Expression,
        right: Expression,
    ) -> Result<Self, ExpressionError> {
        let value = op.apply(left.value(), right.value())?;
        Ok(Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            value,
        })
    }

    /// The value memoized at construction time.
    pub fn value(&self) -> f64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Binary { value, .. } => *value,
        }
    }

    /// Recompute the value bottom-up, ignoring memoized results.
    ///
    /// # Errors
    ///
    /// Returns an error when a division by a near-zero value is encountered.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Binary { op, left, right, .. } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                op.apply(left, right)
            }
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}
