use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero (divisor {0} is within epsilon of zero)")]
    DivisionByZero(f64),
}
