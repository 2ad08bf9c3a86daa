//! Expression trees: construction, evaluation, rendering and canonical keys

mod ast;
mod canonical;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::Expression;
pub use canonical::CanonicalKey;
pub use errors::ExpressionError;
pub use operator::Operator;

#[cfg(test)]
mod tests;
