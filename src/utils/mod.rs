//! Operand orderings, operator combinations and input handling

mod errors;
mod operators;
mod parse;
mod permutations;
mod validation;

pub use errors::InputError;
pub use operators::generate_operator_combinations;
pub use parse::parse_operands;
pub use permutations::generate_permutations;
pub use validation::{is_valid_operand, validate_operands};
