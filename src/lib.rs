//! Twentyfour - find every distinct way to make 24 from four digits
//!
//! Each ordering of the operands is combined with every operator triple
//! over `+ - * /` and all five parenthesizations. Formulas that reach the
//! target are fingerprinted with a canonical key that ignores reordering and
//! regrouping of `+` and `*` chains as well as `* 1` and `/ 1`, and only the
//! first formula per key is reported.

pub mod expression;
pub mod report;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{CanonicalKey, Expression, ExpressionError, Operator};
pub use report::Report;
pub use solver::{Shape, Solution, Solver, SolverConfig, SolverError};
pub use utils::{InputError, parse_operands, validate_operands};

/// Find every distinct formula over `numbers` that evaluates to 24
///
/// This is a convenience function that validates the operands and runs a
/// default solver.
///
/// # Arguments
///
/// * `numbers` - Exactly four whole numbers from 1 to 9
///
/// # Returns
///
/// * `Ok(solutions)` - In discovery order; empty when 24 cannot be made
/// * `Err(SolverError)` - If the operands are invalid
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` does not hold exactly four values
/// * Any value is not a whole number from 1 to 9
///
/// # Examples
///
/// ```
/// use twentyfour::solve;
///
/// match solve(&[3.0, 3.0, 8.0, 8.0]) {
///     Ok(solutions) => {
///         for solution in &solutions {
///             println!("{}", solution);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[f64]) -> Result<Vec<Solution>, SolverError> {
    let operands = validate_operands(numbers)?;

    let solver = Solver::default();
    Ok(solver.solve(operands))
}
