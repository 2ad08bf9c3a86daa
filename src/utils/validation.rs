use log::{debug, warn};

use crate::solver::constants::{MAX_OPERAND, MIN_OPERAND, OPERAND_COUNT};
use crate::utils::errors::InputError;

/// Whole numbers from 1 to 9 inclusive.
pub fn is_valid_operand(value: f64) -> bool {
    (MIN_OPERAND..=MAX_OPERAND).contains(&value) && value.fract() == 0.0
}

/// # Errors
///
/// Returns an error unless `values` holds exactly four whole numbers in 1..=9.
pub fn validate_operands(values: &[f64]) -> Result<[f64; 4], InputError> {
    debug!("Validating operands: {:?}", values);

    let operands = <[f64; OPERAND_COUNT]>::try_from(values).map_err(|_| {
        warn!("Expected {} operands, got {}", OPERAND_COUNT, values.len());
        InputError::WrongCount(values.len())
    })?;

    if let Some(&bad) = operands.iter().find(|&&value| !is_valid_operand(value)) {
        warn!("Operand out of range: {}", bad);
        return Err(InputError::OutOfRange(bad));
    }

    debug!("Operand validation successful");
    Ok(operands)
}
