use log::debug;

use crate::utils::errors::InputError;
use crate::utils::validation::{is_valid_operand, validate_operands};

/// Parse four digits written as `1 2 3 4`, `1,2,3,4` or `1234`.
///
/// # Errors
///
/// Returns an error when the text does not hold exactly four tokens, a token
/// is not a number, or a number is not a whole digit from 1 to 9.
pub fn parse_operands(input: &str) -> Result<[f64; 4], InputError> {
    let input = input.trim();
    debug!("Parsing operands from '{}'", input);

    let tokens: Vec<String> = if input.contains(',') {
        input.split(',').map(str::to_string).collect()
    } else if input.contains(' ') {
        input.split_whitespace().map(str::to_string).collect()
    } else if input.len() == 4 {
        if !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(InputError::NonNumericCompact(input.to_string()));
        }
        input.chars().map(String::from).collect()
    } else {
        input.split_whitespace().map(str::to_string).collect()
    };

    if tokens.len() != 4 {
        return Err(InputError::WrongCount(tokens.len()));
    }

    let values = tokens
        .iter()
        .map(|token| -> Result<f64, InputError> {
            let token = token.trim();
            let value = token
                .parse::<f64>()
                .map_err(|_| InputError::InvalidNumber(token.to_string()))?;
            if is_valid_operand(value) {
                Ok(value)
            } else {
                Err(InputError::OutOfRange(value))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_operands(&values)
}
