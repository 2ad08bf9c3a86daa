use thiserror::Error;

/// Errors raised while turning user input into operands
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("you must enter exactly 4 numbers")]
    WrongCount(usize),
    #[error("input must be numeric if no spaces/commas are used")]
    NonNumericCompact(String),
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    #[error("numbers must be digits 1-9, found: {0}")]
    OutOfRange(f64),
}
