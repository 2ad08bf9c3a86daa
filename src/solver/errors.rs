use thiserror::Error;

use crate::utils::InputError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}
