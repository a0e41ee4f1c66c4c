use thiserror::Error;

use crate::core::ports::StoreError;

/// A local precondition failed before any write was attempted. Fully
/// recoverable: the caller may retry with corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("participant name must not be empty")]
    EmptyName,

    #[error("participant limit of {max} reached")]
    CapacityExceeded { max: usize },

    #[error("a participant named \"{name}\" already exists")]
    DuplicateName { name: String },

    #[error("sign-in index {index} is out of range for {total} sign-ins")]
    SignInOutOfRange { index: usize, total: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
