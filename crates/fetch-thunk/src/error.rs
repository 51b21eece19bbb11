//! Errors raised while constructing a fetch thunk

use thiserror::Error;

/// Message used when the entity name is missing or empty
pub const ENTITY_NAME_REQUIRED: &str = "entity name is required and must be a non-empty string";

/// Message used when no pending operation was supplied
pub const OPERATION_REQUIRED: &str = "pending operation is required and must be awaitable";

/// Errors that can occur while building a fetch thunk
///
/// These are raised synchronously, before any action is dispatched.
/// Failures of the pending operation itself are never reported here;
/// they become `Failure` actions instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    InvalidArgument(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = FetchError::InvalidArgument(ENTITY_NAME_REQUIRED);
        assert_eq!(
            err.to_string(),
            "entity name is required and must be a non-empty string"
        );
    }
}
