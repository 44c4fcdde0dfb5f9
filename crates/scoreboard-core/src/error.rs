//! Domain error types.

use thiserror::Error;

/// Expected, recoverable outcomes of a store operation.
///
/// Both variants are deterministic consequences of the current store state;
/// retrying without a change in state yields the same result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No record exists for the username.
    #[error("Could not find username: {0}")]
    NotFound(String),

    /// A record already exists for the username.
    #[error("Username {0} already exists")]
    AlreadyExists(String),
}
