//! Domain error types.

use thiserror::Error;

/// Errors raised for malformed input at the presentational boundary.
///
/// Actions that are merely invalid for the current state are not errors;
/// they resolve to [`crate::aggregate::Transition::Ignored`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// No service provider exists with the given id.
    #[error("service provider not found: {0}")]
    ProviderNotFound(u32),

    /// The screen name is not one of the known screens.
    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    /// Input that no UI control could have produced.
    #[error("validation error: {0}")]
    Validation(String),
}
