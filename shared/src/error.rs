//! Domain errors for the review workflow.
//!
//! Every variant is a local validation failure surfaced synchronously
//! to the caller; nothing here is retried and nothing is fatal.

use thiserror::Error;

/// Errors returned by the store, the seed loader and the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// The record id is absent from the store.
    #[error("verification record not found: {0}")]
    NotFound(String),
    /// A status name outside the five enumerated values.
    #[error("invalid verification status: {0}")]
    InvalidStatus(String),
    /// A transition target outside the five enumerated values.
    #[error("invalid status transition target: {0}")]
    InvalidTransition(String),
    /// A user-type name outside the enumerated values.
    #[error("invalid user type: {0}")]
    InvalidUserType(String),
}
