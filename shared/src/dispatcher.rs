//! Reviewer-initiated status transitions.
//!
//! The dispatcher is the only mutator of a [`VerificationStore`]:
//! every change validates first and then replaces one record slot,
//! so a failed call leaves the store exactly as it was and readers
//! never observe a partially updated record.

use std::fmt;
use std::str::FromStr;

use crate::error::ReviewError;
use crate::record::{Status, VerificationRecord};
use crate::store::VerificationStore;

/// A named reviewer action, each mapping to one target status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// Approve the submission.
    Approve,
    /// Reject the submission.
    Reject,
    /// Send the submission back for additional material.
    RequestMoreInfo,
    /// Pick the submission up for review.
    StartReview,
}

impl ReviewAction {
    /// Status the action moves a record to.
    pub fn target_status(&self) -> Status {
        match self {
            ReviewAction::Approve => Status::Approved,
            ReviewAction::Reject => Status::Rejected,
            ReviewAction::RequestMoreInfo => Status::MoreInfoRequested,
            ReviewAction::StartReview => Status::UnderReview,
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReviewAction::Approve => "approve",
            ReviewAction::Reject => "reject",
            ReviewAction::RequestMoreInfo => "request-info",
            ReviewAction::StartReview => "start-review",
        };
        f.write_str(name)
    }
}

/// Move a record to the status named by `target`.
///
/// Fails with [`ReviewError::InvalidTransition`] when `target` is not
/// one of the five status names, and with [`ReviewError::NotFound`]
/// when `id` is absent. Any status may be set from any current
/// status — the workflow is not linear, and reopening a terminal
/// record is allowed structurally. All non-status fields are kept.
pub fn transition(
    store: &mut VerificationStore,
    id: &str,
    target: &str,
) -> Result<VerificationRecord, ReviewError> {
    let status = Status::from_str(target)
        .map_err(|_| ReviewError::InvalidTransition(target.to_string()))?;
    transition_to(store, id, status)
}

/// Apply a named reviewer action to a record.
pub fn apply(
    store: &mut VerificationStore,
    id: &str,
    action: ReviewAction,
) -> Result<VerificationRecord, ReviewError> {
    transition_to(store, id, action.target_status())
}

fn transition_to(
    store: &mut VerificationStore,
    id: &str,
    status: Status,
) -> Result<VerificationRecord, ReviewError> {
    let mut record = store.get_by_id(id)?.clone();
    let previous = record.status;
    record.status = status;
    store.upsert(record.clone());
    tracing::info!("record {} transitioned: {} -> {}", record.id, previous, status);
    Ok(record)
}
