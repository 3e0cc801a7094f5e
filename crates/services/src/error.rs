//! Shared error types for the services crate.

use thiserror::Error;

use planner_core::Rejection;

/// Errors emitted by `PlannerService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlannerError {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("activity session is unavailable")]
    SessionUnavailable,
}

impl PlannerError {
    /// The intake rejection behind this error, if any.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            PlannerError::Rejected(rejection) => Some(*rejection),
            PlannerError::SessionUnavailable => None,
        }
    }
}
