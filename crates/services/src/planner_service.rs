use std::sync::{Arc, Mutex, MutexGuard};

use planner_core::model::{Activity, ActivitySession, DaySummary};
use planner_core::{ActivityDraft, submit_activity};
use tracing::{debug, info, warn};

use crate::error::PlannerError;

/// Activities in prioritized order together with the summary for that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrioritizedDay {
    pub activities: Vec<Activity>,
    pub summary: DaySummary,
}

/// Owns the activity session for one user and runs every operation on it.
#[derive(Clone, Default)]
pub struct PlannerService {
    session: Arc<Mutex<ActivitySession>>,
}

impl PlannerService {
    #[must_use]
    pub fn new() -> Self {
        Self::with_session(ActivitySession::new())
    }

    #[must_use]
    pub fn with_session(session: ActivitySession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Validate a form submission and append it to the session.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Rejected` when the draft fails intake checks; the
    /// session is left unchanged.
    /// Returns `PlannerError::SessionUnavailable` if the session lock is poisoned.
    pub fn submit(&self, draft: ActivityDraft) -> Result<Activity, PlannerError> {
        let mut session = self.lock()?;
        match submit_activity(&mut session, draft) {
            Ok(activity) => {
                info!(
                    id = activity.id().value(),
                    name = activity.name(),
                    duration_minutes = activity.duration_minutes(),
                    "activity added"
                );
                Ok(activity)
            }
            Err(rejection) => {
                warn!(%rejection, "activity rejected");
                Err(rejection.into())
            }
        }
    }

    /// Snapshot of the session in its current order.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::SessionUnavailable` if the session lock is poisoned.
    pub fn activities(&self) -> Result<Vec<Activity>, PlannerError> {
        let session = self.lock()?;
        debug!(count = session.len(), "listing activities");
        Ok(session.activities().to_vec())
    }

    /// Sort the session by duration, longest first, and return the new order.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::SessionUnavailable` if the session lock is poisoned.
    pub fn prioritize(&self) -> Result<Vec<Activity>, PlannerError> {
        let mut session = self.lock()?;
        session.prioritize();
        info!(count = session.len(), "activities prioritized");
        Ok(session.activities().to_vec())
    }

    /// Count-based summary of the session.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::SessionUnavailable` if the session lock is poisoned.
    pub fn summary(&self) -> Result<DaySummary, PlannerError> {
        Ok(self.lock()?.summary())
    }

    /// Prioritize and summarize under a single lock.
    ///
    /// Returns `Ok(None)` without touching the session when it is empty.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::SessionUnavailable` if the session lock is poisoned.
    pub fn prioritize_and_summarize(&self) -> Result<Option<PrioritizedDay>, PlannerError> {
        let mut session = self.lock()?;
        if session.is_empty() {
            debug!("nothing to prioritize");
            return Ok(None);
        }
        session.prioritize();
        info!(count = session.len(), "activities prioritized");
        Ok(Some(PrioritizedDay {
            activities: session.activities().to_vec(),
            summary: session.summary(),
        }))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ActivitySession>, PlannerError> {
        self.session.lock().map_err(|err| {
            warn!(error = %err, "activity session lock poisoned");
            PlannerError::SessionUnavailable
        })
    }
}
