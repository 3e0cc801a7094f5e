//! Validation and acceptance of a submitted activity form.

use thiserror::Error;

use crate::model::{Activity, ActivitySession, Priority, Tone};
use crate::time::{TimeOfDay, validate_time};

/// Why a submission was turned away. Only the first failing check is reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejection {
    #[error("Please enter an activity name.")]
    MissingName,
    #[error("Please enter valid start and end times in HH:MM format.")]
    InvalidTimeFormat,
    #[error("Start time must be earlier than end time.")]
    StartNotBeforeEnd,
}

impl Rejection {
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            Rejection::MissingName => Tone::Warning,
            Rejection::InvalidTimeFormat | Rejection::StartNotBeforeEnd => Tone::Error,
        }
    }
}

/// Raw form input for a new activity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityDraft {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub priority: Priority,
}

impl ActivityDraft {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            priority,
        }
    }

    /// Run the intake checks in order: name, time format, then start/end order.
    ///
    /// The order check compares the raw text, not clock values. That rejects
    /// overnight ranges such as `23:00`-`01:00` and also `9:00`-`10:00`.
    ///
    /// # Errors
    ///
    /// Returns the first `Rejection` that applies.
    pub fn validate(&self) -> Result<(TimeOfDay, TimeOfDay), Rejection> {
        if self.name.is_empty() {
            return Err(Rejection::MissingName);
        }
        if !validate_time(&self.start_time) || !validate_time(&self.end_time) {
            return Err(Rejection::InvalidTimeFormat);
        }
        if self.start_time >= self.end_time {
            return Err(Rejection::StartNotBeforeEnd);
        }

        let start = TimeOfDay::parse(&self.start_time).map_err(|_| Rejection::InvalidTimeFormat)?;
        let end = TimeOfDay::parse(&self.end_time).map_err(|_| Rejection::InvalidTimeFormat)?;
        Ok((start, end))
    }
}

/// Validate `draft` and append it to `session`.
///
/// On rejection the session is left untouched.
///
/// # Errors
///
/// Returns the first `Rejection` reported by [`ActivityDraft::validate`].
pub fn submit_activity(
    session: &mut ActivitySession,
    draft: ActivityDraft,
) -> Result<Activity, Rejection> {
    let (start, end) = draft.validate()?;
    let activity = session.append(draft.name, start, end, draft.priority);
    Ok(activity.clone())
}

/// Acknowledgement shown after an activity is accepted.
#[must_use]
pub fn added_message(activity: &Activity) -> String {
    format!("Activity '{}' added successfully!", activity.name())
}
