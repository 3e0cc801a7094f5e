use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::ids::ActivityId;
use crate::time::TimeOfDay;

//
// ─── PRIORITY ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PriorityError {
    #[error("unknown priority level: {0:?}")]
    Unknown(String),
}

/// Priority level chosen for an activity.
///
/// Purely informational: prioritization orders by duration, not by this value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    #[default]
    High,
    Medium,
    Low,
}

impl Priority {
    /// All levels in selector order.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(PriorityError::Unknown(other.to_owned())),
        }
    }
}

//
// ─── ACTIVITY ──────────────────────────────────────────────────────────────────
//

/// A planned activity.
///
/// The duration is fixed when the record is built and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    id: ActivityId,
    name: String,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
    priority: Priority,
    duration_minutes: u32,
}

impl Activity {
    #[must_use]
    pub(crate) fn new(
        id: ActivityId,
        name: String,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        priority: Priority,
    ) -> Self {
        let duration_minutes = start_time.minutes_until(&end_time);
        Self {
            id,
            name,
            start_time,
            end_time,
            priority,
            duration_minutes,
        }
    }

    #[must_use]
    pub fn id(&self) -> ActivityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn start_time(&self) -> &TimeOfDay {
        &self.start_time
    }

    #[must_use]
    pub fn end_time(&self) -> &TimeOfDay {
        &self.end_time
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}
