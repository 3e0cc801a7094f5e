use crate::model::activity::{Activity, Priority};
use crate::model::ids::ActivityId;
use crate::model::summary::DaySummary;
use crate::time::TimeOfDay;

/// The activities planned in one user session, in their canonical order.
///
/// Insertion order until [`ActivitySession::prioritize`] runs; that sort is
/// destructive and sticks for every later read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySession {
    activities: Vec<Activity>,
    next_id: ActivityId,
}

impl Default for ActivitySession {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivitySession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            activities: Vec::new(),
            next_id: ActivityId::new(1),
        }
    }

    /// Append a new activity built from already-validated parts.
    pub(crate) fn append(
        &mut self,
        name: String,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        priority: Priority,
    ) -> &Activity {
        let id = self.next_id;
        self.next_id = id.next();
        self.activities
            .push(Activity::new(id, name, start_time, end_time, priority));
        &self.activities[self.activities.len() - 1]
    }

    /// Reorder in place by duration, longest first.
    ///
    /// `sort_by` is stable, so activities with equal durations keep their
    /// relative order.
    pub fn prioritize(&mut self) {
        self.activities
            .sort_by(|a, b| b.duration_minutes().cmp(&a.duration_minutes()));
    }

    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> DaySummary {
        DaySummary::for_count(self.len())
    }
}
