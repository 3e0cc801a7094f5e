use planner_core::model::Activity;

/// UI-ready representation of one activity in a list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardVm {
    pub id: u64,
    /// 1-based position in the current order.
    pub position: usize,
    pub name: String,
    pub time_range: String,
    pub duration_minutes: u32,
    pub priority: &'static str,
}

impl ActivityCardVm {
    #[must_use]
    pub fn new(position: usize, activity: &Activity) -> Self {
        Self {
            id: activity.id().value(),
            position,
            name: activity.name().to_owned(),
            time_range: format!("{} to {}", activity.start_time(), activity.end_time()),
            duration_minutes: activity.duration_minutes(),
            priority: activity.priority().as_str(),
        }
    }
}

/// Map activities to cards, numbering them in the order given.
#[must_use]
pub fn map_activity_cards(activities: &[Activity]) -> Vec<ActivityCardVm> {
    activities
        .iter()
        .enumerate()
        .map(|(index, activity)| ActivityCardVm::new(index + 1, activity))
        .collect()
}
