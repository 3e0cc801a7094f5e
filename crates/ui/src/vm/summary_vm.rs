use planner_core::model::{DaySummary, Tone};
use services::PrioritizedDay;

use crate::vm::activity_vm::{ActivityCardVm, map_activity_cards};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub total: usize,
    pub message: &'static str,
    pub tone: Tone,
    pub breaks: Vec<&'static str>,
}

impl From<&DaySummary> for SummaryVm {
    fn from(summary: &DaySummary) -> Self {
        let motivation = summary.motivation();
        Self {
            total: summary.total(),
            message: motivation.message(),
            tone: motivation.tone(),
            breaks: summary.break_recommendations().to_vec(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrioritizedDayVm {
    pub cards: Vec<ActivityCardVm>,
    pub summary: SummaryVm,
}

impl From<&PrioritizedDay> for PrioritizedDayVm {
    fn from(day: &PrioritizedDay) -> Self {
        Self {
            cards: map_activity_cards(&day.activities),
            summary: SummaryVm::from(&day.summary),
        }
    }
}
