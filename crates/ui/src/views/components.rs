use dioxus::prelude::*;
use planner_core::model::Tone;

use crate::vm::{ActivityCardVm, SummaryVm};

#[component]
pub(crate) fn Notice(tone: Tone, message: String) -> Element {
    rsx! {
        div { class: "notice notice--{tone.as_str()}", role: "status", "{message}" }
    }
}

/// Shared template for the activity list and the prioritized list.
#[component]
pub(crate) fn ActivityList(cards: Vec<ActivityCardVm>) -> Element {
    rsx! {
        ol { class: "activity-list",
            for card in cards {
                ActivityCard { key: "{card.id}", card: card.clone() }
            }
        }
    }
}

#[component]
fn ActivityCard(card: ActivityCardVm) -> Element {
    rsx! {
        li { class: "activity-card",
            p { class: "activity-title", "{card.position}. {card.name}" }
            p { class: "activity-time", "Time: {card.time_range} ({card.duration_minutes} mins)" }
            p { class: "activity-priority", "Priority: {card.priority}" }
        }
    }
}

#[component]
pub(crate) fn SummaryPanel(summary: SummaryVm) -> Element {
    rsx! {
        section { class: "summary",
            h3 { "Daily Summary" }
            p { class: "summary-total", "Total Activities Planned: {summary.total}" }
            Notice { tone: summary.tone, message: summary.message.to_string() }
            if !summary.breaks.is_empty() {
                h4 { "Recommended Breaks" }
                ul { class: "summary-breaks",
                    for line in summary.breaks.iter() {
                        li { "{line}" }
                    }
                }
            }
        }
    }
}
