use dioxus::prelude::*;
use planner_core::model::Tone;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::components::{ActivityList, Notice};
use crate::vm::map_activity_cards;

pub(crate) const EMPTY_ACTIVITIES_MESSAGE: &str =
    "No activities added yet. Use the 'Add Activity' button to get started!";

#[component]
pub fn ActivitiesView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = ctx
        .planner()
        .activities()
        .map(|activities| map_activity_cards(&activities))
        .map_err(|_| ViewError::Unknown);

    let body = match cards {
        Ok(cards) if cards.is_empty() => rsx! {
            Notice { tone: Tone::Info, message: EMPTY_ACTIVITIES_MESSAGE.to_string() }
        },
        Ok(cards) => rsx! {
            ActivityList { cards }
        },
        Err(err) => rsx! {
            p { class: "view-error", "{err.message()}" }
        },
    };

    rsx! {
        div { class: "page activities-page",
            h3 { "Your Planned Activities" }
            {body}
        }
    }
}
