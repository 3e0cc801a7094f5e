use dioxus::prelude::*;
use planner_core::model::Tone;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::components::{ActivityList, Notice, SummaryPanel};
use crate::vm::PrioritizedDayVm;

pub(crate) const NOTHING_TO_PRIORITIZE_MESSAGE: &str =
    "No activities to prioritize yet. Start by adding some!";

#[component]
pub fn PrioritizeView() -> Element {
    let ctx = use_context::<AppContext>();
    let planner = ctx.planner();

    // Opening this page reorders the session; do it once per visit, not per render.
    let day = use_hook(move || {
        planner
            .prioritize_and_summarize()
            .map(|day| day.as_ref().map(PrioritizedDayVm::from))
            .map_err(|_| ViewError::Unknown)
    });

    let body = match day {
        Ok(Some(PrioritizedDayVm { cards, summary })) => rsx! {
            h3 { "Suggested Activity Prioritization" }
            ActivityList { cards }
            SummaryPanel { summary }
        },
        Ok(None) => rsx! {
            Notice { tone: Tone::Info, message: NOTHING_TO_PRIORITIZE_MESSAGE.to_string() }
        },
        Err(err) => rsx! {
            p { class: "view-error", "{err.message()}" }
        },
    };

    rsx! {
        div { class: "page prioritize-page", {body} }
    }
}
