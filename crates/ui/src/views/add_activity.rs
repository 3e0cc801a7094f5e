use dioxus::prelude::*;
use planner_core::model::{Priority, Tone};
use planner_core::{ActivityDraft, added_message};
use services::PlannerService;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::components::Notice;
use crate::views::state::Feedback;

/// Raw text of the add-activity form. Values stay in place after a submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ActivityForm {
    pub(crate) name: String,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) priority: Priority,
}

impl ActivityForm {
    pub(crate) fn to_draft(&self) -> ActivityDraft {
        ActivityDraft::new(
            self.name.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
            self.priority,
        )
    }
}

/// Submit the form and turn the outcome into the message shown under it.
pub(crate) fn submit_form(planner: &PlannerService, form: &ActivityForm) -> Feedback {
    match planner.submit(form.to_draft()) {
        Ok(activity) => Feedback::new(Tone::Success, added_message(&activity)),
        Err(err) => match err.rejection() {
            Some(rejection) => Feedback::new(rejection.tone(), rejection.to_string()),
            None => Feedback::new(Tone::Error, ViewError::Unknown.message()),
        },
    }
}

#[component]
pub fn AddActivityView() -> Element {
    let ctx = use_context::<AppContext>();
    let planner = ctx.planner();

    let mut form = use_signal(ActivityForm::default);
    let mut feedback = use_signal(|| None::<Feedback>);

    let on_submit = use_callback(move |()| {
        let outcome = submit_form(&planner, &form());
        feedback.set(Some(outcome));
    });

    let form_value = form();

    rsx! {
        div { class: "page add-activity-page",
            h3 { "Add a New Activity" }
            div { class: "activity-form",
                div { class: "form-row",
                    label { r#for: "activity-name", "Activity Name" }
                    input {
                        id: "activity-name",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "Enter activity name",
                        value: "{form_value.name}",
                        oninput: move |evt| {
                            let mut next = form();
                            next.name = evt.value();
                            form.set(next);
                        },
                    }
                }
                div { class: "form-row",
                    label { r#for: "activity-start", "Start Time (HH:MM)" }
                    input {
                        id: "activity-start",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "e.g., 09:00",
                        value: "{form_value.start_time}",
                        oninput: move |evt| {
                            let mut next = form();
                            next.start_time = evt.value();
                            form.set(next);
                        },
                    }
                }
                div { class: "form-row",
                    label { r#for: "activity-end", "End Time (HH:MM)" }
                    input {
                        id: "activity-end",
                        class: "form-input",
                        r#type: "text",
                        placeholder: "e.g., 10:30",
                        value: "{form_value.end_time}",
                        oninput: move |evt| {
                            let mut next = form();
                            next.end_time = evt.value();
                            form.set(next);
                        },
                    }
                }
                div { class: "form-row",
                    label { r#for: "activity-priority", "Priority Level" }
                    select {
                        id: "activity-priority",
                        class: "form-input",
                        value: "{form_value.priority}",
                        onchange: move |evt| {
                            let mut next = form();
                            next.priority = evt.value().parse().unwrap_or_default();
                            form.set(next);
                        },
                        for priority in Priority::ALL {
                            option {
                                value: "{priority}",
                                selected: priority == form_value.priority,
                                "{priority}"
                            }
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_submit.call(()),
                    "Add Activity"
                }
            }
            if let Some(note) = feedback() {
                Notice { tone: note.tone, message: note.message }
            }
        }
    }
}
