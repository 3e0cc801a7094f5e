use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ActivitiesView, AddActivityView, PrioritizeView};

/// One route per navigation page. The router is the dispatch table from a page
/// identifier to the view that handles it.
#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AddActivityView)] AddActivity {},
        #[route("/activities", ActivitiesView)] Activities {},
        #[route("/prioritize", PrioritizeView)] Prioritize {},
}

impl Route {
    /// Sidebar entries, in display order.
    #[must_use]
    pub fn navigation() -> [Route; 3] {
        [Route::AddActivity {}, Route::Activities {}, Route::Prioritize {}]
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Route::AddActivity {} => "Add a New Activity",
            Route::Activities {} => "View Activities",
            Route::Prioritize {} => "Prioritize & Summarize",
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                AppHeader {}
                Outlet::<Route> {}
            }
        }
    }
}

/// Fixed product header. The configurable app name only titles the window.
#[component]
pub(crate) fn AppHeader() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { "DayMaster" }
            p { class: "tagline", "Plan, prioritize, and conquer your day!" }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h2 { "Navigation" }
            ul {
                for route in Route::navigation() {
                    li {
                        Link { to: route.clone(), active_class: "active", "{route.label()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_labels_and_paths() {
        let entries: Vec<(String, &str)> = Route::navigation()
            .iter()
            .map(|route| (route.to_string(), route.label()))
            .collect();

        assert_eq!(
            entries,
            [
                ("/".to_string(), "Add a New Activity"),
                ("/activities".to_string(), "View Activities"),
                ("/prioritize".to_string(), "Prioritize & Summarize"),
            ]
        );
    }
}
