use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;

/// Root component. Expects an [`AppContext`] provided at launch.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Window title comes from configuration; the in-page header stays fixed.
        document::Title { "{ctx.app_name()}" }

        div { class: "app-root",
            // Render faults replace the whole page.
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        p { "Restart DayMaster to begin a new plan." }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
