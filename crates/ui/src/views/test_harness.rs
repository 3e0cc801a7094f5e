use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::PlannerService;

use crate::context::{UiApp, build_app_context};
use crate::routes::AppHeader;
use crate::views::{ActivitiesView, AddActivityView, PrioritizeView};

struct TestApp {
    name: String,
    planner: Arc<PlannerService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        &self.name
    }

    fn planner(&self) -> Arc<PlannerService> {
        Arc::clone(&self.planner)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    AddActivity,
    Activities,
    Prioritize,
    Header,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[allow(non_snake_case)]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view {
        ViewKind::AddActivity => rsx! { AddActivityView {} },
        ViewKind::Activities => rsx! { ActivitiesView {} },
        ViewKind::Prioritize => rsx! { PrioritizeView {} },
        ViewKind::Header => rsx! { AppHeader {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub planner: PlannerService,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Mount `view` over `planner`. Clones of the planner share its session, so the
/// returned handle observes whatever the view does to it.
pub fn setup_view_harness(view: ViewKind, planner: PlannerService) -> ViewHarness {
    setup_named_view_harness(view, planner, "DayMaster")
}

/// Like [`setup_view_harness`], with a custom window title in the context.
pub fn setup_named_view_harness(
    view: ViewKind,
    planner: PlannerService,
    app_name: &str,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        name: app_name.to_owned(),
        planner: Arc::new(planner.clone()),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });

    ViewHarness { dom, planner }
}
