use std::sync::Arc;

use services::PlannerService;

/// What the composition root (`crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn planner(&self) -> Arc<PlannerService>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    planner: Arc<PlannerService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_owned(),
            planner: app.planner(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn planner(&self) -> Arc<PlannerService> {
        Arc::clone(&self.planner)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
