mod activities;
mod add_activity;
mod components;
mod prioritize;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use activities::ActivitiesView;
pub use add_activity::AddActivityView;
pub use prioritize::PrioritizeView;
pub use state::ViewError;
