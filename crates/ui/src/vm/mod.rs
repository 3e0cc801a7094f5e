mod activity_vm;
mod summary_vm;

pub use activity_vm::{ActivityCardVm, map_activity_cards};
pub use summary_vm::{PrioritizedDayVm, SummaryVm};
