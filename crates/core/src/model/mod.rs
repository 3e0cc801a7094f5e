mod activity;
mod ids;
mod session;
mod summary;

pub use activity::{Activity, Priority, PriorityError};
pub use ids::ActivityId;
pub use session::ActivitySession;
pub use summary::{BREAK_RECOMMENDATIONS, DaySummary, Motivation, Tone};
