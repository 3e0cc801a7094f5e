#![forbid(unsafe_code)]

pub mod intake;
pub mod model;
pub mod time;

pub use intake::{ActivityDraft, Rejection, added_message, submit_activity};
pub use time::{TimeError, TimeOfDay, compute_duration, validate_time};
