#![forbid(unsafe_code)]

pub mod error;
pub mod planner_service;

pub use error::PlannerError;
pub use planner_core::model::{Activity, DaySummary, Priority};
pub use planner_core::ActivityDraft;
pub use planner_service::{PlannerService, PrioritizedDay};
