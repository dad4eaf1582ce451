//! Day-by-day staffing and plan evaluation.
//!
//! # Algorithm
//!
//! `StaffingScheduler` is greedy per day: it ranks the backlog by profit
//! density, finds the largest fully staffable suffix of that ranking with
//! `FeasibilitySearch`, commits it, and moves to the next day. It does not
//! look ahead across days and is not globally optimal.
//!
//! # KPI
//!
//! `PlanKpi` reports earned score, lateness, and contributor utilization
//! for a finished plan.

mod kpi;
mod search;
mod staffing;

pub use kpi::PlanKpi;
pub use search::FeasibilitySearch;
pub use staffing::{Decision, StaffingScheduler};
