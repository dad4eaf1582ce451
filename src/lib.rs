//! Contributor staffing for the U-Engine ecosystem.
//!
//! Allocates a pool of skilled contributors to a backlog of time-boxed
//! projects, one day at a time. Each day the backlog is ranked by profit
//! density, the largest fully staffable set of top-ranked projects is
//! found by binary search, and its slots are filled by a maximum-weight
//! matching that prefers exact skill-level fits.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Contributor`, `Project`, `Repository`,
//!   `Assignment`, `StaffingPlan`
//! - **`ranking`**: Day-aware ranking rules (`ProfitDensity`)
//! - **`matching`**: Requirement graph and maximum-weight matching solvers
//! - **`scheduler`**: Feasibility search, the day loop, and plan KPIs
//! - **`io`**: Input parsing and plan output
//! - **`validation`**: Input integrity checks (duplicate names, empty projects)
//! - **`generator`**: Seeded random instances
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod matching;
pub mod models;
pub mod ranking;
pub mod scheduler;
pub mod validation;

pub use config::{DuplicateSkillPolicy, SchedulerConfig};
pub use error::{Result, StaffingError};
