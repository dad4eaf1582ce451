//! Staffing domain models.
//!
//! Provides the core data types for representing a staffing problem
//! and its solution.
//!
//! # Domain Mappings
//!
//! | u-staffing | Software shop | Film production | Consulting |
//! |------------|---------------|-----------------|------------|
//! | Contributor | Developer | Crew member | Consultant |
//! | Project | Feature | Shoot | Engagement |
//! | Requirement | Role | Position | Expertise |
//! | StaffingPlan | Roadmap | Call sheet | Staffing plan |

mod contributor;
mod plan;
mod project;
mod repository;

pub use contributor::{Availability, Contributor};
pub use plan::{Assignment, StaffingPlan};
pub use project::{Project, Requirement};
pub use repository::Repository;

/// A simulated day, counted from zero.
pub type Day = u32;
