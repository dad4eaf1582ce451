//! Contributor model.
//!
//! A contributor is a person who fills requirement slots on projects.
//! Each contributor has named skills with integer proficiency levels and
//! an availability state that the day scheduler toggles as projects are
//! committed and completed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Day;

/// A contributor that can be assigned to project slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    /// Unique contributor name.
    pub name: String,
    /// Skill name → proficiency level (higher is better).
    pub skills: HashMap<String, u32>,
    /// Current availability.
    pub availability: Availability,
}

/// Availability state of a contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Availability {
    /// Free to be assigned today.
    #[default]
    Available,
    /// Working on a project; free again on the given day.
    BusyUntil(Day),
}

impl Contributor {
    /// Creates an available contributor with no skills.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: HashMap::new(),
            availability: Availability::Available,
        }
    }

    /// Adds (or overwrites) a skill.
    pub fn with_skill(mut self, skill: impl Into<String>, level: u32) -> Self {
        self.skills.insert(skill.into(), level);
        self
    }

    /// Proficiency for a skill, `None` if the contributor lacks it entirely.
    pub fn skill_level(&self, skill: &str) -> Option<u32> {
        self.skills.get(skill).copied()
    }

    /// Whether the contributor has the skill at any level.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains_key(skill)
    }

    /// Whether the contributor can be assigned today.
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self.availability, Availability::Available)
    }

    /// Marks the contributor busy until `day`.
    pub fn assign_until(&mut self, day: Day) {
        self.availability = Availability::BusyUntil(day);
    }

    /// Releases the contributor if their project ends on or before `day`.
    ///
    /// Returns `true` if the contributor was woken up by this call.
    pub fn wake(&mut self, day: Day) -> bool {
        match self.availability {
            Availability::BusyUntil(until) if until <= day => {
                self.availability = Availability::Available;
                true
            }
            _ => false,
        }
    }
}
