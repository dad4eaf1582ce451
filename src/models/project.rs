//! Project model.
//!
//! A project is a time-boxed piece of work with a score, a best-before
//! day, and an ordered list of requirement slots. Every slot must be
//! filled by a distinct contributor before the project can start.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Day;

/// A project awaiting staffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project name.
    pub name: String,
    /// Days of work once started.
    pub duration: u32,
    /// Score awarded when finished on time.
    pub score: f64,
    /// Last day the project can finish without penalty.
    pub best_before: Day,
    /// Requirement slots, in output order.
    pub requirements: Vec<Requirement>,
}

/// One requirement slot: a skill at a required level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Skill name.
    pub skill: String,
    /// Required proficiency level.
    pub level: u32,
}

impl Project {
    /// Creates a project with no requirements.
    pub fn new(name: impl Into<String>, duration: u32, score: f64, best_before: Day) -> Self {
        Self {
            name: name.into(),
            duration,
            score,
            best_before,
            requirements: Vec::new(),
        }
    }

    /// Appends a requirement slot.
    pub fn with_requirement(mut self, skill: impl Into<String>, level: u32) -> Self {
        self.requirements.push(Requirement::new(skill, level));
        self
    }

    /// Number of requirement slots.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.requirements.len()
    }

    /// Late-finish penalty if the project starts on `day`.
    pub fn penalty_if_started(&self, day: Day) -> u32 {
        day.saturating_add(self.duration)
            .saturating_sub(self.best_before)
    }

    /// Score actually earned if the project starts on `day` (never negative).
    pub fn value_if_started(&self, day: Day) -> f64 {
        (self.score - f64::from(self.penalty_if_started(day))).max(0.0)
    }

    /// Whether two slots ask for the same skill name.
    pub fn has_duplicate_skills(&self) -> bool {
        let mut seen = HashSet::new();
        self.requirements.iter().any(|r| !seen.insert(r.skill.as_str()))
    }
}

impl Requirement {
    /// Creates a requirement.
    pub fn new(skill: impl Into<String>, level: u32) -> Self {
        Self {
            skill: skill.into(),
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_builder() {
        let p = Project::new("WebServer", 7, 10.0, 7)
            .with_requirement("HTML", 3)
            .with_requirement("C++", 2);

        assert_eq!(p.name, "WebServer");
        assert_eq!(p.slot_count(), 2);
        assert_eq!(p.requirements[1], Requirement::new("C++", 2));
        assert!(!p.has_duplicate_skills());
    }

    #[test]
    fn test_penalty() {
        let p = Project::new("P", 5, 10.0, 7);
        assert_eq!(p.penalty_if_started(0), 0);
        assert_eq!(p.penalty_if_started(2), 0);
        assert_eq!(p.penalty_if_started(4), 2);
    }

    #[test]
    fn test_value_never_negative() {
        let p = Project::new("P", 1, 10.0, 0);
        assert!((p.value_if_started(0) - 9.0).abs() < 1e-10);
        assert!((p.value_if_started(100) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_duplicate_skills() {
        let p = Project::new("P", 1, 1.0, 1)
            .with_requirement("Rust", 1)
            .with_requirement("Rust", 4);
        assert!(p.has_duplicate_skills());
    }
}
