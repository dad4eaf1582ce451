//! Staffing plan (solution) model.
//!
//! A plan is the ordered list of committed project assignments across
//! the whole run. Each assignment names the project, the day it starts,
//! and the contributors filling its slots in requirement order.

use serde::{Deserialize, Serialize};

use super::Day;

/// The full result of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffingPlan {
    /// Committed assignments, grouped by day in commit order.
    pub assignments: Vec<Assignment>,
}

/// A committed project with its staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Project name.
    pub project: String,
    /// One contributor per requirement slot, in requirement order.
    pub contributors: Vec<String>,
    /// Day the project was committed.
    pub start_day: Day,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(project: impl Into<String>, contributors: Vec<String>, start_day: Day) -> Self {
        Self {
            project: project.into(),
            contributors,
            start_day,
        }
    }

    /// Whether a contributor fills one of this assignment's slots.
    pub fn involves(&self, contributor: &str) -> bool {
        self.contributors.iter().any(|c| c == contributor)
    }
}

impl StaffingPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one day's assignments.
    pub fn extend(&mut self, assignments: impl IntoIterator<Item = Assignment>) {
        self.assignments.extend(assignments);
    }

    /// Number of committed assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether nothing was committed.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assignments committed on `day`.
    pub fn assignments_on(&self, day: Day) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.start_day == day)
            .collect()
    }

    /// The assignment for a project, if it was ever committed.
    pub fn assignment_for_project(&self, project: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.project == project)
    }

    /// Every assignment a contributor took part in, in commit order.
    pub fn assignments_for_contributor(&self, contributor: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.involves(contributor))
            .collect()
    }

    /// Last day on which anything was committed.
    pub fn last_start_day(&self) -> Option<Day> {
        self.assignments.iter().map(|a| a.start_day).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample_plan() -> StaffingPlan {
        let mut plan = StaffingPlan::new();
        plan.extend(vec![
            Assignment::new("WebServer", names(&["Bob", "Anna"]), 0),
            Assignment::new("Logging", names(&["Anna"]), 7),
            Assignment::new("WebChat", names(&["Maria", "Bob"]), 7),
        ]);
        plan
    }

    #[test]
    fn test_plan_queries() {
        let plan = sample_plan();
        assert_eq!(plan.assignment_count(), 3);
        assert_eq!(plan.assignments_on(7).len(), 2);
        assert!(plan.assignments_on(1).is_empty());
        assert_eq!(plan.last_start_day(), Some(7));

        let logging = plan.assignment_for_project("Logging").unwrap();
        assert_eq!(logging.contributors, names(&["Anna"]));
        assert!(plan.assignment_for_project("Missing").is_none());
    }

    #[test]
    fn test_assignments_for_contributor() {
        let plan = sample_plan();
        let anna: Vec<_> = plan
            .assignments_for_contributor("Anna")
            .iter()
            .map(|a| a.project.as_str())
            .collect();
        assert_eq!(anna, vec!["WebServer", "Logging"]);
        assert!(plan.assignments_for_contributor("Nobody").is_empty());
    }

    #[test]
    fn test_empty_plan() {
        let plan = StaffingPlan::new();
        assert!(plan.is_empty());
        assert_eq!(plan.last_start_day(), None);
    }
}
