//! Staffing plan quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Score | Sum of max(score - lateness, 0) over committed projects |
//! | Makespan | Latest completion day (start + duration) |
//! | Total Lateness | Sum of max(0, completion - best_before) |
//! | On-Time Rate | Fraction of committed projects finishing by best-before |
//! | Avg Utilization | Mean busy days / makespan across the roster |

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Repository, StaffingPlan};

/// Plan performance indicators. All times are in days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanKpi {
    /// Score earned, with late-finish penalties applied.
    pub total_score: f64,
    /// Projects committed.
    pub projects_completed: usize,
    /// Projects never committed.
    pub projects_unscheduled: usize,
    /// Latest completion day.
    pub makespan: u32,
    /// Sum of days late across committed projects.
    pub total_lateness: u64,
    /// Largest single lateness.
    pub max_lateness: u32,
    /// Fraction of committed projects finishing on time (0.0..1.0).
    pub on_time_rate: f64,
    /// Mean contributor utilization over the makespan (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-contributor utilization.
    pub utilization_by_contributor: HashMap<String, f64>,
}

impl PlanKpi {
    /// Computes KPIs from a plan and the repository it was built from.
    ///
    /// Assignments naming projects absent from `repository` are ignored.
    pub fn calculate(plan: &StaffingPlan, repository: &Repository) -> Self {
        let mut total_score = 0.0;
        let mut completed = 0usize;
        let mut on_time = 0usize;
        let mut makespan = 0u32;
        let mut total_lateness = 0u64;
        let mut max_lateness = 0u32;
        let mut busy_days: HashMap<&str, u64> = HashMap::new();

        for assignment in &plan.assignments {
            let Some(project) = repository.project(&assignment.project) else {
                continue;
            };
            completed += 1;

            let lateness = project.penalty_if_started(assignment.start_day);
            total_score += project.value_if_started(assignment.start_day);
            total_lateness += u64::from(lateness);
            max_lateness = max_lateness.max(lateness);
            if lateness == 0 {
                on_time += 1;
            }

            makespan = makespan.max(assignment.start_day.saturating_add(project.duration));
            for name in &assignment.contributors {
                *busy_days.entry(name.as_str()).or_insert(0) += u64::from(project.duration);
            }
        }

        let utilization_by_contributor: HashMap<String, f64> = if makespan == 0 {
            HashMap::new()
        } else {
            repository
                .contributors
                .iter()
                .map(|c| {
                    let busy = busy_days.get(c.name.as_str()).copied().unwrap_or(0);
                    (c.name.clone(), busy as f64 / f64::from(makespan))
                })
                .collect()
        };

        let avg_utilization = if utilization_by_contributor.is_empty() {
            0.0
        } else {
            utilization_by_contributor.values().sum::<f64>()
                / utilization_by_contributor.len() as f64
        };

        let on_time_rate = if completed == 0 {
            1.0
        } else {
            on_time as f64 / completed as f64
        };

        Self {
            total_score,
            projects_completed: completed,
            projects_unscheduled: repository.projects.len().saturating_sub(completed),
            makespan,
            total_lateness,
            max_lateness,
            on_time_rate,
            avg_utilization,
            utilization_by_contributor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Contributor, Project};

    fn repository() -> Repository {
        Repository::new(
            vec![
                Contributor::new("Anna").with_skill("C++", 2),
                Contributor::new("Bob").with_skill("HTML", 5),
                Contributor::new("Idle"),
            ],
            vec![
                Project::new("Logging", 5, 10.0, 5).with_requirement("C++", 3),
                Project::new("WebServer", 7, 10.0, 7).with_requirement("HTML", 3),
                Project::new("Never", 1, 1.0, 1).with_requirement("Z", 1),
            ],
        )
    }

    fn plan() -> StaffingPlan {
        let mut plan = StaffingPlan::new();
        plan.extend(vec![
            Assignment::new("WebServer", vec!["Bob".into()], 0),
            // Finishes on day 7, best before 5 → 2 days late.
            Assignment::new("Logging", vec!["Anna".into()], 2),
        ]);
        plan
    }

    #[test]
    fn test_kpi_scores() {
        let kpi = PlanKpi::calculate(&plan(), &repository());
        assert!((kpi.total_score - 18.0).abs() < 1e-10);
        assert_eq!(kpi.projects_completed, 2);
        assert_eq!(kpi.projects_unscheduled, 1);
        assert_eq!(kpi.makespan, 7);
        assert_eq!(kpi.total_lateness, 2);
        assert_eq!(kpi.max_lateness, 2);
        assert!((kpi.on_time_rate - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization() {
        let kpi = PlanKpi::calculate(&plan(), &repository());
        assert!((kpi.utilization_by_contributor["Bob"] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_contributor["Anna"] - 5.0 / 7.0).abs() < 1e-10);
        assert!((kpi.utilization_by_contributor["Idle"] - 0.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - (12.0 / 7.0) / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_plan() {
        let kpi = PlanKpi::calculate(&StaffingPlan::new(), &repository());
        assert_eq!(kpi.total_score, 0.0);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.on_time_rate, 1.0);
        assert_eq!(kpi.avg_utilization, 0.0);
        assert_eq!(kpi.projects_unscheduled, 3);
    }
}
