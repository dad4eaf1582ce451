//! Day-by-day staffing scheduler.
//!
//! # Algorithm
//!
//! For each day `d` in `0..horizon`:
//! 1. Wake contributors whose project ends on `d`.
//! 2. Rank the backlog ascending by the ranking rule.
//! 3. Narrow the candidate list: search for the largest feasible suffix
//!    `k`; if `k` is the whole list, stop; otherwise drop the project
//!    just outside the suffix (index `len - k - 1`) and search again,
//!    starting from the known-feasible `k`.
//! 4. Rebuild assignments by project name against the input snapshot.
//! 5. Commit: mark staff busy until `d + duration`, remove the project
//!    from the backlog.
//!
//! Dropped candidates only leave that day's list; they stay in the
//! backlog and compete again tomorrow.
//!
//! Days are strictly sequential: every day reads the availability and
//! backlog left by the previous one.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::FeasibilitySearch;
use crate::config::SchedulerConfig;
use crate::error::{Result, StaffingError};
use crate::matching::{KuhnMunkresSolver, Matching, MatchingSolver, RequirementGraph};
use crate::models::{Assignment, Contributor, Day, Project, Repository, StaffingPlan};
use crate::ranking::{rank_projects, rules::ProfitDensity, RankingContext, RankingRule};
use crate::validation::validate_repository;

/// The outcome of one day's candidate narrowing.
#[derive(Debug, Clone)]
pub struct Decision<'p> {
    /// Projects to commit, in ranked order.
    pub projects: Vec<&'p Project>,
    /// Requirement graph over `projects`.
    pub graph: RequirementGraph,
    /// A matching covering every slot of `graph`.
    pub matching: Matching,
}

impl Decision<'_> {
    fn empty() -> Self {
        Self {
            projects: Vec::new(),
            graph: RequirementGraph::default(),
            matching: Matching::default(),
        }
    }

    /// Whether nothing gets committed.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Greedy per-day staffing scheduler.
///
/// # Example
///
/// ```
/// use u_staffing::models::{Contributor, Project, Repository};
/// use u_staffing::scheduler::StaffingScheduler;
///
/// let repository = Repository::new(
///     vec![Contributor::new("A").with_skill("C0", 3)],
///     vec![Project::new("P0", 1, 10.0, 0).with_requirement("C0", 3)],
/// );
///
/// let plan = StaffingScheduler::new().run(&repository).unwrap();
/// assert_eq!(plan.assignment_count(), 1);
/// assert_eq!(plan.assignments[0].contributors, vec!["A".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct StaffingScheduler {
    config: SchedulerConfig,
    rule: Arc<dyn RankingRule>,
    solver: Arc<dyn MatchingSolver>,
}

impl StaffingScheduler {
    /// Creates a scheduler with the default configuration, profit-density
    /// ranking, and the Hungarian solver.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            rule: Arc::new(ProfitDensity),
            solver: Arc::new(KuhnMunkresSolver),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the ranking rule.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rule = Arc::new(rule);
        self
    }

    /// Sets the matching solver.
    pub fn with_solver<S: MatchingSolver + 'static>(mut self, solver: S) -> Self {
        self.solver = Arc::new(solver);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs the whole horizon over a repository.
    ///
    /// The input is validated first and left untouched; it serves as the
    /// name-lookup snapshot while a private copy is mutated.
    ///
    /// # Errors
    /// [`StaffingError::Config`] for an unusable configuration, including
    /// edge weights too small or too large for this repository,
    /// [`StaffingError::Validation`] for unschedulable input.
    pub fn run(&self, repository: &Repository) -> Result<StaffingPlan> {
        self.config.validate()?;
        validate_repository(repository, self.config.duplicate_skills)
            .map_err(StaffingError::Validation)?;

        // No day can match more pairs than there are slots or contributors.
        let total_slots: usize = repository.projects.iter().map(Project::slot_count).sum();
        let max_pairs = total_slots.min(repository.contributors.len()).max(1);
        self.config.weights().check_capacity(max_pairs)?;

        let mut live = repository.clone();
        let mut plan = StaffingPlan::new();

        for day in 0..self.config.horizon_days {
            if self.config.stop_when_idle && live.is_backlog_empty() {
                info!(day, "backlog empty, stopping early");
                break;
            }
            let assignments = self.plan_day(&mut live, repository, day);
            plan.extend(assignments);
        }

        info!(
            committed = plan.assignment_count(),
            unscheduled = live.projects.len(),
            "run complete"
        );
        Ok(plan)
    }

    /// Plans and commits a single day.
    ///
    /// `live` is woken, narrowed, and updated in place. `original` is only
    /// read, to order and name the returned assignments.
    pub fn plan_day(
        &self,
        live: &mut Repository,
        original: &Repository,
        day: Day,
    ) -> Vec<Assignment> {
        let woken = live.wake_contributors(day);
        if woken > 0 {
            debug!(day, woken, "contributors released");
        }

        let assignments = {
            let mut ranked: Vec<&Project> = live.projects.iter().collect();
            rank_projects(self.rule.as_ref(), &mut ranked, &RankingContext::on_day(day));

            let decision = self.decide(&live.contributors, ranked);
            to_assignments(&decision, &live.contributors, original, day)
        };

        for assignment in &assignments {
            commit(live, assignment, day);
        }

        if !assignments.is_empty() {
            info!(
                day,
                committed = assignments.len(),
                backlog = live.projects.len(),
                "day planned"
            );
        }
        assignments
    }

    /// Narrows a ranked candidate list to a fully staffable set.
    ///
    /// Each iteration removes exactly one candidate, so the loop runs at
    /// most `ranked.len()` times.
    pub fn decide<'p>(&self, roster: &[Contributor], mut ranked: Vec<&'p Project>) -> Decision<'p> {
        let search = FeasibilitySearch::new(roster, self.solver.as_ref(), self.config.weights());
        let mut lower = 0;

        loop {
            let feasible = search.largest_feasible_suffix(&ranked, lower);
            if feasible >= ranked.len() {
                break;
            }

            let before = ranked.len();
            let dropped = ranked.remove(before - feasible - 1);
            debug_assert!(ranked.len() < before);
            debug!(
                project = %dropped.name,
                feasible,
                remaining = ranked.len(),
                "candidate dropped"
            );
            lower = feasible;
        }

        if ranked.is_empty() {
            return Decision::empty();
        }

        match search.try_staff(&ranked) {
            Some((graph, matching)) => Decision {
                projects: ranked,
                graph,
                matching,
            },
            None => {
                warn!(
                    candidates = ranked.len(),
                    solver = self.solver.name(),
                    "final candidate set lost its cover; committing nothing"
                );
                Decision::empty()
            }
        }
    }
}

impl Default for StaffingScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a decision into named assignments, in input project order.
fn to_assignments(
    decision: &Decision<'_>,
    roster: &[Contributor],
    original: &Repository,
    day: Day,
) -> Vec<Assignment> {
    if decision.is_empty() {
        return Vec::new();
    }

    let mut staffed: HashMap<&str, Vec<Option<String>>> = HashMap::new();
    for (slot_idx, slot) in decision.graph.slots().iter().enumerate() {
        let Some(node) = decision.matching.contributor_for(slot_idx) else {
            continue;
        };
        let project = decision.projects[slot.project];
        let contributor = &roster[decision.graph.roster_index(node)];
        staffed
            .entry(project.name.as_str())
            .or_insert_with(|| vec![None; project.slot_count()])[slot.requirement] =
            Some(contributor.name.clone());
    }

    original
        .projects
        .iter()
        .filter_map(|project| {
            let slots = staffed.remove(project.name.as_str())?;
            // All-or-nothing: a single empty slot discards the project.
            let contributors: Option<Vec<String>> = slots.into_iter().collect();
            contributors.map(|names| Assignment::new(&project.name, names, day))
        })
        .collect()
}

/// Marks an assignment's staff busy and removes its project from the backlog.
fn commit(live: &mut Repository, assignment: &Assignment, day: Day) {
    let Some(project) = live.remove_project(&assignment.project) else {
        warn!(project = %assignment.project, "committed project missing from backlog");
        return;
    };
    let free_on = day.saturating_add(project.duration);
    for name in &assignment.contributors {
        if let Some(contributor) = live.contributor_mut(name) {
            contributor.assign_until(free_on);
        }
    }
}
