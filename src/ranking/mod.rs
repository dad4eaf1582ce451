//! Project ranking.
//!
//! Orders the backlog by how much a project is worth starting today.
//! The day is passed explicitly through a [`RankingContext`], so a
//! ranking is a pure function of the day and the project attributes.
//!
//! # Order Convention
//!
//! **Higher score = more desirable.** Projects are sorted *ascending*,
//! which puts the most desirable projects at the end of the list. The
//! feasibility search works on trailing suffixes of that list.
//!
//! ```
//! use u_staffing::models::Project;
//! use u_staffing::ranking::{rank_projects, rules, RankingContext};
//!
//! let slow = Project::new("slow", 10, 10.0, 20).with_requirement("Rust", 1);
//! let quick = Project::new("quick", 1, 10.0, 20).with_requirement("Rust", 1);
//! let mut ranked = vec![&quick, &slow];
//!
//! rank_projects(&rules::ProfitDensity, &mut ranked, &RankingContext::on_day(0));
//! assert_eq!(ranked.last().unwrap().name, "quick");
//! ```

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::{Day, Project};

/// Score returned by a ranking rule. Higher = more desirable.
pub type RankScore = f64;

/// Per-day state passed to ranking rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankingContext {
    /// The day being scheduled.
    pub day: Day,
}

impl RankingContext {
    /// Creates a context for the given day.
    pub fn on_day(day: Day) -> Self {
        Self { day }
    }
}

/// A rule that scores how desirable it is to start a project today.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name.
    fn name(&self) -> &'static str;

    /// Scores a project; higher means start it sooner.
    fn evaluate(&self, project: &Project, context: &RankingContext) -> RankScore;
}

/// Sorts projects ascending by rule score.
///
/// The sort is stable: ties keep their incoming order, so ranking an
/// already-ranked list again is a no-op.
pub fn rank_projects(rule: &dyn RankingRule, projects: &mut [&Project], context: &RankingContext) {
    let mut scored: Vec<(RankScore, &Project)> = projects
        .iter()
        .map(|&p| (rule.evaluate(p, context), p))
        .collect();
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    for (slot, (_, project)) in projects.iter_mut().zip(scored) {
        *slot = project;
    }
}
