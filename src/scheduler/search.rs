//! Feasibility search over ranked project suffixes.
//!
//! # Algorithm
//!
//! Given projects ranked ascending by desirability, find the largest `k`
//! such that the last `k` projects can all be fully staffed at once.
//! Binary search over `k` with a `(min, max)` bracket: `min` is known
//! feasible, `max` is known infeasible or is the list length and not yet
//! probed. The bracket narrows by midpoint until adjacent, then `max` is
//! probed once if it was never tested.
//!
//! Feasibility is *assumed* to be monotone in `k` (fewer projects are
//! easier to staff). That holds for nested suffixes of a single ranked
//! list, but the narrowing loop in the scheduler changes the list between
//! searches, so the overall procedure is a heuristic, not an optimum.
//!
//! # Complexity
//! O(log n) matching solves per search.

use tracing::{debug, trace};

use crate::matching::{EdgeWeights, Matching, MatchingSolver, RequirementGraph};
use crate::models::{Contributor, Project};

/// Binary search for the largest fully staffable suffix of a ranked list.
#[derive(Debug, Clone, Copy)]
pub struct FeasibilitySearch<'a> {
    roster: &'a [Contributor],
    solver: &'a dyn MatchingSolver,
    weights: EdgeWeights,
}

impl<'a> FeasibilitySearch<'a> {
    /// Creates a search over the given roster. Busy contributors are ignored.
    pub fn new(
        roster: &'a [Contributor],
        solver: &'a dyn MatchingSolver,
        weights: EdgeWeights,
    ) -> Self {
        Self {
            roster,
            solver,
            weights,
        }
    }

    /// Builds and solves the requirement graph for a candidate set.
    ///
    /// Returns the graph and matching only if every slot is covered.
    pub fn try_staff(&self, candidates: &[&Project]) -> Option<(RequirementGraph, Matching)> {
        let graph = RequirementGraph::build(candidates, self.roster, self.weights);
        let matching = self.solver.solve(&graph);
        let covered = graph.is_covered_by(&matching);
        trace!(
            candidates = candidates.len(),
            slots = graph.num_conditions(),
            matched = matching.len(),
            covered,
            "feasibility probe"
        );
        covered.then_some((graph, matching))
    }

    /// Whether every slot of the candidate set can be filled simultaneously.
    pub fn is_feasible(&self, candidates: &[&Project]) -> bool {
        self.try_staff(candidates).is_some()
    }

    /// Largest `k` such that the last `k` ranked projects are feasible.
    ///
    /// `lower` is a count already known to be feasible (0 is always
    /// feasible). Values above the list length are clamped.
    pub fn largest_feasible_suffix(&self, ranked: &[&Project], lower: usize) -> usize {
        let len = ranked.len();
        let mut min_ind = lower.min(len);
        let mut max_ind = len;

        while min_ind + 1 < max_ind {
            let mid = (min_ind + max_ind) / 2;
            if self.is_feasible(suffix(ranked, mid)) {
                min_ind = mid;
            } else {
                max_ind = mid;
            }
            debug!(min_ind, max_ind, "feasibility bracket narrowed");
        }

        // Only the untouched upper bound still needs a probe.
        if max_ind == len && max_ind > min_ind && self.is_feasible(ranked) {
            return max_ind;
        }
        min_ind
    }
}

fn suffix<'p, 'q>(ranked: &'q [&'p Project], k: usize) -> &'q [&'p Project] {
    &ranked[ranked.len() - k..]
}
