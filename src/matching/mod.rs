//! Contributor-to-slot matching.
//!
//! Builds the weighted requirement graph for a candidate project set and
//! solves it with a maximum-weight matching. A candidate set is feasible
//! only when the matching covers every slot; partial covers are rejected.
//!
//! # Usage
//!
//! ```
//! use u_staffing::matching::{EdgeWeights, KuhnMunkresSolver, MatchingSolver, RequirementGraph};
//! use u_staffing::models::{Contributor, Project};
//!
//! let roster = vec![Contributor::new("Anna").with_skill("C++", 3)];
//! let project = Project::new("Logging", 5, 10.0, 5).with_requirement("C++", 3);
//!
//! let graph = RequirementGraph::build(&[&project], &roster, EdgeWeights::default());
//! let matching = KuhnMunkresSolver.solve(&graph);
//! assert!(graph.is_covered_by(&matching));
//! ```

mod graph;
mod solver;

pub use graph::{Edge, EdgeWeights, RequirementGraph, Slot};
pub use solver::{KuhnMunkresSolver, MatchingSolver};

use std::collections::BTreeMap;

/// A set of node-disjoint slot–contributor pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    /// Slot node → contributor node.
    pairs: BTreeMap<usize, usize>,
    total_weight: i64,
}

impl Matching {
    /// Adds a matched pair.
    pub fn insert(&mut self, slot: usize, contributor: usize, weight: i64) {
        self.pairs.insert(slot, contributor);
        self.total_weight = self.total_weight.saturating_add(weight);
    }

    /// Number of matched edges.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether nothing is matched.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Contributor node filling a slot.
    pub fn contributor_for(&self, slot: usize) -> Option<usize> {
        self.pairs.get(&slot).copied()
    }

    /// Sum of matched edge weights.
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }
}

impl RequirementGraph {
    /// Whether the matching fills every slot of this graph.
    pub fn is_covered_by(&self, matching: &Matching) -> bool {
        matching.len() == self.num_conditions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_accessors() {
        let mut m = Matching::default();
        assert!(m.is_empty());

        m.insert(1, 0, 10);
        m.insert(0, 2, 11);
        assert_eq!(m.len(), 2);
        assert_eq!(m.total_weight(), 21);
        assert_eq!(m.contributor_for(0), Some(2));
        assert_eq!(m.contributor_for(5), None);
        assert_eq!(m.contributor_for(1), Some(0));
    }
}
