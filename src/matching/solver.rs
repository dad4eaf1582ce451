//! Maximum-weight matching solvers.
//!
//! # Algorithm
//!
//! `KuhnMunkresSolver` densifies the requirement graph into a
//! slot × contributor weight matrix (missing edges weigh 0) and runs the
//! Hungarian algorithm. The matrix is transposed when there are more
//! slots than contributors, since the algorithm needs rows ≤ columns.
//! Pairs landing on a missing edge are discarded afterwards.
//!
//! # Complexity
//! O(n² m) where n = min(slots, contributors), m = max(slots, contributors).
//!
//! # Reference
//! Munkres (1957), "Algorithms for the Assignment and Transportation Problems"

use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;
use std::fmt::Debug;
use tracing::trace;

use super::{Matching, RequirementGraph};

/// Computes a maximum-weight matching of a requirement graph.
///
/// Implementations must return node-disjoint edges maximizing total
/// weight. Among equal-weight maxima the choice is implementation-defined.
pub trait MatchingSolver: Send + Sync + Debug {
    /// Solver name.
    fn name(&self) -> &'static str;

    /// Solves the graph.
    fn solve(&self, graph: &RequirementGraph) -> Matching;
}

/// Hungarian-algorithm solver backed by `pathfinding`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KuhnMunkresSolver;

impl MatchingSolver for KuhnMunkresSolver {
    fn name(&self) -> &'static str {
        "KUHN_MUNKRES"
    }

    fn solve(&self, graph: &RequirementGraph) -> Matching {
        let slots = graph.num_conditions();
        let contributors = graph.contributor_count();
        if slots == 0 || contributors == 0 || graph.edges().is_empty() {
            return Matching::default();
        }

        let mut dense: Vec<Option<i64>> = vec![None; slots * contributors];
        for edge in graph.edges() {
            dense[edge.slot * contributors + edge.contributor] = Some(edge.weight);
        }
        let weight_at = |slot: usize, contributor: usize| dense[slot * contributors + contributor];

        let transpose = slots > contributors;
        let (rows, columns) = if transpose {
            (contributors, slots)
        } else {
            (slots, contributors)
        };

        let mut matrix = Matrix::new(rows, columns, 0i64);
        for row in 0..rows {
            for column in 0..columns {
                let (slot, contributor) = if transpose {
                    (column, row)
                } else {
                    (row, column)
                };
                matrix[(row, column)] = weight_at(slot, contributor).unwrap_or(0);
            }
        }

        let (_, assignment) = kuhn_munkres(&matrix);

        let mut matching = Matching::default();
        for (row, &column) in assignment.iter().enumerate() {
            let (slot, contributor) = if transpose {
                (column, row)
            } else {
                (row, column)
            };
            if let Some(weight) = weight_at(slot, contributor) {
                matching.insert(slot, contributor, weight);
            }
        }

        trace!(
            slots,
            contributors,
            matched = matching.len(),
            "kuhn-munkres solved"
        );
        matching
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::EdgeWeights;
    use crate::models::{Contributor, Project};

    fn weights() -> EdgeWeights {
        EdgeWeights {
            base: 1_000,
            exact_level_bonus: 1,
        }
    }

    #[test]
    fn test_full_cover() {
        let p = Project::new("P", 1, 1.0, 1)
            .with_requirement("A", 1)
            .with_requirement("B", 1);
        let roster = vec![
            Contributor::new("x").with_skill("A", 1).with_skill("B", 1),
            Contributor::new("y").with_skill("A", 1),
        ];
        let graph = RequirementGraph::build(&[&p], &roster, weights());
        let matching = KuhnMunkresSolver.solve(&graph);

        assert!(graph.is_covered_by(&matching));
        // Only x has B, so y must take A.
        assert_eq!(matching.contributor_for(0), Some(1));
        assert_eq!(matching.contributor_for(1), Some(0));
    }

    #[test]
    fn test_prefers_exact_level() {
        let p = Project::new("P", 1, 1.0, 1).with_requirement("A", 3);
        let roster = vec![
            Contributor::new("over").with_skill("A", 7),
            Contributor::new("exact").with_skill("A", 3),
        ];
        let graph = RequirementGraph::build(&[&p], &roster, weights());
        let matching = KuhnMunkresSolver.solve(&graph);

        assert_eq!(matching.contributor_for(0), Some(1));
        assert_eq!(matching.total_weight(), 1_001);
    }

    #[test]
    fn test_cover_beats_exact_fits() {
        // Taking the exact fit for slot 0 would leave slot 1 empty.
        let p = Project::new("P", 1, 1.0, 1)
            .with_requirement("A", 2)
            .with_requirement("B", 2);
        let roster = vec![
            Contributor::new("x").with_skill("A", 2).with_skill("B", 9),
            Contributor::new("y").with_skill("A", 9),
        ];
        let graph = RequirementGraph::build(&[&p], &roster, weights());
        let matching = KuhnMunkresSolver.solve(&graph);
        assert!(graph.is_covered_by(&matching));
    }

    #[test]
    fn test_more_slots_than_contributors() {
        let p = Project::new("P", 1, 1.0, 1)
            .with_requirement("A", 1)
            .with_requirement("A", 1)
            .with_requirement("A", 1);
        let roster = vec![
            Contributor::new("x").with_skill("A", 1),
            Contributor::new("y").with_skill("A", 1),
        ];
        let graph = RequirementGraph::build(&[&p], &roster, weights());
        let matching = KuhnMunkresSolver.solve(&graph);

        assert_eq!(matching.len(), 2);
        assert!(!graph.is_covered_by(&matching));
    }

    #[test]
    fn test_missing_edges_are_not_matched() {
        let p = Project::new("P", 1, 1.0, 1)
            .with_requirement("A", 1)
            .with_requirement("Z", 1);
        let roster = vec![
            Contributor::new("x").with_skill("A", 1),
            Contributor::new("y").with_skill("A", 1),
        ];
        let graph = RequirementGraph::build(&[&p], &roster, weights());
        let matching = KuhnMunkresSolver.solve(&graph);

        assert_eq!(matching.len(), 1);
        assert_eq!(matching.contributor_for(1), None);
    }

    #[test]
    fn test_empty_graph() {
        let roster = vec![Contributor::new("x").with_skill("A", 1)];
        let graph = RequirementGraph::build(&[], &roster, weights());
        let matching = KuhnMunkresSolver.solve(&graph);
        assert!(matching.is_empty());
        assert!(graph.is_covered_by(&matching));
    }
}
