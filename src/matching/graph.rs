//! Requirement graph construction.
//!
//! # Structure
//!
//! Bipartite: contributor nodes on one side, slot nodes on the other.
//! A slot is one requirement of one candidate project, keyed by
//! (candidate index, requirement index), so a project that lists the
//! same skill twice still gets two distinct slots.
//!
//! An edge joins a contributor and a slot when the contributor has the
//! slot's skill at any level. Its weight is `base`, plus
//! `exact_level_bonus` when the level matches exactly.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffingError};
use crate::models::{Contributor, Project};

/// Edge weighting scheme.
///
/// `base` must exceed `exact_level_bonus` times the largest possible
/// matching, so that covering one more slot always beats any number of
/// exact-level fits. See [`EdgeWeights::check_capacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeWeights {
    /// Weight of every edge.
    pub base: i64,
    /// Added when the contributor's level equals the required level.
    pub exact_level_bonus: i64,
}

impl Default for EdgeWeights {
    fn default() -> Self {
        Self {
            base: 100_000_000_000,
            exact_level_bonus: 1,
        }
    }
}

impl EdgeWeights {
    /// Weight of an edge between a contributor at `level` and a slot requiring `required`.
    #[inline]
    pub fn weight(&self, level: u32, required: u32) -> i64 {
        if level == required {
            self.base.saturating_add(self.exact_level_bonus)
        } else {
            self.base
        }
    }

    /// Checks these weights for matchings of up to `max_pairs` edges.
    ///
    /// Requires `base > max_pairs * exact_level_bonus`, and that
    /// `(max_pairs + 1) * (base + exact_level_bonus)` fits in an `i64` so
    /// the solver's running sums cannot overflow.
    ///
    /// # Errors
    /// [`StaffingError::Config`] when either bound fails.
    pub fn check_capacity(&self, max_pairs: usize) -> Result<()> {
        let overflow = || {
            StaffingError::Config(format!(
                "edge weights (base {}, bonus {}) overflow for {max_pairs} pairs",
                self.base, self.exact_level_bonus
            ))
        };
        let pairs = i64::try_from(max_pairs).map_err(|_| overflow())?;

        let bonus_total = self.exact_level_bonus.checked_mul(pairs).ok_or_else(overflow)?;
        if self.base <= bonus_total {
            return Err(StaffingError::Config(format!(
                "base_weight ({}) must exceed exact_level_bonus ({}) times {max_pairs} pairs",
                self.base, self.exact_level_bonus
            )));
        }

        self.base
            .checked_add(self.exact_level_bonus)
            .zip(pairs.checked_add(1))
            .and_then(|(top, rows)| top.checked_mul(rows))
            .map(|_| ())
            .ok_or_else(overflow)
    }
}

/// One requirement slot of a candidate project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Index into the candidate project list.
    pub project: usize,
    /// Index into that project's requirements.
    pub requirement: usize,
}

/// A contributor–slot edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Slot node index.
    pub slot: usize,
    /// Contributor node index.
    pub contributor: usize,
    /// Edge weight.
    pub weight: i64,
}

/// Weighted bipartite graph of available contributors and requirement slots.
#[derive(Debug, Clone, Default)]
pub struct RequirementGraph {
    slots: Vec<Slot>,
    contributors: Vec<usize>,
    edges: Vec<Edge>,
}

impl RequirementGraph {
    /// Builds the graph for a candidate project set.
    ///
    /// Only available contributors become nodes. Nothing is mutated.
    ///
    /// # Complexity
    /// O(s * c) where s = total slots, c = available contributors.
    pub fn build(projects: &[&Project], roster: &[Contributor], weights: EdgeWeights) -> Self {
        let contributors: Vec<usize> = roster
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_available())
            .map(|(i, _)| i)
            .collect();

        let mut slots = Vec::new();
        let mut edges = Vec::new();

        for (project_idx, project) in projects.iter().enumerate() {
            for (req_idx, requirement) in project.requirements.iter().enumerate() {
                let slot = slots.len();
                slots.push(Slot {
                    project: project_idx,
                    requirement: req_idx,
                });

                for (node, &roster_idx) in contributors.iter().enumerate() {
                    if let Some(level) = roster[roster_idx].skill_level(&requirement.skill) {
                        edges.push(Edge {
                            slot,
                            contributor: node,
                            weight: weights.weight(level, requirement.level),
                        });
                    }
                }
            }
        }

        Self {
            slots,
            contributors,
            edges,
        }
    }

    /// Number of slot nodes. A matching is feasible only if it covers all of them.
    #[inline]
    pub fn num_conditions(&self) -> usize {
        self.slots.len()
    }

    /// Number of contributor nodes.
    #[inline]
    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }

    /// Slot nodes, in candidate then requirement order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// All edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Roster index of a contributor node.
    pub fn roster_index(&self, node: usize) -> usize {
        self.contributors[node]
    }
}
