//! Scheduler configuration.
//!
//! Defaults reproduce the reference behavior: a 1000-day horizon, a
//! huge base edge weight, and a +1 bonus for exact-level fits. Values
//! can be set with builder methods or loaded from a TOML file:
//!
//! ```toml
//! horizon_days = 500
//! exact_level_bonus = 1
//! duplicate_skills = "reject"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StaffingError};
use crate::matching::EdgeWeights;

/// How projects listing the same skill twice are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateSkillPolicy {
    /// Each requirement is its own slot, keyed by requirement index.
    #[default]
    IndexQualified,
    /// Refuse such projects during validation.
    Reject,
}

/// Configuration for [`StaffingScheduler`](crate::scheduler::StaffingScheduler).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Number of simulated days.
    pub horizon_days: u32,
    /// Weight of every contributor–slot edge.
    pub base_weight: i64,
    /// Extra weight when the contributor's level equals the required level.
    pub exact_level_bonus: i64,
    /// Duplicate requirement skill handling.
    pub duplicate_skills: DuplicateSkillPolicy,
    /// Stop simulating once the backlog is empty.
    pub stop_when_idle: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        let weights = EdgeWeights::default();
        Self {
            horizon_days: 1000,
            base_weight: weights.base,
            exact_level_bonus: weights.exact_level_bonus,
            duplicate_skills: DuplicateSkillPolicy::default(),
            stop_when_idle: true,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Sets the horizon.
    pub fn with_horizon(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Sets the edge weights.
    pub fn with_weights(mut self, weights: EdgeWeights) -> Self {
        self.base_weight = weights.base;
        self.exact_level_bonus = weights.exact_level_bonus;
        self
    }

    /// Sets the duplicate-skill policy.
    pub fn with_duplicate_skills(mut self, policy: DuplicateSkillPolicy) -> Self {
        self.duplicate_skills = policy;
        self
    }

    /// Sets whether the run stops once nothing is left to schedule.
    pub fn with_stop_when_idle(mut self, stop: bool) -> Self {
        self.stop_when_idle = stop;
        self
    }

    /// Edge weights for the requirement graph.
    pub fn weights(&self) -> EdgeWeights {
        EdgeWeights {
            base: self.base_weight,
            exact_level_bonus: self.exact_level_bonus,
        }
    }

    /// Checks that the configuration can drive a run.
    ///
    /// Only the repository-independent bounds are checked here; the
    /// scheduler re-checks the weights against the repository's largest
    /// possible matching before a run.
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 {
            return Err(StaffingError::Config("horizon_days must be positive".into()));
        }
        if self.exact_level_bonus < 0 {
            return Err(StaffingError::Config(
                "exact_level_bonus must not be negative".into(),
            ));
        }
        self.weights().check_capacity(1)
    }
}
