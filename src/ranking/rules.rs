//! Built-in ranking rules.

use super::{RankScore, RankingContext, RankingRule};
use crate::models::Project;

/// Profit density.
///
/// `max(score - penalty, 0) / (duration * slots)` where the penalty is
/// how many days past its best-before day the project would finish if
/// started today. Favors short, valuable, urgent projects that tie up
/// few contributors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitDensity;

impl RankingRule for ProfitDensity {
    fn name(&self) -> &'static str {
        "PROFIT_DENSITY"
    }

    fn evaluate(&self, project: &Project, context: &RankingContext) -> RankScore {
        let slot_days = f64::from(project.duration) * project.slot_count() as f64;
        if slot_days <= 0.0 {
            return 0.0;
        }
        project.value_if_started(context.day) / slot_days
    }
}
