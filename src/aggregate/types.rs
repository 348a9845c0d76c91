use serde::{Deserialize, Serialize};

use crate::aggregate::DAILY_GOAL_KCAL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregate {
    pub total_consumed: u32,
    pub daily_goal: u32,
    pub remaining: u32,
    /// Share of the daily goal already consumed, clamped to [0, 100].
    pub progress_percent: f64,
    pub meal_count: usize,
}

impl Default for DailyAggregate {
    fn default() -> Self {
        Self {
            total_consumed: 0,
            daily_goal: DAILY_GOAL_KCAL,
            remaining: DAILY_GOAL_KCAL,
            progress_percent: 0.0,
            meal_count: 0,
        }
    }
}
