mod types;

pub use types::DailyAggregate;

use crate::models::meal::Meal;

pub const DAILY_GOAL_KCAL: u32 = 2000;

/// Derive the daily summary from the meal list. Pure and cheap (one
/// linear scan), so callers recompute on every read instead of caching
/// a copy that could drift.
pub fn compute_aggregate(meals: &[Meal]) -> DailyAggregate {
    let total_consumed: u32 = meals.iter().map(|meal| meal.total_calories).sum();
    let progress_percent =
        (f64::from(total_consumed) * 100.0 / f64::from(DAILY_GOAL_KCAL)).min(100.0);

    DailyAggregate {
        total_consumed,
        daily_goal: DAILY_GOAL_KCAL,
        remaining: DAILY_GOAL_KCAL.saturating_sub(total_consumed),
        progress_percent,
        meal_count: meals.len(),
    }
}
