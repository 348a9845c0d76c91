//! In-memory meal log: a list of committed meals plus one in-progress
//! draft, with daily calorie statistics derived on every read.
//!
//! The crate holds no presentation code. A host embeds
//! [`MealLogController`], implements [`Surface`] to receive view data,
//! and forwards user intents to the controller's methods.

pub mod aggregate;
pub mod meal_log;
pub mod models;
pub mod surface;

pub use aggregate::{compute_aggregate, DailyAggregate, DAILY_GOAL_KCAL};
pub use meal_log::{
    Draft, DraftField, EntryStatus, MealLogController, MealLogSnapshot, MealLogState,
};
pub use models::meal::{Ingredient, Meal, DEFAULT_MEAL_ICON};
pub use surface::Surface;
