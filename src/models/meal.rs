use serde::{Deserialize, Serialize};

/// Icon tag given to meals committed through the entry flow. Icon tags
/// are opaque to the core; the presentation surface decides how (and
/// whether) to render them.
pub const DEFAULT_MEAL_ICON: &str = "Apple";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Free-form time of day ("HH:MM"); never parsed by the core.
    pub time: String,
    pub ingredients: Vec<Ingredient>,
    pub total_calories: u32,
    pub icon: String,
}
