use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::meal::{Ingredient, Meal, DEFAULT_MEAL_ICON};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EntryStatus {
    Closed,
    Open,
}

impl Default for EntryStatus {
    fn default() -> Self {
        EntryStatus::Closed
    }
}

/// The meal being assembled while the entry surface is open. Discarded
/// wholesale on commit or cancel, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub name: String,
    /// Optional; a blank value resolves to the wall clock at commit.
    pub time: String,
    pub ingredients: Vec<Ingredient>,
    pub pending_ingredient: Ingredient,
}

impl Draft {
    pub fn total_calories(&self) -> u32 {
        self.ingredients.iter().map(|ing| ing.calories).sum()
    }

    /// Commit guard: a draft needs a name and at least one ingredient.
    pub fn can_commit(&self) -> bool {
        !self.name.is_empty() && !self.ingredients.is_empty()
    }
}

/// One draft field edit, as dispatched by the presentation surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Name(String),
    Time(String),
    PendingName(String),
    PendingCalories(u32),
}

#[derive(Debug, Clone, Default)]
pub struct MealLogState {
    pub meals: Vec<Meal>,
    pub draft: Draft,
    pub entry_status: EntryStatus,
}

impl MealLogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing log, e.g. demo content owned by the embedder.
    pub fn with_meals(meals: Vec<Meal>) -> Self {
        Self {
            meals,
            ..Self::default()
        }
    }

    pub fn open_entry(&mut self) {
        self.draft = Draft::default();
        self.entry_status = EntryStatus::Open;
    }

    pub fn update_draft_field(&mut self, field: DraftField) {
        match field {
            DraftField::Name(name) => self.draft.name = name,
            DraftField::Time(time) => self.draft.time = time,
            DraftField::PendingName(name) => self.draft.pending_ingredient.name = name,
            DraftField::PendingCalories(calories) => {
                self.draft.pending_ingredient.calories = calories
            }
        }
    }

    /// Append the pending ingredient to the draft and clear the input.
    /// Returns false (and changes nothing) when the name is empty or the
    /// calories are not positive.
    pub fn add_pending_ingredient(&mut self) -> bool {
        if self.draft.pending_ingredient.name.is_empty()
            || self.draft.pending_ingredient.calories == 0
        {
            return false;
        }

        let pending = std::mem::take(&mut self.draft.pending_ingredient);
        self.draft.ingredients.push(pending);
        true
    }

    /// Remove the draft ingredient at `index`, keeping the rest in order.
    /// Out-of-range indices change nothing.
    pub fn remove_pending_ingredient(&mut self, index: usize) -> bool {
        if index >= self.draft.ingredients.len() {
            return false;
        }
        self.draft.ingredients.remove(index);
        true
    }

    /// Turn the draft into a meal appended at the end of the log, reset
    /// the draft, and close the entry surface. A single transition: when
    /// the commit guard fails this returns None and nothing changes.
    ///
    /// `committed_at` supplies the time of day for drafts whose time
    /// field was left blank.
    pub fn commit_draft(&mut self, committed_at: DateTime<Local>) -> Option<Meal> {
        if !self.draft.can_commit() {
            return None;
        }

        let draft = std::mem::take(&mut self.draft);
        let total_calories = draft.ingredients.iter().map(|ing| ing.calories).sum();
        let time = if draft.time.is_empty() {
            committed_at.format("%H:%M").to_string()
        } else {
            draft.time
        };

        let meal = Meal {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            time,
            ingredients: draft.ingredients,
            total_calories,
            icon: DEFAULT_MEAL_ICON.to_string(),
        };

        self.meals.push(meal.clone());
        self.entry_status = EntryStatus::Closed;
        Some(meal)
    }

    /// Discard the draft and close the entry surface without logging a
    /// meal. Returns false when the surface was already closed.
    pub fn cancel_entry(&mut self) -> bool {
        if self.entry_status == EntryStatus::Closed {
            return false;
        }
        self.draft = Draft::default();
        self.entry_status = EntryStatus::Closed;
        true
    }
}
