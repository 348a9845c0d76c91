use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use log::{debug, info};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    aggregate::{compute_aggregate, DailyAggregate},
    models::meal::Meal,
    surface::Surface,
};

use super::{Draft, DraftField, EntryStatus, MealLogState};

/// View data handed to the presentation surface. Every field is derived
/// from the state at the moment of the call; nothing here is cached.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MealLogSnapshot {
    pub meals: Vec<Meal>,
    pub draft: Draft,
    pub draft_total_calories: u32,
    pub aggregate: DailyAggregate,
    pub entry_status: EntryStatus,
    pub can_commit: bool,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct MealCommittedEvent {
    meal_id: String,
    meal: Meal,
}

/// Owns the meal-log state and serializes intents from the presentation
/// surface. Each intent locks, applies one state transition, and emits a
/// fresh snapshot before the next intent is accepted.
#[derive(Clone)]
pub struct MealLogController {
    state: Arc<Mutex<MealLogState>>,
    surface: Arc<dyn Surface>,
}

impl MealLogController {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self::with_state(surface, MealLogState::new())
    }

    pub fn with_state(surface: Arc<dyn Surface>, state: MealLogState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            surface,
        }
    }

    pub async fn get_snapshot(&self) -> MealLogSnapshot {
        let guard = self.state.lock().await;
        snapshot_of(&guard)
    }

    pub async fn open_entry(&self) -> MealLogSnapshot {
        {
            let mut state = self.state.lock().await;
            state.open_entry();
        }
        self.emit_state_changed().await;
        self.get_snapshot().await
    }

    pub async fn update_draft_field(&self, field: DraftField) -> MealLogSnapshot {
        {
            let mut state = self.state.lock().await;
            state.update_draft_field(field);
        }
        self.emit_state_changed().await;
        self.get_snapshot().await
    }

    pub async fn add_pending_ingredient(&self) -> MealLogSnapshot {
        let added = {
            let mut state = self.state.lock().await;
            state.add_pending_ingredient()
        };

        if added {
            self.emit_state_changed().await;
        } else {
            debug!("Ingredient ignored: name empty or calories not positive");
        }

        self.get_snapshot().await
    }

    pub async fn remove_pending_ingredient(&self, index: usize) -> MealLogSnapshot {
        let removed = {
            let mut state = self.state.lock().await;
            state.remove_pending_ingredient(index)
        };

        if removed {
            self.emit_state_changed().await;
        } else {
            debug!("Remove ignored: index {index} out of range");
        }

        self.get_snapshot().await
    }

    /// Commit the draft as a new meal. Returns `Ok(None)` when the commit
    /// guard rejects the draft; the only error is a failed
    /// `meal-committed` emission, which happens after the meal is already
    /// in the log.
    pub async fn commit_draft(&self) -> Result<Option<Meal>> {
        let committed = {
            let mut state = self.state.lock().await;
            state.commit_draft(Local::now())
        };

        let meal = match committed {
            Some(meal) => meal,
            None => {
                debug!("Commit ignored: draft has no name or no ingredients");
                return Ok(None);
            }
        };

        info!(
            "Logged meal '{}' at {} ({} kcal from {} ingredients)",
            meal.name,
            meal.time,
            meal.total_calories,
            meal.ingredients.len()
        );

        self.emit_state_changed().await;
        self.emit_meal_committed(&meal).await?;

        Ok(Some(meal))
    }

    pub async fn cancel_entry(&self) -> MealLogSnapshot {
        let cancelled = {
            let mut state = self.state.lock().await;
            state.cancel_entry()
        };

        if cancelled {
            self.emit_state_changed().await;
        }

        self.get_snapshot().await
    }

    async fn emit_state_changed(&self) {
        let guard = self.state.lock().await;
        emit_meal_log_state(self.surface.as_ref(), snapshot_of(&guard));
    }

    async fn emit_meal_committed(&self, meal: &Meal) -> Result<()> {
        let payload = MealCommittedEvent {
            meal_id: meal.id.clone(),
            meal: meal.clone(),
        };
        let payload = serde_json::to_value(&payload)?;

        self.surface
            .emit("meal-committed", payload)
            .context("failed to emit meal-committed")
    }
}

fn snapshot_of(state: &MealLogState) -> MealLogSnapshot {
    MealLogSnapshot {
        meals: state.meals.clone(),
        draft: state.draft.clone(),
        draft_total_calories: state.draft.total_calories(),
        aggregate: compute_aggregate(&state.meals),
        entry_status: state.entry_status,
        can_commit: state.draft.can_commit(),
    }
}

fn emit_meal_log_state(surface: &dyn Surface, snapshot: MealLogSnapshot) {
    if let Ok(payload) = serde_json::to_value(&snapshot) {
        let _ = surface.emit("meal-log-changed", payload);
    }
}
