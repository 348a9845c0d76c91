pub mod controller;
pub mod state;

pub use controller::{MealLogController, MealLogSnapshot};
pub use state::{Draft, DraftField, EntryStatus, MealLogState};
