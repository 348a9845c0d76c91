//! Boundary between the meal-log core and whatever renders it.
//!
//! The core never draws anything: it pushes named events with JSON
//! payloads through this trait after every state change, and the
//! presentation side dispatches intents back by calling the controller.

use anyhow::Result;
use serde_json::Value;

/// Presentation-side collaborator. Implementations receive
/// `meal-log-changed` after every mutation and `meal-committed` once per
/// logged meal; they must not mutate core state from `emit`.
pub trait Surface: Send + Sync {
    fn emit(&self, event: &str, payload: Value) -> Result<()>;
}
