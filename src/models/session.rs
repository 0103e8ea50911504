//! Session record model.
//!
//! One row per day-and-session of play. The same shape is persisted in
//! SQLite, exported in backup documents (camelCase on the wire) and shown
//! by the CLI.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque unique identifier, immutable once created.
    pub id: String,

    /// Calendar date in `YYYY-MM-DD` form. Many sessions may share a date.
    pub date: String,

    /// Free-text label of where the session was played. May be empty.
    #[serde(default)]
    pub location: String,

    /// Stake as a `base/multiplier` pair, e.g. `30/10`. May be empty.
    #[serde(default)]
    pub stake: String,

    /// Number of hands played.
    pub hands: i64,

    /// Net result: positive = win, negative = loss, zero = break-even.
    pub net: i64,

    pub created_at: String,
    pub updated_at: String,
}

impl Session {
    /// Build a new session with a fresh id and both timestamps set to now.
    pub fn new(date: &str, location: &str, stake: &str, hands: i64, net: i64) -> Self {
        let now = Local::now().to_rfc3339();

        Self {
            id: Uuid::new_v4().to_string(),
            date: date.to_string(),
            location: location.to_string(),
            stake: stake.to_string(),
            hands,
            net,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. Called on every edit, never on import.
    pub fn touch(&mut self) {
        self.updated_at = Local::now().to_rfc3339();
    }
}
