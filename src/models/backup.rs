//! Portable backup document.
//!
//! The whole store travels as one self-describing JSON document:
//!
//! ```json
//! {
//!   "app": "rtally",
//!   "exportedAt": "2025-11-02T18:40:12+01:00",
//!   "records": [ ... ]
//! }
//! ```
//!
//! `parse` validates the document shape before anything touches the
//! database, `restore_into` swaps the full record set in one transaction.

use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Application tag written into every exported document. Informational
/// only: import does not enforce it, so foreign documents with a valid
/// `records` array restore fine.
pub const BACKUP_APP_TAG: &str = "rtally";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default)]
    pub app: String,

    #[serde(default)]
    pub exported_at: String,

    pub records: Vec<Session>,
}

impl BackupDocument {
    /// Snapshot the full store into a document.
    /// An empty store still yields a valid document with `records: []`.
    pub fn capture(store: &SessionStore) -> AppResult<Self> {
        Ok(Self {
            app: BACKUP_APP_TAG.to_string(),
            exported_at: Local::now().to_rfc3339(),
            records: store.list_all()?,
        })
    }

    /// Serialize pretty-printed, so backups stay readable in any editor.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Other(format!("backup serialization failed: {e}")))
    }

    /// Parse and validate a backup document.
    ///
    /// The shape check runs on the raw JSON value first: `records` must
    /// exist and be an array, otherwise the caller gets MalformedBackup
    /// before any record is even looked at. Records themselves are then
    /// deserialized strictly; one bad record rejects the whole document.
    pub fn parse(text: &str) -> AppResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| AppError::MalformedBackup(format!("not valid JSON: {e}")))?;

        match value.get("records") {
            None => {
                return Err(AppError::MalformedBackup(
                    "missing 'records' field".to_string(),
                ));
            }
            Some(serde_json::Value::Array(_)) => {}
            Some(_) => {
                return Err(AppError::MalformedBackup(
                    "'records' is not an array".to_string(),
                ));
            }
        }

        serde_json::from_value(value).map_err(|e| AppError::MalformedBackup(e.to_string()))
    }

    /// Replace the store contents with this document's records.
    /// All-or-nothing: either every record lands or the store is untouched.
    pub fn restore_into(&self, store: &mut SessionStore) -> AppResult<usize> {
        store.replace_all(&self.records)
    }
}
