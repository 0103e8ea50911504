// src/export/model.rs

use crate::models::session::Session;
use serde::Serialize;

/// Struttura "piatta" per l'export delle sessioni.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: String,
    pub date: String,
    pub location: String,
    pub stake: String,
    pub hands: i64,
    pub net: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id.clone(),
            date: s.date.clone(),
            location: s.location.clone(),
            stake: s.stake.clone(),
            hands: s.hands,
            net: s.net,
            created_at: s.created_at.clone(),
            updated_at: s.updated_at.clone(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "location",
        "stake",
        "hands",
        "net",
        "created_at",
        "updated_at",
    ]
}

/// Convert a session into a row of display strings.
pub(crate) fn session_to_row(s: &SessionExport) -> Vec<String> {
    vec![
        s.id.clone(),
        s.date.clone(),
        s.location.clone(),
        s.stake.clone(),
        s.hands.to_string(),
        s.net.to_string(),
        s.created_at.clone(),
        s.updated_at.clone(),
    ]
}
