use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One per-request activity note. Process-local; never persisted to the
/// backing file.
#[derive(Clone, Debug, Serialize)]
pub struct ActivityEntry {
    pub id: String,
    pub action: String,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(action: impl Into<String>, details: serde_json::Value) -> Self {
        ActivityEntry {
            id: Uuid::new_v4().to_string(),
            action: action.into(),
            details,
            timestamp: Utc::now(),
        }
    }
}
