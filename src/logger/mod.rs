use crate::error::RosterError;
use crate::models::ActivityEntry;
use async_trait::async_trait;

/// Sink for per-request activity notes.
#[async_trait]
pub trait ActivityLogger: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
    ) -> Result<(), RosterError>;
    async fn entries(&self) -> Result<Vec<ActivityEntry>, RosterError>;
}

pub mod in_memory;
