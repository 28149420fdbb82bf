use crate::error::RosterError;
use crate::logger::ActivityLogger;
use crate::models::ActivityEntry;
use async_trait::async_trait;

pub struct InMemoryActivityLog {
    entries: tokio::sync::Mutex<Vec<ActivityEntry>>,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        InMemoryActivityLog {
            entries: tokio::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityLogger for InMemoryActivityLog {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
    ) -> Result<(), RosterError> {
        let mut entries = self.entries.lock().await;
        entries.push(ActivityEntry::new(action, details));
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<ActivityEntry>, RosterError> {
        Ok(self.entries.lock().await.clone())
    }
}
