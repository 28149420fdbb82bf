use crate::error::RosterError;
use crate::models::UserRecord;
use async_trait::async_trait;

/// Which uniqueness constraint a candidate record collides with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duplicate {
    Id,
    Email,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates the backing file with its header row if absent. Idempotent.
    async fn init(&self) -> Result<(), RosterError>;

    /// Scans existing records for a conflicting id or email.
    async fn find_duplicate(
        &self,
        id: &str,
        email: &str,
    ) -> Result<Option<Duplicate>, RosterError>;

    /// Runs the duplicate scan and appends the record, serialized so that
    /// concurrent writers cannot interleave between check and append.
    async fn append_unique(&self, record: &UserRecord) -> Result<(), RosterError>;

    /// Returns the full current contents of the backing file, or
    /// [`RosterError::NoData`] if it has never been created.
    async fn export(&self) -> Result<String, RosterError>;
}

pub mod csv_file;
