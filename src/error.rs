use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum RosterError {
    /// One of `id`, `name`, `email`, `role` is absent or empty
    #[error("Missing required fields")]
    MissingRequiredFields,

    /// User ID contains something other than ASCII digits
    #[error("User ID must contain only numbers")]
    NonNumericId,

    /// Email does not match the `local@domain.tld` shape
    #[error("Invalid email address")]
    InvalidEmail,

    /// A record with this User ID is already on file
    #[error("User ID already exists")]
    IdExists,

    /// A record with this email (case-insensitive) is already on file
    #[error("Email already exists")]
    EmailExists,

    /// The duplicate scan could not read the backing file
    #[error("Error checking duplicates")]
    DuplicateScan,

    /// Download requested but the backing file does not exist
    #[error("No user data available")]
    NoData,

    /// Backing file I/O failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::Storage(err.to_string())
    }
}
