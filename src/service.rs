use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::error::RosterError;
use crate::logger::ActivityLogger;
use crate::models::{NewUser, UserRecord};
use crate::store::UserStore;

static NUMERIC_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub struct RosterService<L: ActivityLogger, S: UserStore> {
    store: S,
    activity: L,
}

impl<L: ActivityLogger, S: UserStore> RosterService<L, S> {
    pub fn new(store: S, activity: L) -> Self {
        Self { store, activity }
    }

    /// Ensures the backing file exists. Called once at startup; any failure
    /// here is fatal to the process.
    pub async fn init(&self) -> Result<(), RosterError> {
        self.store.init().await
    }

    /// Validates the payload, rejects duplicates, and appends one CSV row.
    ///
    /// Validation short-circuits on the first failure: required fields,
    /// numeric id, email shape, then the duplicate scan.
    pub async fn create_user(&self, payload: NewUser) -> Result<UserRecord, RosterError> {
        let (id, name, email, role) = match (
            non_empty(payload.id),
            non_empty(payload.name),
            non_empty(payload.email),
            non_empty(payload.role),
        ) {
            (Some(id), Some(name), Some(email), Some(role)) => (id, name, email, role),
            _ => return Err(RosterError::MissingRequiredFields),
        };

        if !NUMERIC_ID.is_match(&id) {
            return Err(RosterError::NonNumericId);
        }
        if !EMAIL_SHAPE.is_match(&email) {
            return Err(RosterError::InvalidEmail);
        }

        let record = UserRecord {
            id,
            name,
            email,
            role,
            department: payload.department,
            year: payload.year,
            date_created: payload.date_created.unwrap_or_else(Utc::now),
            is_active: payload.is_active.unwrap_or(false),
            last_login: payload.last_login,
        };

        self.store.append_unique(&record).await?;
        info!("appended user {} to backing file", record.id);

        let note = if record.role == "student" {
            format!(
                "Created new {} account for {} with ID {} (Year {})",
                record.role,
                record.name,
                record.id,
                record.year.as_deref().unwrap_or("N/A")
            )
        } else {
            format!(
                "Created new {} account for {} with ID {}",
                record.role, record.name, record.id
            )
        };
        self.activity
            .log_action(&note, serde_json::json!({ "user_id": record.id }))
            .await?;
        debug!("activity: {}", note);

        Ok(record)
    }

    /// Returns the full backing file for download.
    pub async fn export_csv(&self) -> Result<String, RosterError> {
        self.store.export().await
    }

    pub fn activity(&self) -> &L {
        &self.activity
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
