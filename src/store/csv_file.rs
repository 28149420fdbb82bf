use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::RosterError;
use crate::models::UserRecord;
use crate::store::{Duplicate, UserStore};

/// Fixed column headers, first line of the backing file.
const HEADERS: [&str; 9] = [
    "User ID",
    "Full Name",
    "Email",
    "Role",
    "Department",
    "Year",
    "Date Created",
    "Is Active",
    "Last Login",
];

/// CSV-file-backed user store.
///
/// One quoted, comma-delimited line per record. The write lock serializes
/// the scan-then-append sequence so two requests cannot both pass the
/// duplicate check before either has written its row.
pub struct CsvFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvFileStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn scan(&self, id: &str, email: &str) -> Result<Option<Duplicate>, RosterError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            warn!("duplicate scan failed to read {}: {}", self.path.display(), err);
            RosterError::DuplicateScan
        })?;

        // Naive split: a quoted field containing a literal comma would shift
        // the columns. The writer never produces one, so scan and format agree.
        for line in content.split('\n').skip(1) {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split(',').map(unquote_field).collect();
            if fields.first().is_some_and(|f| f == id) {
                return Ok(Some(Duplicate::Id));
            }
            if fields.get(2).is_some_and(|f| f.eq_ignore_ascii_case(email)) {
                return Ok(Some(Duplicate::Email));
            }
        }
        Ok(None)
    }

    async fn append_row(&self, record: &UserRecord) -> Result<(), RosterError> {
        let row = format_row(&record.csv_fields());
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(row.as_bytes()).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for CsvFileStore {
    async fn init(&self) -> Result<(), RosterError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        info!("creating new backing file at {}", self.path.display());
        let header = format_row(&HEADERS.map(String::from));
        tokio::fs::write(&self.path, header).await?;
        Ok(())
    }

    async fn find_duplicate(
        &self,
        id: &str,
        email: &str,
    ) -> Result<Option<Duplicate>, RosterError> {
        self.scan(id, email).await
    }

    async fn append_unique(&self, record: &UserRecord) -> Result<(), RosterError> {
        let _guard = self.write_lock.lock().await;
        match self.scan(&record.id, &record.email).await? {
            Some(Duplicate::Id) => Err(RosterError::IdExists),
            Some(Duplicate::Email) => Err(RosterError::EmailExists),
            None => self.append_row(record).await,
        }
    }

    async fn export(&self) -> Result<String, RosterError> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(RosterError::NoData);
        }
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Wraps a field in quotes, doubling any internal quote characters.
fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Strips one surrounding quote pair and un-doubles internal quotes.
fn unquote_field(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.replace("\"\"", "\"")
}

fn format_row(fields: &[String]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| quote_field(f)).collect();
    format!("{}\n", quoted.join(","))
}
