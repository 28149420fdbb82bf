mod store_tests;

use tempfile::TempDir;

use crate::logger::in_memory::InMemoryActivityLog;
use crate::models::NewUser;
use crate::service::RosterService;
use crate::store::csv_file::CsvFileStore;

pub fn create_test_service() -> (TempDir, RosterService<InMemoryActivityLog, CsvFileStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvFileStore::new(dir.path().join("users.csv"));
    let service = RosterService::new(store, InMemoryActivityLog::new());
    (dir, service)
}

pub fn payload(id: &str, email: &str) -> NewUser {
    NewUser {
        id: Some(id.to_string()),
        name: Some("Test User".to_string()),
        email: Some(email.to_string()),
        role: Some("staff".to_string()),
        department: None,
        year: None,
        date_created: None,
        is_active: None,
        last_login: None,
    }
}
