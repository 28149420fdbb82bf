use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use crate::error::RosterError;
use crate::models::UserRecord;
use crate::store::csv_file::CsvFileStore;
use crate::store::{Duplicate, UserStore};

fn make_store() -> (TempDir, CsvFileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = CsvFileStore::new(dir.path().join("users.csv"));
    (dir, store)
}

fn record(id: &str, email: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: "Test User".to_string(),
        email: email.to_string(),
        role: "staff".to_string(),
        department: None,
        year: None,
        date_created: Utc.with_ymd_and_hms(2026, 8, 28, 13, 5, 7).unwrap(),
        is_active: false,
        last_login: None,
    }
}

#[tokio::test]
async fn init_writes_exactly_the_quoted_header() {
    let (dir, store) = make_store();
    store.init().await.unwrap();

    let contents = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
    assert_eq!(
        contents,
        "\"User ID\",\"Full Name\",\"Email\",\"Role\",\"Department\",\"Year\",\"Date Created\",\"Is Active\",\"Last Login\"\n"
    );
}

#[tokio::test]
async fn fresh_file_has_no_duplicates() {
    let (_dir, store) = make_store();
    store.init().await.unwrap();
    let result = store.find_duplicate("1001", "ada@example.com").await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn scan_finds_existing_id() {
    let (_dir, store) = make_store();
    store.init().await.unwrap();
    store.append_unique(&record("1001", "ada@example.com")).await.unwrap();

    let result = store.find_duplicate("1001", "other@example.com").await.unwrap();
    assert_eq!(result, Some(Duplicate::Id));
}

#[tokio::test]
async fn scan_finds_email_ignoring_case() {
    let (_dir, store) = make_store();
    store.init().await.unwrap();
    store.append_unique(&record("1001", "Ada@Example.com")).await.unwrap();

    let result = store.find_duplicate("1002", "ADA@EXAMPLE.COM").await.unwrap();
    assert_eq!(result, Some(Duplicate::Email));
}

#[tokio::test]
async fn append_unique_rejects_conflicts() {
    let (_dir, store) = make_store();
    store.init().await.unwrap();
    store.append_unique(&record("1001", "ada@example.com")).await.unwrap();

    let by_id = store.append_unique(&record("1001", "new@example.com")).await;
    assert!(matches!(by_id, Err(RosterError::IdExists)));

    let by_email = store.append_unique(&record("1002", "ada@example.com")).await;
    assert!(matches!(by_email, Err(RosterError::EmailExists)));
}

#[tokio::test]
async fn scan_unescapes_doubled_quotes_in_fields() {
    let (_dir, store) = make_store();
    store.init().await.unwrap();
    let mut rec = record("1001", "ada@example.com");
    rec.name = "Ada \"The Countess\" Lovelace".to_string();
    store.append_unique(&rec).await.unwrap();

    // The quoted name must not break id/email matching on the same line.
    let result = store.find_duplicate("1001", "other@example.com").await.unwrap();
    assert_eq!(result, Some(Duplicate::Id));
}

#[tokio::test]
async fn scan_without_backing_file_is_a_scan_error() {
    let (_dir, store) = make_store();
    let result = store.find_duplicate("1001", "ada@example.com").await;
    assert!(matches!(result, Err(RosterError::DuplicateScan)));
}

#[tokio::test]
async fn export_without_backing_file_is_no_data() {
    let (_dir, store) = make_store();
    let result = store.export().await;
    assert!(matches!(result, Err(RosterError::NoData)));
}

#[tokio::test]
async fn export_returns_full_contents() {
    let (_dir, store) = make_store();
    store.init().await.unwrap();
    store.append_unique(&record("1001", "ada@example.com")).await.unwrap();
    store.append_unique(&record("1002", "bob@example.com")).await.unwrap();

    let contents = store.export().await.unwrap();
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.ends_with('\n'));
}
