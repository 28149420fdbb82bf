use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Sentinel written for absent optional fields.
pub const NOT_APPLICABLE: &str = "N/A";

/// Locale-style timestamp rendering, e.g. `8/28/2026, 1:05:07 PM`.
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Incoming registration payload. Required fields stay `Option` here so the
/// service can reject absent ones with a single validation error instead of
/// a deserialization failure.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub last_login: Option<DateTime<Utc>>,
}

/// A validated registration record, one line of the backing file.
/// Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: Option<String>,
    pub year: Option<String>,
    pub date_created: DateTime<Utc>,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Renders the record into CSV column order with defaulting applied:
    /// absent optionals become `N/A`, booleans become `Yes`/`No`.
    pub fn csv_fields(&self) -> [String; 9] {
        [
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
            self.department.clone().unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            self.year.clone().unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            format_timestamp(&self.date_created),
            if self.is_active { "Yes" } else { "No" }.to_string(),
            self.last_login
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| NOT_APPLICABLE.to_string()),
        ]
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> UserRecord {
        UserRecord {
            id: "1001".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: "student".to_string(),
            department: None,
            year: Some("2".to_string()),
            date_created: Utc.with_ymd_and_hms(2026, 8, 28, 13, 5, 7).unwrap(),
            is_active: true,
            last_login: None,
        }
    }

    #[test]
    fn csv_fields_apply_sentinels_and_rendering() {
        let fields = record().csv_fields();
        assert_eq!(fields[4], "N/A");
        assert_eq!(fields[5], "2");
        assert_eq!(fields[6], "8/28/2026, 1:05:07 PM");
        assert_eq!(fields[7], "Yes");
        assert_eq!(fields[8], "N/A");
    }

    #[test]
    fn inactive_renders_no() {
        let mut rec = record();
        rec.is_active = false;
        assert_eq!(rec.csv_fields()[7], "No");
    }

    #[test]
    fn morning_timestamp_renders_am_without_padding() {
        let mut rec = record();
        rec.date_created = Utc.with_ymd_and_hms(2026, 1, 2, 9, 4, 5).unwrap();
        assert_eq!(rec.csv_fields()[6], "1/2/2026, 9:04:05 AM");
    }
}
