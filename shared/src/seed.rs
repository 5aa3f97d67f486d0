//! Loading the static record source.
//!
//! The current scope has no backend: the initial record collection
//! comes from a JSON seed file shipped with the repository. Records
//! are upserted in file order, so a duplicated id keeps the last
//! occurrence.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::VerificationRecord;
use crate::store::VerificationStore;

/// Parse a JSON array of records into a store.
pub fn store_from_json(json: &str) -> Result<VerificationStore> {
    let records: Vec<VerificationRecord> =
        serde_json::from_str(json).context("invalid verification seed JSON")?;
    tracing::debug!("parsed {} seed records", records.len());
    Ok(VerificationStore::from_records(records))
}

/// Read and parse a seed file into a store.
pub fn load_store(path: &Path) -> Result<VerificationStore> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    store_from_json(&json)
}

#[cfg(test)]
pub(crate) fn sample_record(
    id: &str,
    name: &str,
    status: crate::record::Status,
) -> VerificationRecord {
    use chrono::NaiveDate;

    VerificationRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        submitted_date: NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid date"),
        status,
        user_type: crate::record::UserType::StuntPerformer,
        country: None,
        city: None,
        last_activity: None,
        profile: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Status, UserType};

    #[test]
    fn parses_a_minimal_seed_array() {
        let json = r#"[
            {
                "id": "vr-1",
                "name": "Alex Doe",
                "email": "alex@example.com",
                "submitted_date": "2026-01-10",
                "status": "pending",
                "user_type": "stunt-performer"
            }
        ]"#;

        let store = store_from_json(json).expect("valid seed");
        assert_eq!(store.len(), 1);
        let record = store.get_by_id("vr-1").expect("vr-1");
        assert_eq!(record.status, Status::Pending);
        assert_eq!(record.user_type, UserType::StuntPerformer);
        assert!(record.country.is_none());
        assert!(record.profile.is_none());
    }

    #[test]
    fn unknown_status_in_seed_is_rejected() {
        let json = r#"[
            {
                "id": "vr-1",
                "name": "Alex Doe",
                "email": "alex@example.com",
                "submitted_date": "2026-01-10",
                "status": "archived",
                "user_type": "stunt-performer"
            }
        ]"#;

        assert!(store_from_json(json).is_err());
    }

    #[test]
    fn load_store_reads_a_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("seed.json");
        fs::write(&path, "[]")?;

        let store = load_store(&path)?;
        assert!(store.is_empty());
        Ok(())
    }
}
