//! Shared helpers for the CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use castdesk_shared::{seed, VerificationRecord, VerificationStore};
use chrono::NaiveDate;

/// Load the seed file into a fresh in-memory store.
///
/// Every invocation starts from the seed; there is no persistence
/// between runs.
pub fn load_store(path: &Path) -> Result<VerificationStore> {
    let store = seed::load_store(path)?;
    tracing::info!("loaded {} verification records from {}", store.len(), path.display());
    Ok(store)
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {value}"))
}

/// Print records as a fixed-width table.
pub fn print_records_table(records: &[&VerificationRecord]) {
    println!(
        "{:<8} {:<22} {:<20} {:<16} {:<12} {:<14} {:<10}",
        "ID", "NAME", "STATUS", "TYPE", "SUBMITTED", "COUNTRY", "CITY"
    );
    for record in records {
        println!(
            "{:<8} {:<22} {:<20} {:<16} {:<12} {:<14} {:<10}",
            record.id,
            record.name,
            record.status,
            record.user_type,
            record.submitted_date,
            record.country.as_deref().unwrap_or("-"),
            record.city.as_deref().unwrap_or("-"),
        );
    }
    println!("{} record(s)", records.len());
}
