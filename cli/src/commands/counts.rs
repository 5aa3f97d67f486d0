//! `counts` subcommand: per-status totals for the tab badges.
//!
//! Counts are always computed over the full store, never a
//! search-narrowed subset, so they line up with what the dashboard
//! badges show while a query is being typed.

use std::path::Path;

use anyhow::Result;
use castdesk_shared::counts_by_status;

use crate::cli::OutputFormat;
use crate::utils;

pub fn run(data: &Path, format: OutputFormat) -> Result<()> {
    let store = utils::load_store(data)?;
    let counts = counts_by_status(store.get_all());

    match format {
        OutputFormat::Table => {
            println!("{:<22} {:>6}", "all", counts.all);
            println!("{:<22} {:>6}", "pending", counts.pending);
            println!("{:<22} {:>6}", "under-review", counts.under_review);
            println!("{:<22} {:>6}", "more-info-requested", counts.more_info);
            println!("{:<22} {:>6}", "approved", counts.approved);
            println!("{:<22} {:>6}", "rejected", counts.rejected);
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&counts)?),
    }
    Ok(())
}
