//! Review transition subcommands (`transition` plus the named
//! actions).
//!
//! The store is in-memory per invocation: the commands demonstrate
//! the dispatcher against the seed data and print the updated record,
//! nothing is written back.

use std::path::Path;

use anyhow::Result;
use castdesk_shared::{dispatcher, ReviewAction, VerificationRecord};

use crate::utils;

pub fn transition(data: &Path, id: &str, status: &str) -> Result<()> {
    let mut store = utils::load_store(data)?;
    let record = dispatcher::transition(&mut store, id, status)?;
    print_outcome(&record);
    Ok(())
}

pub fn apply(data: &Path, id: &str, action: ReviewAction) -> Result<()> {
    let mut store = utils::load_store(data)?;
    let record = dispatcher::apply(&mut store, id, action)?;
    print_outcome(&record);
    Ok(())
}

fn print_outcome(record: &VerificationRecord) {
    println!("Record {} -> status={}", record.id, record.status);
    if let Some(activity) = &record.last_activity {
        println!("  last_activity: {activity}");
    }
}
