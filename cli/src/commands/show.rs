//! `show` subcommand: one record as pretty JSON.

use std::path::Path;

use anyhow::Result;

use crate::utils;

pub fn run(data: &Path, id: &str) -> Result<()> {
    let store = utils::load_store(data)?;
    let record = store.get_by_id(id)?;
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}
