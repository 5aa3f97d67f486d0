//! `list` subcommand: tab + criteria narrowing of the queue.

use std::path::Path;

use anyhow::{anyhow, Result};
use castdesk_shared::{filter, Criteria, Status, Tab, UserType};

use crate::cli::OutputFormat;
use crate::utils;

#[allow(clippy::too_many_arguments, reason = "mirrors the flag surface of the subcommand")]
pub fn run(
    data: &Path,
    tab: &str,
    query: Option<String>,
    statuses: &[String],
    user_types: &[String],
    country: Option<String>,
    city: Option<String>,
    has_portfolio: Option<bool>,
    has_documents: Option<bool>,
    since: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let store = utils::load_store(data)?;
    let tab: Tab = tab.parse().map_err(|e: String| anyhow!(e))?;

    let statuses = statuses
        .iter()
        .map(|s| s.parse::<Status>())
        .collect::<Result<Vec<_>, _>>()?;
    let user_types = user_types
        .iter()
        .map(|s| s.parse::<UserType>())
        .collect::<Result<Vec<_>, _>>()?;
    let submitted_on_or_after = since.map(utils::parse_date).transpose()?;

    let criteria = Criteria {
        statuses,
        user_types,
        country,
        city,
        has_portfolio,
        has_documents,
        submitted_on_or_after,
        query,
    };

    let visible = filter(store.get_all(), &criteria, tab);
    match format {
        OutputFormat::Table => utils::print_records_table(&visible),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&visible)?),
    }
    Ok(())
}
