//! Subcommand dispatch.

pub mod counts;
pub mod list;
pub mod review;
pub mod show;

use anyhow::Result;
use castdesk_shared::ReviewAction;

use crate::cli::{Cli, Commands};

/// Run the selected subcommand.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List {
            data,
            tab,
            query,
            statuses,
            user_types,
            country,
            city,
            has_portfolio,
            has_documents,
            since,
            format,
        } => list::run(
            &data,
            &tab,
            query,
            &statuses,
            &user_types,
            country,
            city,
            has_portfolio,
            has_documents,
            since.as_deref(),
            format,
        ),
        Commands::Counts { data, format } => counts::run(&data, format),
        Commands::Show { data, id } => show::run(&data, &id),
        Commands::Transition { data, id, status } => review::transition(&data, &id, &status),
        Commands::Approve { data, id } => review::apply(&data, &id, ReviewAction::Approve),
        Commands::Reject { data, id } => review::apply(&data, &id, ReviewAction::Reject),
        Commands::RequestInfo { data, id } => {
            review::apply(&data, &id, ReviewAction::RequestMoreInfo)
        },
        Commands::StartReview { data, id } => {
            review::apply(&data, &id, ReviewAction::StartReview)
        },
    }
}
