//! Command-line definitions for the CastDesk CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output rendering for query commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table, one record per line.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Top-level CLI entry.
#[derive(Parser)]
#[command(name = "castdesk", version, about = "CastDesk verification review CLI")]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,
}

/// Review-queue subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List records for a tab, optionally narrowed by search criteria.
    List {
        /// Seed file with the verification records.
        #[arg(long, default_value = "./data/verifications.json")]
        data: PathBuf,
        /// Tab to show (all/pending/under-review/more-info/approved/rejected).
        #[arg(long, default_value = "all")]
        tab: String,
        /// Case-insensitive substring query over name, email and id.
        #[arg(long)]
        query: Option<String>,
        /// Status filter; repeat for multiple statuses.
        #[arg(long = "status")]
        statuses: Vec<String>,
        /// User-type filter; repeat for multiple types.
        #[arg(long = "user-type")]
        user_types: Vec<String>,
        /// Country filter (case-insensitive).
        #[arg(long)]
        country: Option<String>,
        /// City filter (case-insensitive).
        #[arg(long)]
        city: Option<String>,
        /// Only records with (true) or without (false) portfolio media.
        #[arg(long)]
        has_portfolio: Option<bool>,
        /// Only records with (true) or without (false) an identity document.
        #[arg(long)]
        has_documents: Option<bool>,
        /// Only records submitted on or after this date (YYYY-MM-DD).
        #[arg(long)]
        since: Option<String>,
        /// Output format (`table` or `json`).
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, ignore_case = true)]
        format: OutputFormat,
    },
    /// Print per-status record counts for the tab badges.
    Counts {
        /// Seed file with the verification records.
        #[arg(long, default_value = "./data/verifications.json")]
        data: PathBuf,
        /// Output format (`table` or `json`).
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, ignore_case = true)]
        format: OutputFormat,
    },
    /// Show one record as JSON.
    Show {
        /// Seed file with the verification records.
        #[arg(long, default_value = "./data/verifications.json")]
        data: PathBuf,
        /// Record id.
        id: String,
    },
    /// Move a record to an explicit status.
    Transition {
        /// Seed file with the verification records.
        #[arg(long, default_value = "./data/verifications.json")]
        data: PathBuf,
        /// Record id.
        id: String,
        /// Target status name.
        status: String,
    },
    /// Approve a record.
    Approve {
        /// Seed file with the verification records.
        #[arg(long, default_value = "./data/verifications.json")]
        data: PathBuf,
        /// Record id.
        id: String,
    },
    /// Reject a record.
    Reject {
        /// Seed file with the verification records.
        #[arg(long, default_value = "./data/verifications.json")]
        data: PathBuf,
        /// Record id.
        id: String,
    },
    /// Send a record back for more information.
    RequestInfo {
        /// Seed file with the verification records.
        #[arg(long, default_value = "./data/verifications.json")]
        data: PathBuf,
        /// Record id.
        id: String,
    },
    /// Move a record into review.
    StartReview {
        /// Seed file with the verification records.
        #[arg(long, default_value = "./data/verifications.json")]
        data: PathBuf,
        /// Record id.
        id: String,
    },
}
