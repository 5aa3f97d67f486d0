//! Pure filter & search over the review queue.
//!
//! [`filter`] derives a visible subset from a record slice given a
//! tab selection plus [`Criteria`]; it never mutates anything and
//! preserves the store's insertion order. An empty result is a valid
//! outcome — contradictory criteria (for example a status set that
//! excludes the active tab's status) are not an error.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::record::{Status, UserType, VerificationRecord};

/// Named status subset shown as a dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Every record regardless of status.
    #[default]
    All,
    /// Records with status `pending`.
    Pending,
    /// Records with status `under-review`.
    UnderReview,
    /// Records with status `more-info-requested`.
    MoreInfo,
    /// Records with status `approved`.
    Approved,
    /// Records with status `rejected`.
    Rejected,
}

impl Tab {
    /// Status this tab narrows to; `None` for [`Tab::All`].
    pub fn status(&self) -> Option<Status> {
        match self {
            Tab::All => None,
            Tab::Pending => Some(Status::Pending),
            Tab::UnderReview => Some(Status::UnderReview),
            Tab::MoreInfo => Some(Status::MoreInfoRequested),
            Tab::Approved => Some(Status::Approved),
            Tab::Rejected => Some(Status::Rejected),
        }
    }

    /// Tab name as used in the dashboard and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Pending => "pending",
            Tab::UnderReview => "under-review",
            Tab::MoreInfo => "more-info",
            Tab::Approved => "approved",
            Tab::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Tab::All),
            "pending" => Ok(Tab::Pending),
            "under-review" => Ok(Tab::UnderReview),
            "more-info" => Ok(Tab::MoreInfo),
            "approved" => Ok(Tab::Approved),
            "rejected" => Ok(Tab::Rejected),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// Structured + free-text filter state applied on top of a tab.
///
/// Criteria are ephemeral: built per interaction, never persisted.
/// All constraints combine conjunctively.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Keep records whose status is in this set (empty = any).
    pub statuses: Vec<Status>,
    /// Keep records whose user type is in this set (empty = any).
    pub user_types: Vec<UserType>,
    /// Country match, case-insensitive.
    pub country: Option<String>,
    /// City match, case-insensitive.
    pub city: Option<String>,
    /// Tri-state portfolio flag: `Some(true)`/`Some(false)` must
    /// match the derived flag, `None` matches anything.
    pub has_portfolio: Option<bool>,
    /// Tri-state documents flag, same semantics as `has_portfolio`.
    pub has_documents: Option<bool>,
    /// Keep records submitted on or after this date.
    pub submitted_on_or_after: Option<NaiveDate>,
    /// Case-insensitive substring query over name, email and id.
    /// Empty or absent matches everything.
    pub query: Option<String>,
}

impl Criteria {
    fn matches(&self, record: &VerificationRecord) -> bool {
        if let Some(query) = self.query.as_deref() {
            let query = query.trim().to_lowercase();
            if !query.is_empty() {
                let hit = record.name.to_lowercase().contains(&query)
                    || record.email.to_lowercase().contains(&query)
                    || record.id.to_lowercase().contains(&query);
                if !hit {
                    return false;
                }
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&record.status) {
            return false;
        }
        if !self.user_types.is_empty() && !self.user_types.contains(&record.user_type) {
            return false;
        }

        if let Some(country) = self.country.as_deref() {
            let hit = record
                .country
                .as_deref()
                .map(|c| c.eq_ignore_ascii_case(country))
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }
        if let Some(city) = self.city.as_deref() {
            let hit = record
                .city
                .as_deref()
                .map(|c| c.eq_ignore_ascii_case(city))
                .unwrap_or(false);
            if !hit {
                return false;
            }
        }

        if let Some(expected) = self.has_portfolio {
            if record.has_portfolio() != expected {
                return false;
            }
        }
        if let Some(expected) = self.has_documents {
            if record.has_documents() != expected {
                return false;
            }
        }

        if let Some(bound) = self.submitted_on_or_after {
            if record.submitted_date < bound {
                return false;
            }
        }

        true
    }
}

/// Derive the visible subset for a tab plus criteria.
///
/// Order is stable: the input slice's order (i.e. the store's
/// insertion order) is preserved, no re-sort happens.
pub fn filter<'a>(
    records: &'a [VerificationRecord],
    criteria: &Criteria,
    tab: Tab,
) -> Vec<&'a VerificationRecord> {
    let tab_status = tab.status();
    records
        .iter()
        .filter(|record| tab_status.map(|s| record.status == s).unwrap_or(true))
        .filter(|record| criteria.matches(record))
        .collect()
}
