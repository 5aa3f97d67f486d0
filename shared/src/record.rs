//! Verification submission records and their closed status/type enums.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// Review status of a verification submission.
///
/// The set is closed: every record in a store always holds one of
/// these five values. `Approved` and `Rejected` are terminal by
/// convention only — the dispatcher does not forbid reopening them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Freshly submitted, not yet looked at.
    Pending,
    /// A reviewer has picked the submission up.
    UnderReview,
    /// Sent back to the applicant for additional material.
    MoreInfoRequested,
    /// Verification passed.
    Approved,
    /// Verification failed.
    Rejected,
}

impl Status {
    /// All five statuses, in queue order.
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::UnderReview,
        Status::MoreInfoRequested,
        Status::Approved,
        Status::Rejected,
    ];

    /// Wire name used in seed files and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::UnderReview => "under-review",
            Status::MoreInfoRequested => "more-info-requested",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ReviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Status::Pending),
            "under-review" => Ok(Status::UnderReview),
            "more-info-requested" => Ok(Status::MoreInfoRequested),
            "approved" => Ok(Status::Approved),
            "rejected" => Ok(Status::Rejected),
            other => Err(ReviewError::InvalidStatus(other.to_string())),
        }
    }
}

/// Which side of the platform the applicant belongs to.
///
/// Immutable after submission; it only decides which optional profile
/// sections are populated upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    /// Production-side account looking to hire performers.
    TalentSeeker,
    /// Performer account with skills/media sections.
    StuntPerformer,
}

impl UserType {
    /// Wire name used in seed files and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::TalentSeeker => "talent-seeker",
            UserType::StuntPerformer => "stunt-performer",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ReviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "talent-seeker" => Ok(UserType::TalentSeeker),
            "stunt-performer" => Ok(UserType::StuntPerformer),
            other => Err(ReviewError::InvalidUserType(other.to_string())),
        }
    }
}

/// One skill entry on a performer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    /// Skill name, e.g. "high fall" or "precision driving".
    pub name: String,
    /// Self-assessed rating, 1..=5.
    pub rating: u8,
}

/// Optional profile payload attached to a submission.
///
/// The review workflow treats this as opaque apart from the two
/// derived flags on [`VerificationRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Free-form demographic fields (age, gender, height, ...).
    #[serde(default)]
    pub demographics: std::collections::BTreeMap<String, String>,
    /// Skills with self-assessed ratings.
    #[serde(default)]
    pub skills: Vec<SkillRating>,
    /// Photo attachment references.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Video attachment references.
    #[serde(default)]
    pub videos: Vec<String>,
    /// Portfolio media references; non-empty drives `has_portfolio`.
    #[serde(default)]
    pub portfolio_media: Vec<String>,
    /// Government identity document reference; presence drives
    /// `has_documents`.
    #[serde(default)]
    pub government_id: Option<String>,
    /// Certificate references.
    #[serde(default)]
    pub certificates: Vec<String>,
    /// Training history entries.
    #[serde(default)]
    pub training: Vec<String>,
}

/// One identity-verification submission in the review queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Unique stable identifier, assigned at creation.
    pub id: String,
    /// Applicant display name.
    pub name: String,
    /// Applicant email.
    pub email: String,
    /// Date the record entered the queue.
    pub submitted_date: NaiveDate,
    /// Current review status; the only mutable field.
    pub status: Status,
    /// Applicant kind; never changes after creation.
    pub user_type: UserType,
    /// Country used for location filtering.
    #[serde(default)]
    pub country: Option<String>,
    /// City used for location filtering.
    #[serde(default)]
    pub city: Option<String>,
    /// Display-only freshness indicator, e.g. "2 hours ago".
    #[serde(default)]
    pub last_activity: Option<String>,
    /// Opaque profile payload.
    #[serde(default)]
    pub profile: Option<Profile>,
}

impl VerificationRecord {
    /// True when the profile carries at least one portfolio media
    /// reference.
    pub fn has_portfolio(&self) -> bool {
        self.profile
            .as_ref()
            .map(|p| !p.portfolio_media.is_empty())
            .unwrap_or(false)
    }

    /// True when a government identity document reference is present.
    pub fn has_documents(&self) -> bool {
        self.profile
            .as_ref()
            .map(|p| p.government_id.is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_names() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().ok(), Some(status));
        }
    }

    #[test]
    fn unknown_status_name_is_rejected() {
        let err = "bogus".parse::<Status>().unwrap_err();
        assert_eq!(err, ReviewError::InvalidStatus("bogus".to_string()));
    }

    #[test]
    fn derived_flags_follow_profile_contents() {
        let mut record = crate::seed::sample_record("vr-1", "Alex Doe", Status::Pending);
        assert!(!record.has_portfolio());
        assert!(!record.has_documents());

        let mut profile = Profile::default();
        profile.portfolio_media.push("reel.mp4".to_string());
        profile.government_id = Some("doc-789".to_string());
        record.profile = Some(profile);
        assert!(record.has_portfolio());
        assert!(record.has_documents());
    }
}
