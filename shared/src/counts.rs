//! Per-status aggregation driving the dashboard tab badges.

use serde::Serialize;

use crate::record::{Status, VerificationRecord};

/// Record counts per review status plus the overall total.
///
/// Computed values, never stored: callers recompute on every read so
/// the badges cannot drift from the source store. The dashboard
/// always feeds the **full** store here (not a search-narrowed
/// subset), so badges stay stable while a query is being typed; over
/// the full store `all` equals the sum of the five status counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Total number of records counted.
    pub all: usize,
    /// Records with status `pending`.
    pub pending: usize,
    /// Records with status `under-review`.
    pub under_review: usize,
    /// Records with status `more-info-requested`.
    pub more_info: usize,
    /// Records with status `approved`.
    pub approved: usize,
    /// Records with status `rejected`.
    pub rejected: usize,
}

/// Count records per status over the given set.
pub fn counts_by_status(records: &[VerificationRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for record in records {
        counts.all += 1;
        match record.status {
            Status::Pending => counts.pending += 1,
            Status::UnderReview => counts.under_review += 1,
            Status::MoreInfoRequested => counts.more_info += 1,
            Status::Approved => counts.approved += 1,
            Status::Rejected => counts.rejected += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_record;

    #[test]
    fn counts_match_the_reference_queue() {
        let records = vec![
            sample_record("vr-1", "Alex Doe", Status::Pending),
            sample_record("vr-2", "Jessica Brown", Status::Pending),
            sample_record("vr-3", "Sam Roe", Status::UnderReview),
            sample_record("vr-4", "Kim Lee", Status::Approved),
            sample_record("vr-5", "Pat Fox", Status::Rejected),
        ];

        let counts = counts_by_status(&records);
        assert_eq!(
            counts,
            StatusCounts {
                all: 5,
                pending: 2,
                under_review: 1,
                more_info: 0,
                approved: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn all_equals_the_sum_of_the_five_statuses() {
        let records: Vec<_> = Status::ALL
            .iter()
            .enumerate()
            .map(|(i, &status)| sample_record(&format!("vr-{i}"), "Name", status))
            .collect();

        let counts = counts_by_status(&records);
        assert_eq!(
            counts.all,
            counts.pending + counts.under_review + counts.more_info + counts.approved
                + counts.rejected
        );
    }
}
