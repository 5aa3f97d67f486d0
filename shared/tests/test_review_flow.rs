#[cfg(test)]
mod tests {
    use castdesk_shared::{
        counts_by_status, filter, transition, Criteria, ReviewError, Status, Tab,
        VerificationStore,
    };

    const SEED: &str = r#"[
        {
            "id": "vr-001",
            "name": "Alex Doe",
            "email": "alex.doe@example.com",
            "submitted_date": "2026-01-04",
            "status": "pending",
            "user_type": "stunt-performer",
            "country": "US",
            "city": "Los Angeles"
        },
        {
            "id": "vr-002",
            "name": "Jessica Brown",
            "email": "jessica.brown@example.com",
            "submitted_date": "2026-01-06",
            "status": "pending",
            "user_type": "stunt-performer",
            "country": "UK",
            "city": "London",
            "profile": {
                "portfolio_media": ["reel.mp4"],
                "government_id": "doc-221"
            }
        },
        {
            "id": "vr-003",
            "name": "Sam Roe",
            "email": "sam.roe@example.com",
            "submitted_date": "2026-01-09",
            "status": "under-review",
            "user_type": "talent-seeker"
        },
        {
            "id": "vr-004",
            "name": "Kim Lee",
            "email": "kim.lee@example.com",
            "submitted_date": "2026-01-12",
            "status": "approved",
            "user_type": "stunt-performer"
        },
        {
            "id": "vr-005",
            "name": "Pat Fox",
            "email": "pat.fox@example.com",
            "submitted_date": "2026-01-15",
            "status": "rejected",
            "user_type": "talent-seeker"
        }
    ]"#;

    fn seeded_store() -> VerificationStore {
        castdesk_shared::seed::store_from_json(SEED).expect("seed must parse")
    }

    #[test]
    fn counts_over_the_full_store_match_the_reference_queue() {
        let store = seeded_store();
        let counts = counts_by_status(store.get_all());

        assert_eq!(counts.all, 5);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.under_review, 1);
        assert_eq!(counts.more_info, 0);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.rejected, 1);
        assert_eq!(
            counts.all,
            counts.pending + counts.under_review + counts.more_info + counts.approved
                + counts.rejected
        );
    }

    #[test]
    fn pending_tab_returns_exactly_the_pending_records_in_order() {
        let store = seeded_store();
        let visible = filter(store.get_all(), &Criteria::default(), Tab::Pending);
        let ids: Vec<&str> = visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["vr-001", "vr-002"]);
    }

    #[test]
    fn jessica_query_finds_one_record_regardless_of_case() {
        let store = seeded_store();
        for query in ["jessica", "JESSICA", "JeSsIcA"] {
            let criteria = Criteria {
                query: Some(query.to_string()),
                ..Criteria::default()
            };
            let visible = filter(store.get_all(), &criteria, Tab::All);
            assert_eq!(visible.len(), 1, "query {query:?}");
            assert_eq!(visible[0].name, "Jessica Brown");
        }
    }

    #[test]
    fn derived_flags_are_filterable_from_the_seed_profile() {
        let store = seeded_store();
        let criteria = Criteria {
            has_portfolio: Some(true),
            has_documents: Some(true),
            ..Criteria::default()
        };
        let visible = filter(store.get_all(), &criteria, Tab::All);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "vr-002");
    }

    #[test]
    fn approve_then_reopen_keeps_every_other_field() {
        let mut store = seeded_store();
        let before = store.get_by_id("vr-001").expect("vr-001").clone();

        transition(&mut store, "vr-001", "approved").expect("approve");
        assert_eq!(store.get_by_id("vr-001").expect("vr-001").status, Status::Approved);

        let reopened = transition(&mut store, "vr-001", "pending").expect("reopen");
        assert_eq!(reopened.status, Status::Pending);
        assert_eq!(reopened.name, before.name);
        assert_eq!(reopened.email, before.email);
        assert_eq!(reopened.submitted_date, before.submitted_date);
        assert_eq!(reopened.country, before.country);
        assert_eq!(reopened.city, before.city);
    }

    #[test]
    fn failed_transition_leaves_counts_untouched() {
        let mut store = seeded_store();
        let before = counts_by_status(store.get_all());

        let err = transition(&mut store, "vr-003", "archived").unwrap_err();
        assert_eq!(err, ReviewError::InvalidTransition("archived".to_string()));
        assert_eq!(counts_by_status(store.get_all()), before);
    }

    #[test]
    fn transitions_show_up_in_tab_filters_on_the_next_read() {
        let mut store = seeded_store();
        transition(&mut store, "vr-003", "more-info-requested").expect("request info");

        let more_info = filter(store.get_all(), &Criteria::default(), Tab::MoreInfo);
        assert_eq!(more_info.len(), 1);
        assert_eq!(more_info[0].id, "vr-003");
        assert!(filter(store.get_all(), &Criteria::default(), Tab::UnderReview).is_empty());
    }
}
