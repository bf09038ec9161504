//! Integration test for the full window-filter / aggregate / overview flow,
//! using an in-memory snapshot in place of the hosted store.

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use leadpulse_analytics::{
        compute_calls_kpis, compute_lead_kpis, filter_by_window, window_start_from,
    };
    use leadpulse_core::{ConversationStage, Lead, LeadStatus, TimeFrame};
    use leadpulse_crm::{build_overview, CrmFilter};
    use uuid::Uuid;

    fn lead(
        username: &str,
        status: LeadStatus,
        stage: Option<ConversationStage>,
        days_old: i64,
    ) -> Lead {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
            - Duration::days(days_old);
        Lead {
            id: Uuid::new_v4(),
            username: username.to_string(),
            full_name: None,
            email: None,
            status,
            initial_contact_date: None,
            occupation: None,
            pain_point: None,
            age: None,
            goals: None,
            motivation: None,
            timeline: None,
            conversation_stage: stage,
            notes: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_window_scoping_feeds_aggregation() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let snapshot = vec![
            lead("recent_won", LeadStatus::Completed, Some(ConversationStage::ClosedWon), 2),
            lead("recent_open", LeadStatus::InProgress, Some(ConversationStage::CallBooked), 3),
            lead("stale", LeadStatus::Responded, Some(ConversationStage::Ghosted), 30),
        ];

        let start = window_start_from(TimeFrame::LastWeek, now);
        let in_window = filter_by_window(snapshot, start, None);
        assert_eq!(in_window.len(), 2);

        let kpis = compute_lead_kpis(&in_window);
        assert_eq!(kpis.total_leads, 2);
        assert_eq!(kpis.leads_won, 1);
        assert_eq!(kpis.leads_in_progress, 1);
        // The stale responded lead fell outside the window.
        assert_eq!(kpis.response_rate, 0.0);

        let calls = compute_calls_kpis(&in_window);
        assert_eq!(calls.calls_booked, 1);
        assert_eq!(calls.calls_cancelled, 0);

        let overview = build_overview(&kpis, &calls);
        assert_eq!(overview.lead_cards[0].value, "2");
        assert_eq!(overview.call_cards[1].value, "1");
    }

    #[test]
    fn test_crm_filter_runs_on_the_same_snapshot() {
        let snapshot = vec![
            lead("fit_with_ana", LeadStatus::Responded, None, 1),
            lead("ghosted_guy", LeadStatus::Failed, Some(ConversationStage::Ghosted), 1),
        ];

        let filter = CrmFilter {
            search: Some("ana".to_string()),
            ..Default::default()
        };
        let shown = filter.apply(snapshot);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].username, "fit_with_ana");
    }
}
