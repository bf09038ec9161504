//! Time-window resolution for KPI scoping.

use chrono::{DateTime, Duration, Months, Utc};
use leadpulse_core::{Lead, TimeFrame};

/// Resolve the lower window boundary for a time-frame selector, relative to
/// the current instant. `None` means no lower bound: `ALL` considers every
/// record, and `CUSTOM` ranges are supplied out-of-band by the caller.
///
/// Windows are rolling, not calendar-aligned: `1M` is "one month before now",
/// whatever time of day now is.
pub fn resolve_window_start(frame: TimeFrame) -> Option<DateTime<Utc>> {
    window_start_from(frame, Utc::now())
}

/// Same as [`resolve_window_start`] but with an explicit evaluation instant.
pub fn window_start_from(frame: TimeFrame, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match frame {
        TimeFrame::LastDay => Some(now - Duration::days(1)),
        TimeFrame::LastWeek => Some(now - Duration::days(7)),
        TimeFrame::LastMonth => now.checked_sub_months(Months::new(1)),
        TimeFrame::LastSixMonths => now.checked_sub_months(Months::new(6)),
        TimeFrame::LastYear => now.checked_sub_months(Months::new(12)),
        TimeFrame::AllTime | TimeFrame::Custom => None,
    }
}

/// Keep the leads whose `created_at` falls inside the window: strictly after
/// `start`, and not after `end` when an upper bound is supplied.
///
/// With no lower bound the snapshot is returned unchanged, even when an
/// upper bound was supplied; this mirrors the upstream query behavior where
/// `ALL` skips filtering entirely.
pub fn filter_by_window(
    leads: Vec<Lead>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<Lead> {
    let Some(start) = start else {
        return leads;
    };

    leads
        .into_iter()
        .filter(|lead| {
            lead.created_at > start && end.map_or(true, |end| lead.created_at <= end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use leadpulse_core::LeadStatus;
    use uuid::Uuid;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn lead_created_at(created_at: DateTime<Utc>) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            username: "lead".to_string(),
            full_name: None,
            email: None,
            status: LeadStatus::InProgress,
            initial_contact_date: None,
            occupation: None,
            pain_point: None,
            age: None,
            goals: None,
            motivation: None,
            timeline: None,
            conversation_stage: None,
            notes: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_rolling_windows_subtract_fixed_durations() {
        let now = fixed_now();
        assert_eq!(
            window_start_from(TimeFrame::LastDay, now),
            Some(now - Duration::days(1))
        );
        assert_eq!(
            window_start_from(TimeFrame::LastWeek, now),
            Some(now - Duration::days(7))
        );
        assert_eq!(
            window_start_from(TimeFrame::LastMonth, now),
            Some(Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap())
        );
        assert_eq!(
            window_start_from(TimeFrame::LastSixMonths, now),
            Some(Utc.with_ymd_and_hms(2023, 9, 15, 12, 0, 0).unwrap())
        );
        assert_eq!(
            window_start_from(TimeFrame::LastYear, now),
            Some(Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_all_time_and_custom_have_no_lower_bound() {
        let now = fixed_now();
        assert_eq!(window_start_from(TimeFrame::AllTime, now), None);
        assert_eq!(window_start_from(TimeFrame::Custom, now), None);
    }

    #[test]
    fn test_window_filter_is_strict_on_start_inclusive_on_end() {
        let start = fixed_now();
        let end = start + Duration::days(2);
        let leads = vec![
            lead_created_at(start),                       // on boundary, excluded
            lead_created_at(start + Duration::hours(1)),  // in window
            lead_created_at(end),                         // on end, included
            lead_created_at(end + Duration::hours(1)),    // past end, excluded
        ];

        let kept = filter_by_window(leads, Some(start), Some(end));
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|l| l.created_at > start && l.created_at <= end));
    }

    #[test]
    fn test_no_lower_bound_keeps_everything() {
        let now = fixed_now();
        let leads = vec![
            lead_created_at(now - Duration::days(400)),
            lead_created_at(now),
        ];
        let kept = filter_by_window(leads, None, Some(now - Duration::days(1)));
        assert_eq!(kept.len(), 2);
    }
}
