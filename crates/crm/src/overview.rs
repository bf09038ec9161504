//! Dashboard overview assembly: KPI bundles rendered into card DTOs.

use chrono::{DateTime, Utc};
use leadpulse_analytics::{
    format_count, format_percentage, trend_series, CallsKpis, LeadKpis, TrendPoint,
    DEFAULT_TREND_POINTS,
};
use serde::Serialize;

/// One dashboard card: a formatted value plus its sparkline series.
#[derive(Debug, Clone, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub color: &'static str,
    pub trend: Vec<TrendPoint>,
}

/// The full card layout for the KPI tab.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub lead_cards: Vec<KpiCard>,
    pub call_cards: Vec<KpiCard>,
    pub generated_at: DateTime<Utc>,
}

fn card(title: &'static str, value: String, color: &'static str) -> KpiCard {
    KpiCard {
        title,
        value,
        color,
        // Placeholder series; real per-card history is not computed yet.
        trend: trend_series(DEFAULT_TREND_POINTS),
    }
}

/// Render both KPI bundles into the card layout the dashboard shows.
pub fn build_overview(leads: &LeadKpis, calls: &CallsKpis) -> DashboardOverview {
    let lead_cards = vec![
        card("Total Leads", format_count(leads.total_leads), "blue"),
        card("Leads Won", format_count(leads.leads_won), "green"),
        card("Leads Lost", format_count(leads.leads_lost), "red"),
        card("In Progress", format_count(leads.leads_in_progress), "yellow"),
        card("Response Rate", format_percentage(leads.response_rate), "purple"),
        card("Opt-out Rate", format_percentage(leads.opt_out_rate), "orange"),
    ];

    let call_cards = vec![
        card("Calls Proposed", format_count(calls.calls_proposed), "cyan"),
        card("Calls Booked", format_count(calls.calls_booked), "teal"),
        card("Calls Cancelled", format_count(calls.calls_cancelled), "pink"),
        card("Show-up Rate", format_percentage(calls.call_show_up_rate), "indigo"),
        card("Booking Rate", format_percentage(calls.booking_rate), "orange"),
    ];

    DashboardOverview {
        lead_cards,
        call_cards,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_card_layout() {
        let leads = LeadKpis {
            total_leads: 12_345,
            leads_won: 4,
            leads_lost: 2,
            leads_in_progress: 7,
            response_rate: 33.333,
            opt_out_rate: 0.0,
        };
        let calls = CallsKpis {
            calls_proposed: 3,
            calls_booked: 2,
            calls_cancelled: 1,
            call_show_up_rate: 50.0,
            booking_rate: 66.666,
        };

        let overview = build_overview(&leads, &calls);
        assert_eq!(overview.lead_cards.len(), 6);
        assert_eq!(overview.call_cards.len(), 5);

        assert_eq!(overview.lead_cards[0].title, "Total Leads");
        assert_eq!(overview.lead_cards[0].value, "12,345");
        assert_eq!(overview.lead_cards[4].value, "33.3%");
        assert_eq!(overview.call_cards[4].value, "66.7%");

        for card in overview.lead_cards.iter().chain(&overview.call_cards) {
            assert_eq!(card.trend.len(), DEFAULT_TREND_POINTS);
            assert!(card.trend.iter().all(|point| point.value == 0.0));
        }
    }
}
