//! KPI aggregation over a window-scoped lead snapshot.

use leadpulse_core::{ConversationStage, Lead, LeadStatus};
use serde::{Deserialize, Serialize};

/// Lead-funnel KPI bundle. Rates are percentages in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadKpis {
    pub total_leads: u64,
    pub leads_won: u64,
    pub leads_lost: u64,
    pub leads_in_progress: u64,
    pub response_rate: f64,
    pub opt_out_rate: f64,
}

/// Call-funnel KPI bundle. Rates are percentages in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallsKpis {
    pub calls_proposed: u64,
    pub calls_booked: u64,
    pub calls_cancelled: u64,
    pub call_show_up_rate: f64,
    pub booking_rate: f64,
}

/// 100 * numerator / denominator, with the zero denominator defined as 0
/// rather than an error.
fn rate(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

/// Compute the lead-funnel KPIs for a snapshot in a single pass.
///
/// Every record counts toward `total_leads`, including those with an
/// unrecognized or absent stage/status; such records simply match none of
/// the specific predicates. A lead is "in progress" when its status is
/// `in_progress` or its stage is one of the six active funnel stages, so the
/// won/lost/in-progress buckets need not sum to the total.
pub fn compute_lead_kpis(leads: &[Lead]) -> LeadKpis {
    let total_leads = leads.len() as u64;
    let mut leads_won = 0u64;
    let mut leads_lost = 0u64;
    let mut leads_in_progress = 0u64;
    let mut responded = 0u64;
    let mut opted_out = 0u64;

    for lead in leads {
        match &lead.conversation_stage {
            Some(ConversationStage::ClosedWon) => leads_won += 1,
            Some(ConversationStage::ClosedLost) => leads_lost += 1,
            _ => {}
        }

        let active_stage = lead
            .conversation_stage
            .as_ref()
            .is_some_and(ConversationStage::is_active);
        if lead.status == LeadStatus::InProgress || active_stage {
            leads_in_progress += 1;
        }

        match &lead.status {
            LeadStatus::Responded => responded += 1,
            LeadStatus::OptOut => opted_out += 1,
            _ => {}
        }
    }

    LeadKpis {
        total_leads,
        leads_won,
        leads_lost,
        leads_in_progress,
        response_rate: rate(responded, total_leads),
        opt_out_rate: rate(opted_out, total_leads),
    }
}

/// Compute the call-funnel KPIs for a snapshot in a single pass.
///
/// `calls_cancelled` counts the `Ghosted` stage: the schema has no true
/// cancellation flag, so ghosting is used as the proxy. A deliberate modeling
/// approximation, kept as-is. Show-up treats any post-call stage (follow-up
/// or either close) as a completed call.
pub fn compute_calls_kpis(leads: &[Lead]) -> CallsKpis {
    let mut calls_proposed = 0u64;
    let mut calls_booked = 0u64;
    let mut calls_cancelled = 0u64;
    let mut calls_completed = 0u64;

    for lead in leads {
        match &lead.conversation_stage {
            Some(ConversationStage::CallProposed) => calls_proposed += 1,
            Some(ConversationStage::CallBooked) => calls_booked += 1,
            Some(ConversationStage::Ghosted) => calls_cancelled += 1,
            Some(
                ConversationStage::PostCallFollowUp
                | ConversationStage::ClosedWon
                | ConversationStage::ClosedLost,
            ) => calls_completed += 1,
            _ => {}
        }
    }

    CallsKpis {
        calls_proposed,
        calls_booked,
        calls_cancelled,
        call_show_up_rate: rate(calls_completed, calls_booked),
        booking_rate: rate(calls_booked, calls_proposed),
    }
}
