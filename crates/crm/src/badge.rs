//! Badge label and color tables for the lead table.
//!
//! Colors are stable palette names the frontend maps to its own styles.
//! Every table has an explicit fallback arm so an unrecognized database
//! value renders like any other badge instead of a missing-key hole.

use leadpulse_core::{ConversationStage, LeadStatus};

/// Human-readable label for a status badge. Unrecognized values fall back to
/// the raw database string.
pub fn status_label(status: &LeadStatus) -> &str {
    match status {
        LeadStatus::InProgress => "In Progress",
        LeadStatus::Completed => "Completed",
        LeadStatus::Failed => "Failed",
        LeadStatus::Responded => "Responded",
        LeadStatus::OptOut => "Opt Out",
        LeadStatus::Other(value) => value,
    }
}

/// Badge color for a status. Unrecognized values use the in-progress color.
pub fn status_color(status: &LeadStatus) -> &'static str {
    match status {
        LeadStatus::Completed => "green",
        LeadStatus::InProgress => "yellow",
        LeadStatus::Failed => "red",
        LeadStatus::Responded => "blue",
        LeadStatus::OptOut => "gray",
        LeadStatus::Other(_) => "yellow",
    }
}

/// Badge color for a funnel stage. Unrecognized values use the neutral gray.
pub fn stage_color(stage: &ConversationStage) -> &'static str {
    match stage {
        ConversationStage::InitialContact => "purple",
        ConversationStage::RapportBuilding => "indigo",
        ConversationStage::Qualification => "blue",
        ConversationStage::CallProposed => "cyan",
        ConversationStage::CallBooked => "teal",
        ConversationStage::PostCallFollowUp => "yellow",
        ConversationStage::ClosedWon => "green",
        ConversationStage::ClosedLost => "red",
        ConversationStage::Ghosted => "gray",
        ConversationStage::Other(_) => "gray",
    }
}
