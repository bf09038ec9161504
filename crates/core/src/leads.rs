use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outreach status of a lead, matching the upstream `status` enum column.
///
/// Database values outside the known set deserialize into `Other` so a single
/// bad row never fails a whole fetch. `Other` matches no counting predicate
/// but the record still contributes to totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadStatus {
    InProgress,
    Completed,
    Failed,
    Responded,
    OptOut,
    /// Unrecognized database value, preserved verbatim.
    Other(String),
}

impl LeadStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LeadStatus::InProgress => "in_progress",
            LeadStatus::Completed => "completed",
            LeadStatus::Failed => "failed",
            LeadStatus::Responded => "responded",
            LeadStatus::OptOut => "opt_out",
            LeadStatus::Other(value) => value,
        }
    }
}

impl From<String> for LeadStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "in_progress" => LeadStatus::InProgress,
            "completed" => LeadStatus::Completed,
            "failed" => LeadStatus::Failed,
            "responded" => LeadStatus::Responded,
            "opt_out" => LeadStatus::OptOut,
            _ => LeadStatus::Other(value),
        }
    }
}

impl From<LeadStatus> for String {
    fn from(status: LeadStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Conversation funnel stage, matching the upstream `conversation_stage`
/// column. The nine stages are ordered from first touch to terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConversationStage {
    InitialContact,
    RapportBuilding,
    Qualification,
    CallProposed,
    CallBooked,
    PostCallFollowUp,
    ClosedWon,
    ClosedLost,
    Ghosted,
    /// Unrecognized database value, preserved verbatim.
    Other(String),
}

impl ConversationStage {
    pub fn as_str(&self) -> &str {
        match self {
            ConversationStage::InitialContact => "Initial Contact",
            ConversationStage::RapportBuilding => "Rapport Building",
            ConversationStage::Qualification => "Qualification",
            ConversationStage::CallProposed => "Call Proposed",
            ConversationStage::CallBooked => "Call Booked",
            ConversationStage::PostCallFollowUp => "Post-Call Follow-up",
            ConversationStage::ClosedWon => "Closed/Won",
            ConversationStage::ClosedLost => "Closed/Lost",
            ConversationStage::Ghosted => "Ghosted",
            ConversationStage::Other(value) => value,
        }
    }

    /// Whether this stage counts as an active (pre-close) funnel stage.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ConversationStage::InitialContact
                | ConversationStage::RapportBuilding
                | ConversationStage::Qualification
                | ConversationStage::CallProposed
                | ConversationStage::CallBooked
                | ConversationStage::PostCallFollowUp
        )
    }
}

impl From<String> for ConversationStage {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Initial Contact" => ConversationStage::InitialContact,
            "Rapport Building" => ConversationStage::RapportBuilding,
            "Qualification" => ConversationStage::Qualification,
            "Call Proposed" => ConversationStage::CallProposed,
            "Call Booked" => ConversationStage::CallBooked,
            "Post-Call Follow-up" => ConversationStage::PostCallFollowUp,
            "Closed/Won" => ConversationStage::ClosedWon,
            "Closed/Lost" => ConversationStage::ClosedLost,
            "Ghosted" => ConversationStage::Ghosted,
            _ => ConversationStage::Other(value),
        }
    }
}

impl From<ConversationStage> for String {
    fn from(stage: ConversationStage) -> Self {
        stage.as_str().to_string()
    }
}

/// A CRM lead row from the upstream `crm_leads` table.
///
/// Aggregation treats leads as immutable snapshots: the collection fetched
/// for one time-frame selection is discarded on the next, never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    #[serde(rename = "ig_username")]
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub status: LeadStatus,
    pub initial_contact_date: Option<DateTime<Utc>>,
    pub occupation: Option<String>,
    pub pain_point: Option<String>,
    pub age: Option<u32>,
    pub goals: Option<String>,
    pub motivation: Option<String>,
    pub timeline: Option<String>,
    pub conversation_stage: Option<ConversationStage>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
