//! Client-side filtering for the CRM lead table.

use leadpulse_core::{ConversationStage, DateRange, Lead, LeadStatus};
use serde::Deserialize;

/// Filter criteria for the CRM view. All criteria are optional and AND-ed.
/// The contact-date range is independent of the KPI scoping window: it
/// matches on `initial_contact_date`, not `created_at`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrmFilter {
    pub search: Option<String>,
    pub status: Option<LeadStatus>,
    pub stage: Option<ConversationStage>,
    #[serde(default)]
    pub contact_range: DateRange,
}

impl CrmFilter {
    /// Whether a lead passes every active criterion.
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let username_hit = lead.username.to_lowercase().contains(&query);
            let name_hit = lead
                .full_name
                .as_ref()
                .is_some_and(|name| name.to_lowercase().contains(&query));
            if !username_hit && !name_hit {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if &lead.status != status {
                return false;
            }
        }

        if let Some(stage) = &self.stage {
            if lead.conversation_stage.as_ref() != Some(stage) {
                return false;
            }
        }

        // Leads with no recorded contact date always pass the date filter.
        if let (Some(from), Some(contact)) = (self.contact_range.from, lead.initial_contact_date) {
            if contact < from {
                return false;
            }
            if let Some(to) = self.contact_range.to {
                if contact > to {
                    return false;
                }
            }
        }

        true
    }

    /// Keep the matching leads, preserving input order.
    pub fn apply(&self, leads: Vec<Lead>) -> Vec<Lead> {
        leads.into_iter().filter(|lead| self.matches(lead)).collect()
    }
}
