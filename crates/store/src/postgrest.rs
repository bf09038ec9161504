//! PostgREST-backed lead store (Supabase `crm_leads` table).

use async_trait::async_trait;
use leadpulse_core::config::StoreConfig;
use leadpulse_core::{Lead, LeadPulseError, LeadPulseResult};
use tracing::{debug, info};

use crate::window::FetchWindow;
use crate::LeadStore;

/// HTTP client for the hosted lead table. The `created_at` window is pushed
/// down into the PostgREST query string so the store only returns in-window
/// rows.
pub struct PostgrestLeadStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl PostgrestLeadStore {
    pub fn new(config: &StoreConfig) -> LeadPulseResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| LeadPulseError::Store(format!("failed to build HTTP client: {e}")))?;

        info!(url = %config.url, table = %config.table, "Lead store configured");

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            table: config.table.clone(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

/// Build the PostgREST query pairs for a fetch window. `created_at` appears
/// once per bound (`gte.` / `lte.`), which PostgREST ANDs together.
fn window_query(window: &FetchWindow) -> Vec<(&'static str, String)> {
    let mut query = vec![("select", "*".to_string())];
    if let Some(start) = window.start {
        query.push(("created_at", format!("gte.{}", start.to_rfc3339())));
    }
    if let Some(end) = window.end {
        query.push(("created_at", format!("lte.{}", end.to_rfc3339())));
    }
    query
}

#[async_trait]
impl LeadStore for PostgrestLeadStore {
    async fn fetch_leads(&self, window: &FetchWindow) -> LeadPulseResult<Vec<Lead>> {
        let url = self.table_url();
        let query = window_query(window);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| LeadPulseError::Store(format!("fetch failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeadPulseError::Store(format!(
                "{} query returned {}",
                self.table, status
            )));
        }

        let leads: Vec<Lead> = response
            .json()
            .await
            .map_err(|e| LeadPulseError::Store(format!("invalid lead payload: {e}")))?;

        debug!(count = leads.len(), "Fetched lead snapshot");
        Ok(leads)
    }
}
