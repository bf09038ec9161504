//! REST API handlers for the KPI dashboard, the CRM lead list, and
//! operational endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use leadpulse_analytics::{compute_calls_kpis, compute_lead_kpis, CallsKpis, LeadKpis};
use leadpulse_core::{ConversationStage, DateRange, Lead, LeadStatus, TimeFrame};
use leadpulse_crm::{build_overview, CrmFilter, DashboardOverview};
use leadpulse_store::{window_for, LeadStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, warn};

/// Maximum accepted length for the CRM search string.
const MAX_SEARCH_LEN: usize = 256;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LeadStore>,
    pub start_time: Instant,
}

/// Time-window selection shared by both endpoints.
#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    #[serde(default)]
    pub time_frame: TimeFrame,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl WindowQuery {
    fn custom_range(&self) -> DateRange {
        DateRange {
            from: self.from,
            to: self.to,
        }
    }
}

/// Validate a time-window selection at the API boundary.
fn validate_window(query: &WindowQuery) -> Result<(), &'static str> {
    if query.time_frame == TimeFrame::Custom && query.from.is_none() {
        return Err("CUSTOM time frame requires 'from'");
    }
    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            return Err("'from' must not be after 'to'");
        }
    }
    Ok(())
}

/// GET /v1/dashboard — KPI bundles plus the card overview for one window.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<DashboardResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(msg) = validate_window(&query) {
        warn!(time_frame = query.time_frame.as_str(), error = msg, "Dashboard query rejected");
        metrics::counter!("api.validation_errors").increment(1);
        return Err(bad_request(msg));
    }

    let window = window_for(query.time_frame, &query.custom_range());
    let leads = fetch_snapshot(&state, &window).await?;

    let lead_kpis = compute_lead_kpis(&leads);
    let calls_kpis = compute_calls_kpis(&leads);
    let overview = build_overview(&lead_kpis, &calls_kpis);

    Ok(Json(DashboardResponse {
        time_frame: query.time_frame,
        lead_kpis,
        calls_kpis,
        overview,
        generated_at: Utc::now(),
    }))
}

/// Query parameters for the CRM lead list: a time window plus the optional
/// CRM filters.
#[derive(Debug, Deserialize)]
pub struct LeadListQuery {
    #[serde(default)]
    pub time_frame: TimeFrame,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub search: Option<String>,
    pub status: Option<LeadStatus>,
    pub stage: Option<ConversationStage>,
    pub contact_from: Option<DateTime<Utc>>,
    pub contact_to: Option<DateTime<Utc>>,
}

/// GET /v1/leads — the filtered CRM lead list for one window.
pub async fn list_leads(
    State(state): State<AppState>,
    Query(query): Query<LeadListQuery>,
) -> Result<Json<LeadListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let window_query = WindowQuery {
        time_frame: query.time_frame,
        from: query.from,
        to: query.to,
    };
    if let Err(msg) = validate_window(&window_query) {
        warn!(time_frame = query.time_frame.as_str(), error = msg, "Lead list query rejected");
        metrics::counter!("api.validation_errors").increment(1);
        return Err(bad_request(msg));
    }
    if query.search.as_ref().is_some_and(|s| s.len() > MAX_SEARCH_LEN) {
        metrics::counter!("api.validation_errors").increment(1);
        return Err(bad_request("'search' exceeds maximum length"));
    }

    let window = window_for(query.time_frame, &window_query.custom_range());
    let leads = fetch_snapshot(&state, &window).await?;
    let total = leads.len();

    let filter = CrmFilter {
        search: query.search,
        status: query.status,
        stage: query.stage,
        contact_range: DateRange {
            from: query.contact_from,
            to: query.contact_to,
        },
    };
    let leads = filter.apply(leads);
    let shown = leads.len();

    Ok(Json(LeadListResponse { leads, shown, total }))
}

async fn fetch_snapshot(
    state: &AppState,
    window: &leadpulse_store::FetchWindow,
) -> Result<Vec<Lead>, (StatusCode, Json<ErrorResponse>)> {
    match state.store.fetch_leads(window).await {
        Ok(leads) => Ok(leads),
        Err(e) => {
            error!(error = %e, "Lead fetch failed");
            metrics::counter!("api.store_errors").increment(1);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "lead_fetch_failed".to_string(),
                    message: "Upstream lead store request failed".to_string(),
                }),
            ))
        }
    }
}

fn bad_request(msg: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "invalid_query".to_string(),
            message: msg.to_string(),
        }),
    )
}

/// GET /health — Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.start_time.elapsed().as_secs() > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /live — Liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub time_frame: TimeFrame,
    pub lead_kpis: LeadKpis,
    pub calls_kpis: CallsKpis,
    pub overview: DashboardOverview,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct LeadListResponse {
    pub leads: Vec<Lead>,
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use leadpulse_core::LeadPulseResult;
    use leadpulse_store::FetchWindow;
    use uuid::Uuid;

    struct FixedStore {
        leads: Vec<Lead>,
    }

    #[async_trait]
    impl LeadStore for FixedStore {
        async fn fetch_leads(&self, _window: &FetchWindow) -> LeadPulseResult<Vec<Lead>> {
            Ok(self.leads.clone())
        }
    }

    fn sample_lead(username: &str, status: LeadStatus) -> Lead {
        let now = Utc::now();
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
            conversation_stage: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn state_with(leads: Vec<Lead>) -> AppState {
        AppState {
            store: Arc::new(FixedStore { leads }),
            start_time: Instant::now(),
        }
    }

    #[test]
    fn test_custom_frame_requires_from() {
        let query = WindowQuery {
            time_frame: TimeFrame::Custom,
            from: None,
            to: None,
        };
        assert!(validate_window(&query).is_err());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let now = Utc::now();
        let query = WindowQuery {
            time_frame: TimeFrame::Custom,
            from: Some(now),
            to: Some(now - chrono::Duration::days(1)),
        };
        assert!(validate_window(&query).is_err());
    }

    #[test]
    fn test_plain_frames_need_no_range() {
        let query = WindowQuery {
            time_frame: TimeFrame::LastWeek,
            from: None,
            to: None,
        };
        assert!(validate_window(&query).is_ok());
    }

    #[tokio::test]
    async fn test_dashboard_aggregates_store_snapshot() {
        let state = state_with(vec![
            sample_lead("a", LeadStatus::Responded),
            sample_lead("b", LeadStatus::OptOut),
        ]);
        let query = WindowQuery {
            time_frame: TimeFrame::AllTime,
            from: None,
            to: None,
        };

        let response = get_dashboard(State(state), Query(query)).await.unwrap();
        assert_eq!(response.0.lead_kpis.total_leads, 2);
        assert_eq!(response.0.lead_kpis.response_rate, 50.0);
        assert_eq!(response.0.overview.lead_cards.len(), 6);
    }

    #[tokio::test]
    async fn test_lead_list_filters_and_reports_counts() {
        let state = state_with(vec![
            sample_lead("fit_with_ana", LeadStatus::Responded),
            sample_lead("other_lead", LeadStatus::InProgress),
        ]);
        let query = LeadListQuery {
            time_frame: TimeFrame::AllTime,
            from: None,
            to: None,
            search: Some("ana".to_string()),
            status: None,
            stage: None,
            contact_from: None,
            contact_to: None,
        };

        let response = list_leads(State(state), Query(query)).await.unwrap();
        assert_eq!(response.0.total, 2);
        assert_eq!(response.0.shown, 1);
        assert_eq!(response.0.leads[0].username, "fit_with_ana");
    }
}
