//! Lead record retrieval from the hosted data store.
//!
//! The analytics engine never performs I/O; this crate owns the boundary. A
//! fetch either yields a materialized lead snapshot or an error the caller
//! surfaces without invoking aggregation. No retry policy lives here.

pub mod postgrest;
pub mod window;

use async_trait::async_trait;
use leadpulse_core::{Lead, LeadPulseResult};

pub use postgrest::PostgrestLeadStore;
pub use window::{window_for, FetchWindow};

/// Record-retrieval capability: fetch all leads whose `created_at` satisfies
/// the given bounds.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn fetch_leads(&self, window: &FetchWindow) -> LeadPulseResult<Vec<Lead>>;
}
