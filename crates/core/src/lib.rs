pub mod config;
pub mod error;
pub mod leads;
pub mod timeframe;

pub use config::AppConfig;
pub use error::{LeadPulseError, LeadPulseResult};
pub use leads::{ConversationStage, Lead, LeadStatus};
pub use timeframe::{DateRange, TimeFrame};
