use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse time-frame selector for KPI scoping. Wire names match the upstream
/// dashboard buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeFrame {
    #[serde(rename = "1D")]
    LastDay,
    #[serde(rename = "1W")]
    LastWeek,
    #[serde(rename = "1M")]
    LastMonth,
    #[serde(rename = "6M")]
    LastSixMonths,
    #[serde(rename = "1Y")]
    LastYear,
    #[default]
    #[serde(rename = "ALL")]
    AllTime,
    #[serde(rename = "CUSTOM")]
    Custom,
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::LastDay => "1D",
            TimeFrame::LastWeek => "1W",
            TimeFrame::LastMonth => "1M",
            TimeFrame::LastSixMonths => "6M",
            TimeFrame::LastYear => "1Y",
            TimeFrame::AllTime => "ALL",
            TimeFrame::Custom => "CUSTOM",
        }
    }
}

/// User-supplied interval for the CUSTOM time frame and the CRM
/// contact-date filter. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}
