//! Mapping from a time-frame selection to concrete fetch bounds.

use chrono::{DateTime, Utc};
use leadpulse_analytics::resolve_window_start;
use leadpulse_core::{DateRange, TimeFrame};

/// Concrete `created_at` bounds for one fetch. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Resolve the fetch bounds for a selection. `CUSTOM` takes both bounds from
/// the user-supplied range; every other frame uses the rolling window start
/// and no upper bound.
pub fn window_for(frame: TimeFrame, custom: &DateRange) -> FetchWindow {
    if frame == TimeFrame::Custom {
        FetchWindow {
            start: custom.from,
            end: custom.to,
        }
    } else {
        FetchWindow {
            start: resolve_window_start(frame),
            end: None,
        }
    }
}
