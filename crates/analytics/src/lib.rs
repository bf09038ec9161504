//! Lead analytics engine: time-window resolution, KPI aggregation over a
//! fetched lead snapshot, trend-series generation, and display formatting.
//!
//! Everything here is pure and synchronous. The aggregation functions take a
//! materialized lead collection and compute deterministically; the only
//! wall-clock dependency is the window resolver's evaluation instant.

pub mod format;
pub mod kpi;
pub mod trend;
pub mod window;

pub use format::{format_count, format_percentage};
pub use kpi::{compute_calls_kpis, compute_lead_kpis, CallsKpis, LeadKpis};
pub use trend::{trend_series, trend_series_from, TrendPoint, DEFAULT_TREND_POINTS};
pub use window::{filter_by_window, resolve_window_start, window_start_from};
