//! CRM-view logic: lead-list filtering, badge label/color tables, and
//! dashboard overview assembly. Pure data transformation; rendering lives in
//! the frontend.

pub mod badge;
pub mod filter;
pub mod overview;

pub use badge::{stage_color, status_color, status_label};
pub use filter::CrmFilter;
pub use overview::{build_overview, DashboardOverview, KpiCard};
