//! State Management
//!
//! The view-state store and the poller that feeds it.

pub mod poller;
pub mod store;

pub use poller::{MetricsPoller, POLL_INTERVAL_MS};
pub use store::{
    provide_dashboard_state, ChartProjection, DashboardState, MetricsSnapshot, TopElement,
};
