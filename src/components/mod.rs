//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod doughnut;
pub mod event_panel;
pub mod stat_card;
pub mod top_elements;

pub use doughnut::DoughnutChart;
pub use event_panel::EventPanel;
pub use stat_card::StatCard;
pub use top_elements::TopElementsList;
