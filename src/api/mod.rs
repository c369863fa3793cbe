//! HTTP API
//!
//! Client functions for the metrics collaborator.

pub mod client;

pub use client::{fetch_engagement_metrics, send_interaction_event};
