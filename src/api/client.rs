//! HTTP API Client
//!
//! Functions for communicating with the metrics collaborator over its two
//! endpoints: `GET /metrics` (read) and `POST /event` (write).

use gloo_net::http::Request;

use crate::dispatch::InteractionEvent;
use crate::state::store::MetricsSnapshot;

/// Default collaborator base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8081";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("engagement_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Decode a metrics response body. A body that does not match the wire
/// shape is a poll failure, not a partial snapshot.
pub(crate) fn decode_snapshot(body: &str) -> Result<MetricsSnapshot, String> {
    serde_json::from_str(body).map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the latest engagement metrics snapshot
pub async fn fetch_engagement_metrics() -> Result<MetricsSnapshot, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/metrics", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Unexpected status: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    decode_snapshot(&body)
}

/// Send a synthetic interaction event to the collaborator's write
/// endpoint. No response body is consumed.
pub async fn send_interaction_event(event: &InteractionEvent) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/event", api_base))
        .json(event)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Unexpected status: {}", response.status()));
    }

    Ok(())
}
