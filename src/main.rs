//! Engagement Analytics Dashboard
//!
//! Live user-engagement dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) application that compiles to
//! WebAssembly. A background poller fetches aggregate engagement metrics
//! from the analytics service on a fixed cadence and publishes each
//! snapshot to a reactive store; every view is a pure function of that
//! store. Operator-triggered buttons emit synthetic interaction events
//! back to the service's write endpoint for testing.

use leptos::*;

mod api;
mod app;
mod components;
mod dispatch;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
