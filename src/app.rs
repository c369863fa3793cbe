//! App Root Component
//!
//! Provides the view-state store, owns the poller lifecycle, and lays out
//! the page chrome around the dashboard.

use leptos::*;

use crate::pages::Dashboard;
use crate::state::poller::MetricsPoller;
use crate::state::store::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all components
    provide_dashboard_state();
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Poll for the lifetime of the app. The cleanup cancels the timer and
    // invalidates any poll still in flight.
    let mut poller = MetricsPoller::new(state);
    poller.start();
    on_cleanup(move || poller.stop());

    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100 flex flex-col">
            <header class="container mx-auto px-6 pt-6">
                <h1 class="text-3xl font-bold text-emerald-400">
                    "User Engagement Analytics"
                </h1>
            </header>

            <main class="flex-1 container mx-auto px-6 py-6 pb-24">
                <Dashboard />
            </main>

            <Footer />
        </div>
    }
}

/// Footer showing the diagnostic signals: last snapshot time and failed
/// poll count. Poll failures never surface anywhere else in the UI.
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let state_for_updated = state.clone();
    let state_for_failures = state;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || {
                        state_for_updated.last_updated.get()
                            .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                            .map(|dt| format!("Updated {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Waiting for first poll".to_string())
                    }}
                </div>

                {move || {
                    let failures = state_for_failures.poll_failures.get();
                    if failures > 0 {
                        view! {
                            <span class="text-yellow-500">
                                {format!("{} failed polls", failures)}
                            </span>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
