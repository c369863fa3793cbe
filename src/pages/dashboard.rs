//! Dashboard Page
//!
//! Main view: stat tiles, ranked list, doughnut chart, event triggers.

use leptos::*;

use crate::components::{DoughnutChart, EventPanel, StatCard, TopElementsList};
use crate::state::store::DashboardState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let state_for_users = state.clone();
    let state_for_rate = state.clone();
    let state_for_engagement = state;

    view! {
        <div class="space-y-8">
            // Stats
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard
                    label="Active Users (5m)"
                    value=Signal::derive(move || {
                        state_for_users.active_users().to_string()
                    })
                />
                <StatCard
                    label="Events/Min"
                    value=Signal::derive(move || {
                        format!("{:.1}", state_for_rate.events_per_minute())
                    })
                />
                <StatCard
                    label="Avg Engagement"
                    value=Signal::derive(move || {
                        format!("{:.1}s", state_for_engagement.avg_engagement_seconds())
                    })
                />
            </div>

            // Ranked list + chart
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <section class="bg-gray-800 p-4 rounded-2xl shadow">
                    <h2 class="font-semibold mb-4 text-gray-200">
                        "Top Interactive Elements"
                    </h2>
                    <TopElementsList />
                </section>

                <section class="bg-gray-800 p-4 rounded-2xl shadow">
                    <h2 class="font-semibold mb-4 text-gray-200">
                        "Engagement Distribution"
                    </h2>
                    <DoughnutChart />
                </section>
            </div>

            // Synthetic event triggers
            <EventPanel />
        </div>
    }
}
