//! Stat Card Component
//!
//! Single numeric summary tile.

use leptos::*;

/// Stat tile showing one formatted metric value
#[component]
pub fn StatCard(
    /// Tile heading
    label: &'static str,
    /// Formatted value, re-rendered when the store changes
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 p-4 rounded-2xl shadow-lg border-l-4 border-emerald-500">
            <h3 class="font-medium text-gray-400">{label}</h3>
            <p class="text-4xl font-bold text-emerald-400">{move || value.get()}</p>
        </div>
    }
}
