//! Top Elements Component
//!
//! Ranked list of the most interacted-with elements, in the order the
//! collaborator supplied them.

use leptos::*;

use crate::state::store::DashboardState;

/// Ranked element list
#[component]
pub fn TopElementsList() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <ul class="divide-y divide-gray-700">
            {move || {
                let elements = state.top_elements();

                if elements.is_empty() {
                    view! {
                        <li class="py-2 text-gray-500 text-sm">
                            "No interactions recorded yet"
                        </li>
                    }.into_view()
                } else {
                    elements.into_iter().map(|item| {
                        view! {
                            <li class="py-2 flex justify-between text-gray-300">
                                <span class="font-medium">{item.element}</span>
                                <span class="text-gray-500">
                                    {format!("{} interactions", item.count)}
                                </span>
                            </li>
                        }
                    }).collect_view()
                }
            }}
        </ul>
    }
}
