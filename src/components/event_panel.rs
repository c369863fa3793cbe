//! Event Panel Component
//!
//! Buttons that emit synthetic interaction events for testing.

use leptos::*;

use crate::dispatch;

/// Panel of synthetic event triggers
#[component]
pub fn EventPanel() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-2xl shadow p-4">
            <h2 class="font-semibold mb-4 text-gray-200">"Send Test Event"</h2>
            <div class="flex flex-wrap gap-3">
                <TriggerButton
                    label="Play Video"
                    action="play"
                    element="video_player"
                    style="bg-emerald-600 hover:bg-emerald-500"
                />
                <TriggerButton
                    label="Pause Video"
                    action="pause"
                    element="video_player"
                    style="bg-yellow-600 hover:bg-yellow-500"
                />
                <TriggerButton
                    label="Subscribe"
                    action="click"
                    element="subscribe_button"
                    style="bg-emerald-500 hover:bg-emerald-400"
                />
                <TriggerButton
                    label="Like"
                    action="click"
                    element="like_button"
                    style="bg-red-600 hover:bg-red-500"
                />
            </div>
        </section>
    }
}

/// Single event trigger button
#[component]
fn TriggerButton(
    label: &'static str,
    action: &'static str,
    element: &'static str,
    style: &'static str,
) -> impl IntoView {
    let on_click = move |_| dispatch::send_test_event(action, element);

    view! {
        <button
            on:click=on_click
            class=format!(
                "{} text-white px-4 py-2 rounded-lg shadow transition-colors",
                style
            )
        >
            {label}
        </button>
    }
}
