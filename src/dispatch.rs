//! Event Dispatcher
//!
//! Builds synthetic interaction events from operator-triggered UI actions
//! and fire-and-forgets them to the collaborator's write endpoint. The
//! send never blocks the caller and its outcome never reaches the UI.

use wasm_bindgen_futures::spawn_local;

use crate::api;

/// Synthetic user IDs are drawn uniformly from `0..USER_ID_SPACE`
pub const USER_ID_SPACE: u32 = 1_000;

/// Bounds for the sampled `play` duration. The lower bound keeps the
/// duration strictly positive, as the write contract requires for `play`.
pub const PLAY_DURATION_MIN_SECS: f64 = 0.5;
pub const PLAY_DURATION_MAX_SECS: f64 = 10.0;

/// A synthetic interaction event, serialized straight onto the wire
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InteractionEvent {
    pub user_id: String,
    pub action: String,
    pub element: String,
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
}

impl InteractionEvent {
    /// Build an event with a freshly sampled user ID and duration
    pub fn synthesize(action: &str, element: &str) -> Self {
        Self::from_rolls(
            action,
            element,
            js_sys::Math::random(),
            js_sys::Math::random(),
        )
    }

    /// Build an event from explicit unit-interval rolls. `id_roll` picks
    /// the synthetic user, `duration_roll` the play duration.
    pub fn from_rolls(action: &str, element: &str, id_roll: f64, duration_roll: f64) -> Self {
        let user_id = format!("user_{}", (id_roll * f64::from(USER_ID_SPACE)) as u32);
        let duration_seconds = if action == "play" {
            PLAY_DURATION_MIN_SECS
                + duration_roll * (PLAY_DURATION_MAX_SECS - PLAY_DURATION_MIN_SECS)
        } else {
            0.0
        };

        Self {
            user_id,
            action: action.to_string(),
            element: element.to_string(),
            duration_seconds,
        }
    }
}

/// Dispatch a synthetic event for the given action and element.
///
/// Fire and forget: the send is spawned on the event loop and the caller
/// returns immediately. A failed send is logged to the console and
/// otherwise discarded; it has no effect on subsequent dispatches.
pub fn send_test_event(action: &str, element: &str) {
    let event = InteractionEvent::synthesize(action, element);

    spawn_local(async move {
        if let Err(err) = api::send_interaction_event(&event).await {
            web_sys::console::warn_1(
                &format!(
                    "Event dispatch failed ({} on {}): {}",
                    event.action, event.element, err
                )
                .into(),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_duration_is_positive_and_bounded() {
        let low = InteractionEvent::from_rolls("play", "video_player", 0.5, 0.0);
        let high = InteractionEvent::from_rolls("play", "video_player", 0.5, 1.0);
        let mid = InteractionEvent::from_rolls("play", "video_player", 0.5, 0.42);

        assert_eq!(low.duration_seconds, PLAY_DURATION_MIN_SECS);
        assert_eq!(high.duration_seconds, PLAY_DURATION_MAX_SECS);
        for event in [low, high, mid] {
            assert!(event.duration_seconds > 0.0);
            assert!(event.duration_seconds >= PLAY_DURATION_MIN_SECS);
            assert!(event.duration_seconds <= PLAY_DURATION_MAX_SECS);
            assert_eq!(event.action, "play");
            assert_eq!(event.element, "video_player");
        }
    }

    #[test]
    fn non_play_actions_have_zero_duration() {
        let pause = InteractionEvent::from_rolls("pause", "video_player", 0.5, 0.9);
        let click = InteractionEvent::from_rolls("click", "like_button", 0.5, 0.9);

        assert_eq!(pause.duration_seconds, 0.0);
        assert_eq!(click.duration_seconds, 0.0);
        assert_eq!(click.action, "click");
        assert_eq!(click.element, "like_button");
    }

    #[test]
    fn user_id_stays_in_id_space() {
        let first = InteractionEvent::from_rolls("click", "subscribe_button", 0.0, 0.0);
        let last = InteractionEvent::from_rolls("click", "subscribe_button", 0.9999, 0.0);

        assert_eq!(first.user_id, "user_0");
        assert_eq!(last.user_id, "user_999");
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let event = InteractionEvent::from_rolls("play", "video_player", 0.25, 0.5);
        let value = serde_json::to_value(&event).unwrap();

        assert!(value.get("user_id").is_some());
        assert!(value.get("action").is_some());
        assert!(value.get("element").is_some());
        assert!(value.get("duration").is_some());
        assert!(value.get("duration_seconds").is_none());
    }
}
