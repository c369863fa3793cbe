//! Metrics Poller
//!
//! Periodic fetch of the engagement snapshot on a fixed cadence. The
//! poller owns its interval handle (dropping it cancels the timer) and a
//! generation counter: every in-flight poll carries the generation it was
//! issued under, and a result whose generation no longer matches is
//! discarded, so nothing reaches the store after `stop()` returns.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;

use super::store::{DashboardState, MetricsSnapshot};
use crate::api;

/// Fixed poll cadence. Failures do not change it.
pub const POLL_INTERVAL_MS: u32 = 3_000;

/// Periodic poller feeding the view-state store
pub struct MetricsPoller {
    state: DashboardState,
    generation: Rc<Cell<u64>>,
    interval: Option<Interval>,
}

impl MetricsPoller {
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            generation: Rc::new(Cell::new(0)),
            interval: None,
        }
    }

    /// Begin polling: one immediate poll, then every [`POLL_INTERVAL_MS`].
    /// Idempotent, so a second call never creates a duplicate timer.
    pub fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }

        poll_once(self.state.clone(), Rc::clone(&self.generation));

        let state = self.state.clone();
        let generation = Rc::clone(&self.generation);
        self.interval = Some(Interval::new(POLL_INTERVAL_MS, move || {
            poll_once(state.clone(), Rc::clone(&generation));
        }));
    }

    /// Cancel the timer and invalidate every in-flight poll. No result
    /// issued before this call can reach the store afterwards.
    pub fn stop(&mut self) {
        self.interval = None;
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl Drop for MetricsPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Issue a single poll and publish the result if the poller has not been
/// stopped in the meantime. Failures keep the previous snapshot and only
/// touch the diagnostic channel.
fn poll_once(state: DashboardState, generation: Rc<Cell<u64>>) {
    let token = generation.get();

    spawn_local(async move {
        match api::fetch_engagement_metrics().await {
            Ok(snapshot) => {
                if !apply_if_current(&generation, token, &state, snapshot) {
                    web_sys::console::log_1(
                        &"Discarding poll result that resolved after stop".into(),
                    );
                }
            }
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("Metrics poll failed: {} (keeping last snapshot)", err).into(),
                );
                if generation.get() == token {
                    state.record_poll_failure();
                }
            }
        }
    });
}

/// Publish a snapshot only if the poll that produced it was issued under
/// the current generation.
fn apply_if_current(
    generation: &Cell<u64>,
    token: u64,
    state: &DashboardState,
    snapshot: MetricsSnapshot,
) -> bool {
    if generation.get() != token {
        return false;
    }
    state.apply(snapshot);
    true
}
