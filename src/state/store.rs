//! View-State Store
//!
//! Reactive state management using Leptos signals. The whole metrics
//! snapshot lives in a single signal, so a reader can never observe
//! fields from two different snapshots; the chart projection is a memo
//! derived from it and stays consistent by construction.

use leptos::*;

/// Chart colors assigned to ranked elements, cycled by index
pub const CHART_PALETTE: [&str; 5] = [
    "#10B981", // Emerald
    "#3B82F6", // Blue
    "#EF4444", // Red
    "#F59E0B", // Amber
    "#8B5CF6", // Violet
];

/// One complete set of engagement metrics from a successful poll
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct MetricsSnapshot {
    pub active_users: u64,
    #[serde(rename = "events_per_min")]
    pub events_per_minute: f64,
    #[serde(rename = "avg_duration")]
    pub avg_engagement_seconds: f64,
    pub top_elements: Vec<TopElement>,
}

/// A ranked interactive element. Rank order is supplied by the
/// collaborator and preserved verbatim.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct TopElement {
    pub element: String,
    pub count: u64,
}

/// Chart-ready projection of a snapshot's ranked elements
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartProjection {
    pub labels: Vec<String>,
    pub series: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl ChartProjection {
    /// Derive the doughnut series from a snapshot's ranked elements
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        let labels = snapshot
            .top_elements
            .iter()
            .map(|item| item.element.clone())
            .collect();
        let series = snapshot
            .top_elements
            .iter()
            .map(|item| item.count as f64)
            .collect();
        let colors = (0..snapshot.top_elements.len())
            .map(|idx| CHART_PALETTE[idx % CHART_PALETTE.len()])
            .collect();

        Self {
            labels,
            series,
            colors,
        }
    }
}

/// Dashboard view state provided to all components.
///
/// The poller is the only writer; views read through the accessors and
/// re-render when the snapshot signal changes.
#[derive(Clone)]
pub struct DashboardState {
    /// Latest accepted snapshot, replaced wholesale on every apply
    snapshot: RwSignal<MetricsSnapshot>,
    /// Chart series derived from the snapshot
    projection: Memo<ChartProjection>,
    /// Timestamp (ms) of the last applied snapshot, for the footer
    pub last_updated: RwSignal<Option<i64>>,
    /// Count of failed polls since mount, for the footer
    pub poll_failures: RwSignal<u32>,
}

impl DashboardState {
    pub fn new() -> Self {
        let snapshot = create_rw_signal(MetricsSnapshot::default());
        let projection = create_memo(move |_| snapshot.with(ChartProjection::from_snapshot));

        Self {
            snapshot,
            projection,
            last_updated: create_rw_signal(None),
            poll_failures: create_rw_signal(0),
        }
    }

    /// Replace the current snapshot. Single signal write, so dependent
    /// views re-render exactly once per call.
    pub fn apply(&self, snapshot: MetricsSnapshot) {
        self.snapshot.set(snapshot);
        self.last_updated
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }

    /// Note a failed poll on the diagnostic counter. The current
    /// snapshot is left untouched.
    pub fn record_poll_failure(&self) {
        self.poll_failures.update(|count| *count += 1);
    }

    pub fn active_users(&self) -> u64 {
        self.snapshot.with(|s| s.active_users)
    }

    pub fn events_per_minute(&self) -> f64 {
        self.snapshot.with(|s| s.events_per_minute)
    }

    pub fn avg_engagement_seconds(&self) -> f64 {
        self.snapshot.with(|s| s.avg_engagement_seconds)
    }

    pub fn top_elements(&self) -> Vec<TopElement> {
        self.snapshot.with(|s| s.top_elements.clone())
    }

    pub fn projection(&self) -> ChartProjection {
        self.projection.get()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the dashboard state to the component tree
pub fn provide_dashboard_state() {
    provide_context(DashboardState::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            active_users: 42,
            events_per_minute: 7.5,
            avg_engagement_seconds: 12.3,
            top_elements: vec![
                TopElement {
                    element: "video_player".to_string(),
                    count: 10,
                },
                TopElement {
                    element: "like_button".to_string(),
                    count: 5,
                },
            ],
        }
    }

    #[test]
    fn initial_state_is_empty() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        assert_eq!(state.active_users(), 0);
        assert_eq!(state.events_per_minute(), 0.0);
        assert_eq!(state.avg_engagement_seconds(), 0.0);
        assert!(state.top_elements().is_empty());

        let projection = state.projection();
        assert!(projection.labels.is_empty());
        assert!(projection.series.is_empty());
        assert!(projection.colors.is_empty());

        assert_eq!(state.last_updated.get_untracked(), None);
        assert_eq!(state.poll_failures.get_untracked(), 0);

        runtime.dispose();
    }

    #[test]
    fn apply_replaces_every_field() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        let first = MetricsSnapshot {
            active_users: 3,
            events_per_minute: 1.0,
            avg_engagement_seconds: 2.0,
            top_elements: vec![TopElement {
                element: "subscribe_button".to_string(),
                count: 1,
            }],
        };
        let second = sample_snapshot();

        state.apply(first);
        state.apply(second.clone());

        assert_eq!(state.active_users(), second.active_users);
        assert_eq!(state.events_per_minute(), second.events_per_minute);
        assert_eq!(
            state.avg_engagement_seconds(),
            second.avg_engagement_seconds
        );
        assert_eq!(state.top_elements(), second.top_elements);

        let projection = state.projection();
        assert_eq!(projection.labels, vec!["video_player", "like_button"]);
        assert_eq!(projection.series, vec![10.0, 5.0]);

        runtime.dispose();
    }

    #[test]
    fn projection_matches_ranked_elements() {
        let snapshot = sample_snapshot();
        let projection = ChartProjection::from_snapshot(&snapshot);

        assert_eq!(projection.labels.len(), snapshot.top_elements.len());
        assert_eq!(projection.series.len(), snapshot.top_elements.len());
        assert_eq!(projection.colors.len(), snapshot.top_elements.len());

        for (idx, item) in snapshot.top_elements.iter().enumerate() {
            assert_eq!(projection.labels[idx], item.element);
            assert_eq!(projection.series[idx], item.count as f64);
        }
    }

    #[test]
    fn palette_wraps_for_long_rankings() {
        let snapshot = MetricsSnapshot {
            top_elements: (0..7)
                .map(|i| TopElement {
                    element: format!("element_{}", i),
                    count: 7 - i,
                })
                .collect(),
            ..Default::default()
        };

        let projection = ChartProjection::from_snapshot(&snapshot);
        assert_eq!(projection.colors[0], CHART_PALETTE[0]);
        assert_eq!(projection.colors[5], CHART_PALETTE[0]);
        assert_eq!(projection.colors[6], CHART_PALETTE[1]);
    }

    #[test]
    fn decoded_body_flows_to_accessors() {
        let body = r#"{
            "active_users": 42,
            "events_per_min": 7.5,
            "avg_duration": 12.3,
            "top_elements": [
                {"element": "video_player", "count": 10},
                {"element": "like_button", "count": 5}
            ]
        }"#;

        let runtime = create_runtime();
        let state = DashboardState::new();

        let snapshot = crate::api::client::decode_snapshot(body).unwrap();
        state.apply(snapshot);

        assert_eq!(state.active_users(), 42);
        assert_eq!(state.events_per_minute(), 7.5);
        assert_eq!(state.avg_engagement_seconds(), 12.3);

        let projection = state.projection();
        assert_eq!(projection.labels, vec!["video_player", "like_button"]);
        assert_eq!(projection.series, vec![10.0, 5.0]);

        runtime.dispose();
    }
}
