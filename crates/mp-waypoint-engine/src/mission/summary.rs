use super::timeline::Timeline;
use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};

/// Headline numbers shown next to a mission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MissionSummary {
    pub total_waypoints: usize,
    pub total_distance_m: f64,
    /// Time spent moving between waypoints.
    pub flight_time_s: f64,
    /// Flight time plus the hover at each waypoint.
    pub estimated_duration_s: f64,
}

impl MissionSummary {
    pub fn from_timeline(timeline: &Timeline, config: &EngineConfig) -> Self {
        let total_waypoints = timeline.len();
        let flight_time_s = timeline.total_duration();
        // A lone waypoint is not a flight.
        let estimated_duration_s = if total_waypoints >= 2 {
            flight_time_s + total_waypoints as f64 * config.hover_time_per_waypoint_s
        } else {
            0.0
        };

        Self {
            total_waypoints,
            total_distance_m: timeline.total_distance(),
            flight_time_s,
            estimated_duration_s,
        }
    }

    pub fn formatted_duration(&self) -> String {
        format_duration(self.estimated_duration_s)
    }
}

/// Compact human-readable duration: `42s`, `3m 5s`, `1h 2m`.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).round() as u64
    } else {
        0
    };

    if total < 60 {
        return format!("{total}s");
    }
    if total < 3600 {
        return format!("{}m {}s", total / 60, total % 60);
    }
    format!("{}h {}m", total / 3600, (total % 3600) / 60)
}
