use super::types::{MissionSettings, Waypoint};
use crate::geodesy::distance;
use serde::{Deserialize, Serialize};

/// Arrival schedule for one waypoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub waypoint_id: String,
    /// Distance flown before arriving here, meters.
    pub distance: f64,
    /// Time elapsed before arriving here, seconds.
    pub time: f64,
    /// Speed flown on the segment leaving this waypoint, m/s.
    pub speed: f64,
    pub segment_distance: f64,
    pub segment_time: f64,
}

/// Index-aligned with the waypoint list it was built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_duration(&self) -> f64 {
        self.entries.last().map_or(0.0, |entry| entry.time)
    }

    pub fn total_distance(&self) -> f64 {
        self.entries.last().map_or(0.0, |entry| entry.distance)
    }

    /// Position of the first entry for `waypoint_id`.
    pub fn index_of(&self, waypoint_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.waypoint_id == waypoint_id)
    }

    pub fn entry_for(&self, waypoint_id: &str) -> Option<&TimelineEntry> {
        self.index_of(waypoint_id).map(|index| &self.entries[index])
    }

    /// Index of the segment being flown at `timestamp`: the last waypoint
    /// already reached. Timestamps before the start map to the first
    /// waypoint, timestamps past the end to the last.
    pub fn segment_index_at(&self, timestamp: f64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let reached = self.entries.partition_point(|entry| entry.time <= timestamp);
        Some(reached.saturating_sub(1))
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds the cumulative distance/time schedule for `waypoints`.
///
/// Each segment is flown at the speed of the waypoint it starts from, or at
/// the mission's auto flight speed when the waypoint has none. Speeds are not
/// checked here; a segment whose time comes out negative or non-finite counts
/// as zero seconds so the schedule stays monotonic.
pub fn build_timeline(waypoints: &[Waypoint], settings: &MissionSettings) -> Timeline {
    let mut entries = Vec::with_capacity(waypoints.len());
    let mut distance_so_far = 0.0;
    let mut time_so_far = 0.0;

    for (index, waypoint) in waypoints.iter().enumerate() {
        let speed = waypoint.speed.unwrap_or(settings.auto_flight_speed);
        let (segment_distance, segment_time) = match waypoints.get(index + 1) {
            Some(next) => {
                let meters = distance(waypoint.point(), next.point());
                (meters, segment_seconds(meters, speed))
            }
            None => (0.0, 0.0),
        };

        entries.push(TimelineEntry {
            waypoint_id: waypoint.id.clone(),
            distance: distance_so_far,
            time: time_so_far,
            speed,
            segment_distance,
            segment_time,
        });

        distance_so_far += segment_distance;
        time_so_far += segment_time;
    }

    Timeline { entries }
}

fn segment_seconds(meters: f64, speed: f64) -> f64 {
    let seconds = meters / speed;
    if seconds.is_finite() && seconds >= 0.0 {
        seconds
    } else {
        tracing::trace!(meters, speed, "segment time not representable, counting as zero");
        0.0
    }
}
