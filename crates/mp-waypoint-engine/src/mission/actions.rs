use super::heading::AnnotatedWaypoint;
use super::timeline::Timeline;
use super::types::{Action, Actuator, InterpolationMode, Trigger};
use crate::config::EngineConfig;
use crate::geodesy::{interpolate_heading, normalize_heading};

/// Mission time at which `action` starts, in seconds.
///
/// `None` when the action is bound to a waypoint that is not part of the
/// timeline.
pub fn actuator_start_time(action: &Action, timeline: &Timeline) -> Option<f64> {
    match &action.trigger {
        Trigger::ReachPoint { waypoint_id } => timeline.entry_for(waypoint_id).map(|e| e.time),
        Trigger::DistanceToPoint {
            waypoint_id,
            distance_offset,
        } => timeline.entry_for(waypoint_id).map(|entry| {
            let shift = distance_offset / entry.speed;
            if shift.is_finite() {
                entry.time + shift
            } else {
                entry.time
            }
        }),
        Trigger::TimeBased { time_ms } => Some(*time_ms as f64 / 1000.0),
        Trigger::Trajectory { mission_percent } => {
            Some(mission_percent / 100.0 * timeline.total_duration())
        }
    }
}

/// Whether `action` is firing at `timestamp` seconds into the mission.
pub fn is_active(
    timestamp: f64,
    action: &Action,
    timeline: &Timeline,
    config: &EngineConfig,
) -> bool {
    match &action.trigger {
        Trigger::ReachPoint { .. } | Trigger::DistanceToPoint { .. } => {
            actuator_start_time(action, timeline)
                .is_some_and(|start| (timestamp - start).abs() < config.trigger_tolerance_s)
        }
        Trigger::TimeBased { time_ms } => {
            let start = *time_ms as f64 / 1000.0;
            timestamp >= start && timestamp < start + config.time_trigger_window_s
        }
        Trigger::Trajectory { mission_percent } => {
            let progress = progress_percent(timestamp, timeline.total_duration());
            (progress - mission_percent).abs() < config.trajectory_tolerance_pct
        }
    }
}

pub fn active_actuators_at<'a>(
    timestamp: f64,
    actions: &'a [Action],
    timeline: &Timeline,
    config: &EngineConfig,
) -> Vec<&'a Action> {
    actions
        .iter()
        .filter(|action| is_active(timestamp, action, timeline, config))
        .collect()
}

/// Aircraft heading at `timestamp`.
///
/// Starts from the resolved heading of the waypoint last reached. An active
/// `rotateAircraft` action replaces it: `none` snaps to the requested yaw,
/// `linear` turns toward it along the shorter arc over
/// `config.rotation_ramp_s` seconds from the action's start time. When several
/// rotations are active the one that started last wins.
///
/// A rotation only steers while its trigger is active. Waypoint-bound
/// triggers are active for `config.trigger_tolerance_s` around their start,
/// so a linear turn bound to a waypoint covers only that share of the ramp
/// before the heading returns to the waypoint's resolved heading.
pub fn heading_at(
    timestamp: f64,
    waypoints: &[AnnotatedWaypoint],
    timeline: &Timeline,
    actions: &[Action],
    config: &EngineConfig,
) -> f64 {
    let Some(index) = timeline.segment_index_at(timestamp) else {
        return 0.0;
    };
    let base = waypoints.get(index).map_or(0.0, |wp| wp.heading);

    let rotation = actions
        .iter()
        .filter_map(|action| match action.actuator {
            Actuator::RotateAircraft { yaw } if is_active(timestamp, action, timeline, config) => {
                let start = actuator_start_time(action, timeline).unwrap_or(timestamp);
                Some((start, yaw, action.interpolation_mode))
            }
            _ => None,
        })
        .max_by(|a, b| a.0.total_cmp(&b.0));

    match rotation {
        None => base,
        Some((_, yaw, InterpolationMode::None)) => normalize_heading(yaw),
        Some((start, yaw, InterpolationMode::Linear)) => {
            let fraction = if config.rotation_ramp_s > 0.0 {
                (timestamp - start) / config.rotation_ramp_s
            } else {
                1.0
            };
            interpolate_heading(base, yaw, fraction)
        }
    }
}

/// Share of the mission flown at `timestamp`, in percent. Not clamped.
pub(crate) fn progress_percent(timestamp: f64, total_duration: f64) -> f64 {
    if total_duration > 0.0 {
        100.0 * timestamp / total_duration
    } else {
        0.0
    }
}
