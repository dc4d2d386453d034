use super::types::{
    Action, Actuator, HeadingMode, InterpolationMode, MissionSettings, Target, Trigger, Waypoint,
};
use crate::geodesy::{heading, normalize_heading, pitch};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Which rule produced a waypoint's heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeadingSource {
    Auto,
    Poi,
    WaypointSpecific,
    Fallback,
    Initial,
    InitialDirection,
    RemoteControl,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverrideAxis {
    Yaw,
    Pitch,
}

/// A rotation requested by a `reachPoint` action at this waypoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActuatorOverride {
    pub action_id: String,
    pub axis: OverrideAxis,
    pub value: f64,
    pub interpolation_mode: InterpolationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedWaypoint {
    #[serde(flatten)]
    pub waypoint: Waypoint,
    pub heading: f64,
    pub pitch: f64,
    pub heading_source: HeadingSource,
    pub actuator_overrides: Vec<ActuatorOverride>,
}

/// Resolves heading and pitch for every waypoint under `settings.heading_mode`.
///
/// The last waypoint has nothing ahead to bear toward; wherever a rule needs
/// the next waypoint it holds the previous waypoint's heading instead (0 for a
/// single-waypoint mission) and reports zero pitch.
pub fn resolve_headings(
    waypoints: &[Waypoint],
    targets: &[Target],
    settings: &MissionSettings,
    actions: &[Action],
) -> Vec<AnnotatedWaypoint> {
    let targets_by_id: HashMap<&str, &Target> = targets
        .iter()
        .map(|target| (target.id.as_str(), target))
        .collect();
    let initial_direction = match waypoints {
        [first, second, ..] => heading(first.point(), second.point()),
        _ => 0.0,
    };

    let mut resolved: Vec<AnnotatedWaypoint> = Vec::with_capacity(waypoints.len());
    for (index, waypoint) in waypoints.iter().enumerate() {
        let previous = resolved.last().map_or(0.0, |wp| wp.heading);
        let ahead = toward_next(waypoints, index, previous);

        let (heading, pitch, heading_source) = match settings.heading_mode {
            HeadingMode::Auto => (ahead.heading, ahead.pitch, HeadingSource::Auto),
            HeadingMode::UsingInitialDirection => {
                let source = if index == 0 {
                    HeadingSource::Initial
                } else {
                    HeadingSource::InitialDirection
                };
                (initial_direction, ahead.pitch, source)
            }
            HeadingMode::ControlByRemoteController => {
                (0.0, ahead.pitch, HeadingSource::RemoteControl)
            }
            HeadingMode::UsingWaypointHeading => match waypoint.waypoint_heading {
                Some(explicit) => (
                    normalize_heading(explicit),
                    ahead.pitch,
                    HeadingSource::WaypointSpecific,
                ),
                None => {
                    debug!(waypoint = %waypoint.id, "no waypoint heading set, using next-waypoint bearing");
                    (ahead.heading, ahead.pitch, HeadingSource::Fallback)
                }
            },
            HeadingMode::TowardPointOfInterest => {
                match focus_target(waypoint, &targets_by_id) {
                    Some(target) => (
                        heading(waypoint.point(), target.point()),
                        pitch(waypoint.point(), target.point()),
                        HeadingSource::Poi,
                    ),
                    None => (ahead.heading, ahead.pitch, HeadingSource::Fallback),
                }
            }
        };

        resolved.push(AnnotatedWaypoint {
            waypoint: waypoint.clone(),
            heading,
            pitch,
            heading_source,
            actuator_overrides: reach_point_overrides(&waypoint.id, actions),
        });
    }

    resolved
}

struct Bearing {
    heading: f64,
    pitch: f64,
}

fn toward_next(waypoints: &[Waypoint], index: usize, previous: f64) -> Bearing {
    match (waypoints.get(index), waypoints.get(index + 1)) {
        (Some(current), Some(next)) => Bearing {
            heading: heading(current.point(), next.point()),
            pitch: pitch(current.point(), next.point()),
        },
        _ => Bearing {
            heading: previous,
            pitch: 0.0,
        },
    }
}

fn focus_target<'a>(
    waypoint: &Waypoint,
    targets_by_id: &HashMap<&str, &'a Target>,
) -> Option<&'a Target> {
    let target_id = waypoint.focus_target_id.as_deref()?;
    let target = targets_by_id.get(target_id).copied();
    if target.is_none() {
        warn!(
            waypoint = %waypoint.id,
            target_id,
            "focus target not found, using next-waypoint bearing"
        );
    }
    target
}

fn reach_point_overrides(waypoint_id: &str, actions: &[Action]) -> Vec<ActuatorOverride> {
    actions
        .iter()
        .filter(|action| {
            matches!(&action.trigger, Trigger::ReachPoint { waypoint_id: id } if id == waypoint_id)
        })
        .filter_map(|action| {
            let (axis, value) = match action.actuator {
                Actuator::RotateAircraft { yaw } => (OverrideAxis::Yaw, normalize_heading(yaw)),
                Actuator::RotateGimbal { pitch } => (OverrideAxis::Pitch, pitch),
                _ => return None,
            };
            Some(ActuatorOverride {
                action_id: action.id.clone(),
                axis,
                value,
                interpolation_mode: action.interpolation_mode,
            })
        })
        .collect()
}
