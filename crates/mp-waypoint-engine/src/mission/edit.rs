//! Edits that keep the id-based links between waypoints, targets and actions
//! consistent. The engine itself never mutates mission state; these helpers
//! are for the caller's edit path, followed by a fresh recompute.

use super::types::{Action, Target, Waypoint};
use crate::error::EngineError;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct RemovedWaypoint {
    pub waypoint: Waypoint,
    pub position: usize,
    /// Actions that were bound to the removed waypoint.
    pub dropped_actions: Vec<Action>,
}

/// Points exactly the `selected` waypoints at `target_id`.
///
/// Waypoints that were aimed at the target but are no longer selected lose
/// their focus; other assignments are left alone. Returns the number of
/// waypoints whose focus changed.
pub fn assign_target(waypoints: &mut [Waypoint], target_id: &str, selected: &[&str]) -> usize {
    let selected: HashSet<&str> = selected.iter().copied().collect();
    let mut changed = 0;

    for waypoint in waypoints.iter_mut() {
        let focus = if selected.contains(waypoint.id.as_str()) {
            Some(target_id.to_string())
        } else if waypoint.focus_target_id.as_deref() == Some(target_id) {
            None
        } else {
            continue;
        };
        if waypoint.focus_target_id != focus {
            waypoint.focus_target_id = focus;
            changed += 1;
        }
    }

    changed
}

/// Removes a target and repoints every waypoint that focused on it.
///
/// With `reassign_to` naming another existing target, those waypoints switch
/// to it; otherwise their focus is cleared.
pub fn remove_target(
    targets: &mut Vec<Target>,
    waypoints: &mut [Waypoint],
    target_id: &str,
    reassign_to: Option<&str>,
) -> Result<Target, EngineError> {
    let position = targets
        .iter()
        .position(|target| target.id == target_id)
        .ok_or_else(|| EngineError::UnknownTarget(target_id.to_string()))?;

    let replacement = match reassign_to {
        Some(id) if id == target_id => return Err(EngineError::UnknownTarget(id.to_string())),
        Some(id) if targets.iter().any(|target| target.id == id) => Some(id.to_string()),
        Some(id) => return Err(EngineError::UnknownTarget(id.to_string())),
        None => None,
    };

    let removed = targets.remove(position);
    let mut repointed = 0;
    for waypoint in waypoints
        .iter_mut()
        .filter(|wp| wp.focus_target_id.as_deref() == Some(target_id))
    {
        waypoint.focus_target_id = replacement.clone();
        repointed += 1;
    }
    debug!(target_id, repointed, "target removed");

    Ok(removed)
}

/// Removes a waypoint together with every action bound to it.
pub fn remove_waypoint(
    waypoints: &mut Vec<Waypoint>,
    actions: &mut Vec<Action>,
    waypoint_id: &str,
) -> Result<RemovedWaypoint, EngineError> {
    let position = waypoints
        .iter()
        .position(|wp| wp.id == waypoint_id)
        .ok_or_else(|| EngineError::UnknownWaypoint(waypoint_id.to_string()))?;
    let waypoint = waypoints.remove(position);

    let (dropped_actions, kept): (Vec<Action>, Vec<Action>) = actions
        .drain(..)
        .partition(|action| action.trigger.waypoint_id() == Some(waypoint_id));
    *actions = kept;

    if !dropped_actions.is_empty() {
        debug!(
            waypoint = waypoint_id,
            dropped = dropped_actions.len(),
            "dropped actions bound to removed waypoint"
        );
    }

    Ok(RemovedWaypoint {
        waypoint,
        position,
        dropped_actions,
    })
}

/// Moves the waypoint at `from` to position `to`. Actions follow their
/// waypoint because they refer to it by id.
pub fn move_waypoint(waypoints: &mut Vec<Waypoint>, from: usize, to: usize) -> Result<(), EngineError> {
    let len = waypoints.len();
    for index in [from, to] {
        if index >= len {
            return Err(EngineError::PositionOutOfRange { index, len });
        }
    }
    let waypoint = waypoints.remove(from);
    waypoints.insert(to, waypoint);
    Ok(())
}

/// Rejects missions where two waypoints, two targets or two actions share an id.
pub fn check_unique_ids(
    waypoints: &[Waypoint],
    targets: &[Target],
    actions: &[Action],
) -> Result<(), EngineError> {
    fn first_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
        let mut seen = HashSet::new();
        ids.find(|id| !seen.insert(*id))
    }

    let duplicate = first_duplicate(waypoints.iter().map(|wp| wp.id.as_str()))
        .or_else(|| first_duplicate(targets.iter().map(|target| target.id.as_str())))
        .or_else(|| first_duplicate(actions.iter().map(|action| action.id.as_str())));

    match duplicate {
        Some(id) => Err(EngineError::DuplicateId(id.to_string())),
        None => Ok(()),
    }
}
