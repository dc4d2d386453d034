use super::actions::{self, progress_percent};
use super::heading::{resolve_headings, AnnotatedWaypoint};
use super::timeline::{build_timeline, Timeline};
use super::types::{Action, MissionSettings, Target, Waypoint};
use crate::config::EngineConfig;
use serde::Serialize;
use tracing::trace;

/// Everything derived from one snapshot of mission inputs.
///
/// Built fresh by [`recalculate_headings`] whenever any input changes; never
/// updated in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionComputation {
    pub waypoints: Vec<AnnotatedWaypoint>,
    pub timeline: Timeline,
    #[serde(skip)]
    actions: Vec<Action>,
    #[serde(skip)]
    config: EngineConfig,
}

impl MissionComputation {
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn total_duration(&self) -> f64 {
        self.timeline.total_duration()
    }

    pub fn heading_at(&self, timestamp: f64) -> f64 {
        actions::heading_at(
            timestamp,
            &self.waypoints,
            &self.timeline,
            &self.actions,
            &self.config,
        )
    }

    pub fn active_actuators_at(&self, timestamp: f64) -> Vec<&Action> {
        actions::active_actuators_at(timestamp, &self.actions, &self.timeline, &self.config)
    }

    /// Mission progress in percent, clamped to [0, 100].
    pub fn mission_progress_at(&self, timestamp: f64) -> f64 {
        let progress = progress_percent(timestamp, self.timeline.total_duration());
        if progress.is_finite() {
            progress.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// The waypoint most recently reached at `timestamp`.
    pub fn waypoint_at(&self, timestamp: f64) -> Option<&AnnotatedWaypoint> {
        self.timeline
            .segment_index_at(timestamp)
            .and_then(|index| self.waypoints.get(index))
    }

    pub fn actuator_start_time(&self, action: &Action) -> Option<f64> {
        actions::actuator_start_time(action, &self.timeline)
    }
}

pub fn recalculate_headings(
    waypoints: &[Waypoint],
    targets: &[Target],
    settings: &MissionSettings,
    actions: &[Action],
) -> MissionComputation {
    recalculate_headings_with_config(waypoints, targets, settings, actions, &EngineConfig::default())
}

pub fn recalculate_headings_with_config(
    waypoints: &[Waypoint],
    targets: &[Target],
    settings: &MissionSettings,
    actions: &[Action],
    config: &EngineConfig,
) -> MissionComputation {
    trace!(
        waypoints = waypoints.len(),
        targets = targets.len(),
        actions = actions.len(),
        heading_mode = ?settings.heading_mode,
        "recomputing mission"
    );

    let timeline = build_timeline(waypoints, settings);
    let annotated = resolve_headings(waypoints, targets, settings, actions);

    MissionComputation {
        waypoints: annotated,
        timeline,
        actions: actions.to_vec(),
        config: *config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::types::{Actuator, HeadingMode, Trigger};
    use approx::assert_abs_diff_eq;

    fn mission() -> (Vec<Waypoint>, Vec<Action>) {
        let waypoints = vec![
            Waypoint::new("a", 0.0, 0.0),
            Waypoint::new("b", 0.0, 0.001),
            Waypoint::new("c", 0.001, 0.001),
        ];
        let actions = vec![Action::new(
            "photo",
            Trigger::ReachPoint {
                waypoint_id: "b".to_string(),
            },
            Actuator::TakePhoto,
        )];
        (waypoints, actions)
    }

    #[test]
    fn computation_is_index_aligned() {
        let (waypoints, actions) = mission();
        let computed =
            recalculate_headings(&waypoints, &[], &MissionSettings::default(), &actions);

        assert_eq!(computed.waypoints.len(), 3);
        assert_eq!(computed.timeline.len(), 3);
        for (annotated, entry) in computed.waypoints.iter().zip(&computed.timeline) {
            assert_eq!(annotated.waypoint.id, entry.waypoint_id);
        }
    }

    #[test]
    fn timestamp_queries_agree_with_timeline() {
        let (waypoints, actions) = mission();
        let computed =
            recalculate_headings(&waypoints, &[], &MissionSettings::default(), &actions);
        let arrival = computed.timeline.entries()[1].time;

        assert_eq!(computed.waypoint_at(arrival).unwrap().waypoint.id, "b");
        assert_eq!(computed.waypoint_at(0.0).unwrap().waypoint.id, "a");
        assert_eq!(computed.active_actuators_at(arrival).len(), 1);
        assert!(computed.active_actuators_at(0.0).is_empty());
        assert_abs_diff_eq!(computed.heading_at(arrival + 0.5), 0.0, epsilon = 1e-6);
        assert_eq!(computed.actuator_start_time(&actions[0]), Some(arrival));
    }

    #[test]
    fn progress_is_clamped() {
        let (waypoints, actions) = mission();
        let computed =
            recalculate_headings(&waypoints, &[], &MissionSettings::default(), &actions);
        let total = computed.total_duration();

        assert_eq!(computed.mission_progress_at(-5.0), 0.0);
        assert_abs_diff_eq!(computed.mission_progress_at(total / 2.0), 50.0, epsilon = 1e-9);
        assert_eq!(computed.mission_progress_at(total * 3.0), 100.0);
    }

    #[test]
    fn empty_mission_degrades_gracefully() {
        let settings = MissionSettings {
            heading_mode: HeadingMode::TowardPointOfInterest,
            ..MissionSettings::default()
        };
        let computed = recalculate_headings(&[], &[], &settings, &[]);

        assert!(computed.waypoints.is_empty());
        assert!(computed.timeline.is_empty());
        assert_eq!(computed.heading_at(3.0), 0.0);
        assert_eq!(computed.mission_progress_at(3.0), 0.0);
        assert!(computed.waypoint_at(3.0).is_none());
    }
}
