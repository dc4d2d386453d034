use super::types::{
    Action, Actuator, ActuatorKind, FlightPathMode, HeadingMode, IssueSeverity, MissionIssue,
    MissionSettings, Target, Trigger, Waypoint,
};
use crate::config::{EngineConfig, ValidationLimits};
use crate::geodesy::distance;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub can_upload: bool,
    pub requires_attention: bool,
    pub issues: Vec<MissionIssue>,
}

impl ValidationReport {
    pub fn from_issues(issues: Vec<MissionIssue>) -> Self {
        let has_errors = issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::Error);
        let has_warnings = issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::Warning);
        Self {
            is_valid: !has_errors,
            can_upload: !has_errors,
            requires_attention: has_warnings,
            issues,
        }
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages(IssueSeverity::Error)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages(IssueSeverity::Warning)
    }

    fn messages(&self, severity: IssueSeverity) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .map(|issue| issue.message.as_str())
            .collect()
    }
}

/// Checks a mission against DJI Waypoint V2 upload constraints.
pub fn validate_mission_upload(
    settings: &MissionSettings,
    targets: &[Target],
    waypoints: &[Waypoint],
    actions: &[Action],
) -> ValidationReport {
    validate_mission_upload_with_config(
        settings,
        targets,
        waypoints,
        actions,
        &EngineConfig::default(),
    )
}

pub fn validate_mission_upload_with_config(
    settings: &MissionSettings,
    targets: &[Target],
    waypoints: &[Waypoint],
    actions: &[Action],
    config: &EngineConfig,
) -> ValidationReport {
    let limits = &config.limits;
    let mut issues = Vec::new();

    issues.extend(validate_poi_requirements(settings, targets, waypoints));
    issues.extend(validate_unique_ids(waypoints, targets, actions));
    issues.extend(validate_action_references(waypoints, actions));
    issues.extend(validate_actuator_parameters(actions, limits));
    issues.extend(detect_actuator_conflicts(actions));
    issues.extend(validate_corner_radius_constraints(waypoints, settings, limits));

    if waypoints.len() < 2 {
        issues.push(MissionIssue::error(
            "plan.too_few_waypoints",
            "Mission requires at least 2 waypoints",
            None,
        ));
    }

    for (index, pair) in waypoints.windows(2).enumerate() {
        let spacing = distance(pair[0].point(), pair[1].point());
        if spacing < limits.min_waypoint_spacing_m {
            issues.push(MissionIssue::warning(
                "plan.waypoints_too_close",
                format!(
                    "Waypoints {} and {} are very close ({spacing:.2}m)",
                    index + 1,
                    index + 2
                ),
                Some(index),
            ));
        }
    }

    issues.extend(validate_speeds(settings));

    ValidationReport::from_issues(issues)
}

pub fn validate_speeds(settings: &MissionSettings) -> Vec<MissionIssue> {
    let mut issues = Vec::new();
    if settings.auto_flight_speed <= 0.0 {
        issues.push(MissionIssue::error(
            "settings.auto_speed_not_positive",
            "Auto flight speed must be greater than 0",
            None,
        ));
    }
    if settings.max_flight_speed <= 0.0 {
        issues.push(MissionIssue::error(
            "settings.max_speed_not_positive",
            "Max flight speed must be greater than 0",
            None,
        ));
    }
    if settings.auto_flight_speed > settings.max_flight_speed {
        issues.push(MissionIssue::error(
            "settings.auto_speed_exceeds_max",
            "Auto flight speed cannot exceed max flight speed",
            None,
        ));
    }
    issues
}

/// POI heading mode needs targets and at least one waypoint aimed at one.
pub fn validate_poi_requirements(
    settings: &MissionSettings,
    targets: &[Target],
    waypoints: &[Waypoint],
) -> Vec<MissionIssue> {
    let mut issues = Vec::new();
    if settings.heading_mode != HeadingMode::TowardPointOfInterest {
        return issues;
    }

    let assigned: BTreeSet<&str> = waypoints
        .iter()
        .filter_map(|wp| wp.focus_target_id.as_deref())
        .collect();
    if assigned.is_empty() {
        issues.push(MissionIssue::error(
            "poi.no_assigned_waypoints",
            "POI heading mode requires at least one waypoint to be assigned a target",
            None,
        ));
    }

    let known: HashSet<&str> = targets.iter().map(|target| target.id.as_str()).collect();
    let missing: Vec<&str> = assigned
        .into_iter()
        .filter(|id| !known.contains(id))
        .collect();
    if !missing.is_empty() {
        issues.push(MissionIssue::error(
            "poi.unknown_targets",
            format!(
                "Waypoints reference non-existent targets: {}",
                missing.join(", ")
            ),
            None,
        ));
    }

    if targets.is_empty() {
        issues.push(MissionIssue::error(
            "poi.no_targets",
            "No targets available for POI mode. Please add targets first.",
            None,
        ));
    }

    issues
}

/// Actions and focus assignments refer to waypoints and targets by id, so
/// every id must name exactly one item of its kind.
pub fn validate_unique_ids(
    waypoints: &[Waypoint],
    targets: &[Target],
    actions: &[Action],
) -> Vec<MissionIssue> {
    fn duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> BTreeSet<&'a str> {
        let mut seen = HashSet::new();
        ids.filter(|id| !seen.insert(*id)).collect()
    }

    let kinds = [
        ("waypoint", duplicates(waypoints.iter().map(|wp| wp.id.as_str()))),
        ("target", duplicates(targets.iter().map(|target| target.id.as_str()))),
        ("action", duplicates(actions.iter().map(|action| action.id.as_str()))),
    ];

    kinds
        .into_iter()
        .flat_map(|(kind, ids)| {
            ids.into_iter().map(move |id| {
                MissionIssue::error(
                    "plan.duplicate_id",
                    format!("Duplicate {kind} id {id}"),
                    None,
                )
            })
        })
        .collect()
}

/// Waypoint-bound actions must point at a waypoint that still exists.
pub fn validate_action_references(waypoints: &[Waypoint], actions: &[Action]) -> Vec<MissionIssue> {
    let known: HashSet<&str> = waypoints.iter().map(|wp| wp.id.as_str()).collect();
    actions
        .iter()
        .filter_map(|action| {
            let waypoint_id = action.trigger.waypoint_id()?;
            if known.contains(waypoint_id) {
                return None;
            }
            Some(MissionIssue::error(
                "action.unknown_waypoint",
                format!(
                    "Action {} references non-existent waypoint {waypoint_id}",
                    action.id
                ),
                None,
            ))
        })
        .collect()
}

pub fn validate_actuator_parameters(
    actions: &[Action],
    limits: &ValidationLimits,
) -> Vec<MissionIssue> {
    let mut issues = Vec::new();
    for action in actions {
        match action.actuator {
            Actuator::RotateGimbal { pitch }
                if !(limits.min_gimbal_pitch_deg..=limits.max_gimbal_pitch_deg)
                    .contains(&pitch) =>
            {
                issues.push(MissionIssue::error(
                    "action.gimbal_pitch_out_of_range",
                    format!(
                        "Action {}: gimbal pitch {pitch}° is outside [{}, {}]",
                        action.id, limits.min_gimbal_pitch_deg, limits.max_gimbal_pitch_deg
                    ),
                    None,
                ));
            }
            Actuator::RotateAircraft { yaw } if !(-180.0..=180.0).contains(&yaw) => {
                issues.push(MissionIssue::error(
                    "action.yaw_out_of_range",
                    format!("Action {}: aircraft yaw {yaw}° is outside [-180, 180]", action.id),
                    None,
                ));
            }
            _ => {}
        }
        if let Trigger::Trajectory { mission_percent } = action.trigger {
            if !(0.0..=100.0).contains(&mission_percent) {
                issues.push(MissionIssue::error(
                    "action.mission_percent_out_of_range",
                    format!(
                        "Action {}: mission percent {mission_percent} is outside [0, 100]",
                        action.id
                    ),
                    None,
                ));
            }
        }
    }
    issues
}

/// Identity of "the same moment" for conflict detection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum TriggerKey {
    Waypoint(String),
    WaypointOffset(String, i64),
    Second(u64),
    ProgressDecile(i64),
}

impl TriggerKey {
    fn of(trigger: &Trigger) -> Self {
        match trigger {
            Trigger::ReachPoint { waypoint_id } => TriggerKey::Waypoint(waypoint_id.clone()),
            Trigger::DistanceToPoint {
                waypoint_id,
                distance_offset,
            } => TriggerKey::WaypointOffset(
                waypoint_id.clone(),
                (distance_offset * 1000.0).round() as i64,
            ),
            Trigger::TimeBased { time_ms } => TriggerKey::Second(time_ms / 1000),
            Trigger::Trajectory { mission_percent } => {
                TriggerKey::ProgressDecile((mission_percent / 10.0).floor() as i64)
            }
        }
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerKey::Waypoint(id) => write!(f, "waypoint {id}"),
            TriggerKey::WaypointOffset(id, offset_mm) => {
                write!(f, "waypoint {id} offset {}m", *offset_mm as f64 / 1000.0)
            }
            TriggerKey::Second(second) => write!(f, "{second}s"),
            TriggerKey::ProgressDecile(decile) => write!(f, "{}% progress", decile * 10),
        }
    }
}

/// Flags actuators that would fight each other when triggered together.
pub fn detect_actuator_conflicts(actions: &[Action]) -> Vec<MissionIssue> {
    let mut issues = Vec::new();

    let mut groups: BTreeMap<TriggerKey, Vec<&Action>> = BTreeMap::new();
    for action in actions {
        groups
            .entry(TriggerKey::of(&action.trigger))
            .or_default()
            .push(action);
    }

    for (key, group) in &groups {
        if group.len() > 1 {
            issues.extend(analyze_group_conflicts(group));
        }
        issues.extend(rotation_interpolation_conflicts(key, group));
    }

    issues.extend(redundant_rotation_angles(actions));
    issues
}

fn analyze_group_conflicts(group: &[&Action]) -> Vec<MissionIssue> {
    let mut issues = Vec::new();

    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for action in group {
        let kind = action.actuator.kind();
        if !seen.insert(kind) {
            duplicates.insert(kind);
        }
    }
    if !duplicates.is_empty() {
        let names: Vec<&str> = duplicates.iter().map(|kind| kind.as_str()).collect();
        issues.push(MissionIssue::error(
            "actuator.duplicate",
            format!(
                "Multiple {} actuators triggered simultaneously",
                names.join(", ")
            ),
            None,
        ));
    }

    if seen.contains(&ActuatorKind::StartRecording) && seen.contains(&ActuatorKind::StopRecording) {
        issues.push(MissionIssue::error(
            "actuator.recording_conflict",
            "Start and stop recording actions triggered simultaneously",
            None,
        ));
    }

    if seen.contains(&ActuatorKind::Focus) && seen.contains(&ActuatorKind::Zoom) {
        issues.push(MissionIssue::warning(
            "actuator.focus_zoom_overlap",
            "Focus and zoom adjustments triggered simultaneously - may cause conflicts",
            None,
        ));
    }

    issues
}

fn rotation_interpolation_conflicts(key: &TriggerKey, group: &[&Action]) -> Vec<MissionIssue> {
    let aircraft = group
        .iter()
        .find(|action| action.actuator.kind() == ActuatorKind::RotateAircraft);
    let gimbal = group
        .iter()
        .find(|action| action.actuator.kind() == ActuatorKind::RotateGimbal);

    match (aircraft, gimbal) {
        (Some(aircraft), Some(gimbal))
            if aircraft.interpolation_mode != gimbal.interpolation_mode =>
        {
            vec![MissionIssue::warning(
                "actuator.interpolation_mismatch",
                format!("Different interpolation modes for aircraft and gimbal rotation at {key}"),
                None,
            )]
        }
        _ => Vec::new(),
    }
}

fn redundant_rotation_angles(actions: &[Action]) -> Vec<MissionIssue> {
    let mut counts: BTreeMap<(ActuatorKind, String), usize> = BTreeMap::new();
    for action in actions {
        let angle = match action.actuator {
            Actuator::RotateAircraft { yaw } => yaw,
            Actuator::RotateGimbal { pitch } => pitch,
            _ => continue,
        };
        *counts
            .entry((action.actuator.kind(), angle.to_string()))
            .or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|((kind, angle), _)| {
            MissionIssue::warning(
                "actuator.redundant_angle",
                format!("Multiple {kind} actions set to same angle ({angle}°)"),
                None,
            )
        })
        .collect()
}

/// Curved-path corner radius limits.
///
/// The aircraft ignores the radius at the first and last waypoint, so only
/// pairs of interior waypoints are checked. Waypoints without a radius use
/// `limits.default_corner_radius_m`.
pub fn validate_corner_radius_constraints(
    waypoints: &[Waypoint],
    settings: &MissionSettings,
    limits: &ValidationLimits,
) -> Vec<MissionIssue> {
    let mut issues = Vec::new();
    if settings.flight_path_mode != FlightPathMode::Curved || waypoints.len() < 4 {
        return issues;
    }

    let radius_of = |wp: &Waypoint| wp.corner_radius.unwrap_or(limits.default_corner_radius_m);

    for index in 1..waypoints.len() - 2 {
        let (a, b) = (&waypoints[index], &waypoints[index + 1]);
        let (radius_a, radius_b) = (radius_of(a), radius_of(b));
        let spacing = distance(a.point(), b.point());
        let radius_sum = radius_a.abs() + radius_b.abs();

        if radius_sum >= spacing {
            issues.push(MissionIssue::error(
                "corner_radius.sum_exceeds_distance",
                format!(
                    "Waypoints {} and {}: Corner radius constraint violated. \
                     Sum of absolute corner radii ({radius_sum:.1}m) must be less than \
                     distance between waypoints ({spacing:.1}m). \
                     Consider reducing corner radius values or increasing waypoint spacing.",
                    index + 1,
                    index + 2
                ),
                Some(index),
            ));
        }

        for (position, radius) in [(index, radius_a), (index + 1, radius_b)] {
            issues.extend(single_radius_issues(position, radius, limits));
        }
    }

    issues
}

fn single_radius_issues(position: usize, radius: f64, limits: &ValidationLimits) -> Vec<MissionIssue> {
    let mut issues = Vec::new();
    let number = position + 1;

    if radius.abs() < limits.min_corner_radius_m {
        issues.push(MissionIssue::warning(
            "corner_radius.below_minimum",
            format!(
                "Waypoint {number}: Corner radius ({radius:.1}m) is below DJI SDK minimum of {}m",
                limits.min_corner_radius_m
            ),
            Some(position),
        ));
    }
    if radius.abs() > limits.max_corner_radius_m {
        issues.push(MissionIssue::error(
            "corner_radius.above_maximum",
            format!(
                "Waypoint {number}: Corner radius ({radius:.1}m) exceeds DJI SDK maximum of {}m",
                limits.max_corner_radius_m
            ),
            Some(position),
        ));
    }
    if radius < limits.min_negative_corner_radius_m {
        issues.push(MissionIssue::error(
            "corner_radius.below_negative_limit",
            format!(
                "Waypoint {number}: Corner radius ({radius:.1}m) is below minimum of {}m",
                limits.min_negative_corner_radius_m
            ),
            Some(position),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    const METER_DEG: f64 = 1.0 / 111_194.926_644_558_73;

    /// Waypoints along the equator, `spacing_m` apart.
    fn row(count: usize, spacing_m: f64) -> Vec<Waypoint> {
        (0..count)
            .map(|i| Waypoint::new(format!("wp-{i}"), 0.0, i as f64 * spacing_m * METER_DEG))
            .collect()
    }

    fn curved() -> MissionSettings {
        MissionSettings {
            flight_path_mode: FlightPathMode::Curved,
            ..MissionSettings::default()
        }
    }

    fn has_code(issues: &[MissionIssue], code: &str) -> bool {
        issues.iter().any(|issue| issue.code == code)
    }

    fn at_second(id: &str, second: u64, actuator: Actuator) -> Action {
        Action::new(
            id,
            Trigger::TimeBased {
                time_ms: second * 1000,
            },
            actuator,
        )
    }

    #[test]
    fn poi_mode_requires_assignments_and_targets() {
        let settings = MissionSettings {
            heading_mode: HeadingMode::TowardPointOfInterest,
            ..MissionSettings::default()
        };
        let issues = validate_poi_requirements(&settings, &[], &row(3, 10.0));
        assert!(has_code(&issues, "poi.no_assigned_waypoints"));
        assert!(has_code(&issues, "poi.no_targets"));
        assert!(!has_code(&issues, "poi.unknown_targets"));

        let mut waypoints = row(3, 10.0);
        waypoints[1].focus_target_id = Some("gone".to_string());
        let issues = validate_poi_requirements(&settings, &[Target::new("t1", 0.0, 0.0)], &waypoints);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "poi.unknown_targets");
        assert!(issues[0].message.contains("gone"));
    }

    #[test]
    fn poi_rules_only_apply_in_poi_mode() {
        let issues = validate_poi_requirements(&MissionSettings::default(), &[], &row(3, 10.0));
        assert!(issues.is_empty());
    }

    #[test]
    fn duplicate_and_recording_conflicts_are_errors() {
        let actions = vec![
            at_second("a", 5, Actuator::TakePhoto),
            Action::new("b", Trigger::TimeBased { time_ms: 5_400 }, Actuator::TakePhoto),
            at_second("c", 5, Actuator::StartRecording),
            at_second("d", 5, Actuator::StopRecording),
        ];
        let issues = detect_actuator_conflicts(&actions);

        assert!(has_code(&issues, "actuator.duplicate"));
        assert!(has_code(&issues, "actuator.recording_conflict"));
        let duplicate = issues
            .iter()
            .find(|issue| issue.code == "actuator.duplicate")
            .unwrap();
        assert!(duplicate.message.contains("takePhoto"));
    }

    #[test]
    fn focus_and_zoom_together_is_a_warning() {
        let actions = vec![
            at_second("a", 2, Actuator::Focus),
            at_second("b", 2, Actuator::Zoom),
        ];
        let issues = detect_actuator_conflicts(&actions);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Warning);
    }

    #[test]
    fn actions_at_different_moments_do_not_conflict() {
        let actions = vec![
            at_second("a", 1, Actuator::StartRecording),
            at_second("b", 9, Actuator::StopRecording),
            Action::new(
                "c",
                Trigger::Trajectory {
                    mission_percent: 15.0,
                },
                Actuator::TakePhoto,
            ),
            Action::new(
                "d",
                Trigger::Trajectory {
                    mission_percent: 25.0,
                },
                Actuator::TakePhoto,
            ),
        ];
        assert!(detect_actuator_conflicts(&actions).is_empty());
    }

    #[test]
    fn mismatched_rotation_interpolation_is_flagged() {
        let actions = vec![
            at_second("yaw", 3, Actuator::RotateAircraft { yaw: 30.0 }).linear(),
            at_second("gimbal", 3, Actuator::RotateGimbal { pitch: -30.0 }),
        ];
        let issues = detect_actuator_conflicts(&actions);
        assert!(has_code(&issues, "actuator.interpolation_mismatch"));
        assert!(issues[0].message.contains("3s"));

        let aligned = vec![
            at_second("yaw", 3, Actuator::RotateAircraft { yaw: 30.0 }).linear(),
            at_second("gimbal", 3, Actuator::RotateGimbal { pitch: -30.0 }).linear(),
        ];
        assert!(!has_code(
            &detect_actuator_conflicts(&aligned),
            "actuator.interpolation_mismatch"
        ));
    }

    #[test]
    fn repeated_angles_are_warned() {
        let actions = vec![
            at_second("a", 1, Actuator::RotateGimbal { pitch: -90.0 }),
            at_second("b", 20, Actuator::RotateGimbal { pitch: -90.0 }),
            at_second("c", 40, Actuator::RotateAircraft { yaw: -90.0 }),
        ];
        let issues = detect_actuator_conflicts(&actions);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "actuator.redundant_angle");
        assert!(issues[0].message.contains("rotateGimbal"));
    }

    #[test]
    fn corner_radius_sum_must_fit_between_waypoints() {
        let mut waypoints = row(4, 1.0);
        for wp in &mut waypoints {
            wp.corner_radius = Some(1.0);
        }
        let issues =
            validate_corner_radius_constraints(&waypoints, &curved(), &ValidationLimits::default());
        assert!(has_code(&issues, "corner_radius.sum_exceeds_distance"));
        assert_eq!(issues[0].waypoint, Some(1));
    }

    #[test]
    fn corner_radius_ignored_for_normal_paths_and_end_segments() {
        let mut waypoints = row(4, 1.0);
        for wp in &mut waypoints {
            wp.corner_radius = Some(1.0);
        }
        let normal = MissionSettings::default();
        assert!(
            validate_corner_radius_constraints(&waypoints, &normal, &ValidationLimits::default())
                .is_empty()
        );

        let three = row(3, 1.0);
        assert!(
            validate_corner_radius_constraints(&three, &curved(), &ValidationLimits::default())
                .is_empty()
        );
    }

    #[test]
    fn corner_radius_bounds() {
        let mut waypoints = row(4, 1_000.0);
        waypoints[1].corner_radius = Some(-60.0);
        waypoints[2].corner_radius = Some(0.1);
        let issues =
            validate_corner_radius_constraints(&waypoints, &curved(), &ValidationLimits::default());

        assert!(has_code(&issues, "corner_radius.below_negative_limit"));
        assert!(has_code(&issues, "corner_radius.below_minimum"));
        assert!(!has_code(&issues, "corner_radius.above_maximum"));
        assert!(!has_code(&issues, "corner_radius.sum_exceeds_distance"));

        waypoints[1].corner_radius = Some(150.0);
        let issues =
            validate_corner_radius_constraints(&waypoints, &curved(), &ValidationLimits::default());
        assert!(has_code(&issues, "corner_radius.above_maximum"));
    }

    #[test]
    fn structural_and_speed_checks() {
        let report = validate_mission_upload(
            &MissionSettings {
                auto_flight_speed: 0.0,
                max_flight_speed: -1.0,
                ..MissionSettings::default()
            },
            &[],
            &row(1, 0.0),
            &[],
        );
        assert!(!report.is_valid);
        assert!(!report.can_upload);
        let errors = report.errors();
        assert!(errors.contains(&"Mission requires at least 2 waypoints"));
        assert!(errors.contains(&"Auto flight speed must be greater than 0"));
        assert!(errors.contains(&"Max flight speed must be greater than 0"));
        assert!(errors.contains(&"Auto flight speed cannot exceed max flight speed"));
    }

    #[test]
    fn close_waypoints_need_attention_but_upload() {
        let report = validate_mission_upload(&MissionSettings::default(), &[], &row(2, 0.2), &[]);
        assert!(report.is_valid);
        assert!(report.requires_attention);
        assert_eq!(report.warnings(), vec!["Waypoints 1 and 2 are very close (0.20m)"]);
    }

    #[test]
    fn dangling_action_reference_is_an_error() {
        let actions = vec![Action::new(
            "photo",
            Trigger::ReachPoint {
                waypoint_id: "removed".to_string(),
            },
            Actuator::TakePhoto,
        )];
        let report = validate_mission_upload(&MissionSettings::default(), &[], &row(2, 10.0), &actions);
        assert!(!report.is_valid);
        assert!(has_code(&report.issues, "action.unknown_waypoint"));
    }

    #[test]
    fn actuator_parameter_ranges() {
        let actions = vec![
            at_second("g", 1, Actuator::RotateGimbal { pitch: 45.0 }),
            at_second("y", 2, Actuator::RotateAircraft { yaw: 200.0 }),
            Action::new(
                "p",
                Trigger::Trajectory {
                    mission_percent: 120.0,
                },
                Actuator::TakePhoto,
            ),
        ];
        let issues = validate_actuator_parameters(&actions, &ValidationLimits::default());
        assert!(has_code(&issues, "action.gimbal_pitch_out_of_range"));
        assert!(has_code(&issues, "action.yaw_out_of_range"));
        assert!(has_code(&issues, "action.mission_percent_out_of_range"));
    }

    #[test]
    fn clean_mission_is_uploadable() {
        let report = validate_mission_upload(&MissionSettings::default(), &[], &row(3, 20.0), &[]);
        assert!(report.is_valid);
        assert!(!report.requires_attention);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn duplicate_ids_block_upload() {
        let mut waypoints = row(3, 50.0);
        waypoints[2].id = waypoints[0].id.clone();
        let actions = vec![Action::new(
            "turn",
            Trigger::ReachPoint {
                waypoint_id: waypoints[0].id.clone(),
            },
            Actuator::RotateAircraft { yaw: 90.0 },
        )];

        let report = validate_mission_upload(&MissionSettings::default(), &[], &waypoints, &actions);

        assert!(!report.is_valid);
        assert!(report.errors().contains(&"Duplicate waypoint id wp-0"));
    }

    #[test]
    fn duplicate_ids_are_reported_once_per_kind() {
        let waypoints = vec![
            Waypoint::new("a", 0.0, 0.0),
            Waypoint::new("a", 0.0, 0.001),
            Waypoint::new("a", 0.0, 0.002),
        ];
        let targets = vec![Target::new("t", 0.0, 0.0), Target::new("t", 1.0, 1.0)];
        let actions = vec![
            at_second("x", 1, Actuator::TakePhoto),
            at_second("x", 9, Actuator::Zoom),
        ];

        let issues = validate_unique_ids(&waypoints, &targets, &actions);

        let messages: Vec<&str> = issues.iter().map(|issue| issue.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Duplicate waypoint id a",
                "Duplicate target id t",
                "Duplicate action id x"
            ]
        );
        assert!(issues.iter().all(|issue| issue.code == "plan.duplicate_id"));
        assert!(validate_unique_ids(&row(3, 50.0), &[], &[]).is_empty());
    }
}
