pub mod actions;
pub mod compute;
pub mod document;
pub mod edit;
pub mod heading;
pub mod summary;
pub mod timeline;
pub mod types;
pub mod validation;

pub use actions::{active_actuators_at, actuator_start_time, heading_at, is_active};
pub use compute::{recalculate_headings, recalculate_headings_with_config, MissionComputation};
pub use document::MissionDocument;
pub use edit::{
    assign_target, check_unique_ids, move_waypoint, remove_target, remove_waypoint,
    RemovedWaypoint,
};
pub use heading::{
    resolve_headings, ActuatorOverride, AnnotatedWaypoint, HeadingSource, OverrideAxis,
};
pub use summary::{format_duration, MissionSummary};
pub use timeline::{build_timeline, Timeline, TimelineEntry};
pub use types::{
    Action, Actuator, ActuatorKind, FailsafeAction, FinishedAction, FlightPathMode, HeadingMode,
    InterpolationMode, IssueSeverity, MissionIssue, MissionSettings, Target, Trigger, TurnMode,
    Waypoint,
};
pub use validation::{
    detect_actuator_conflicts, validate_action_references, validate_actuator_parameters,
    validate_corner_radius_constraints, validate_mission_upload,
    validate_mission_upload_with_config, validate_poi_requirements, validate_speeds,
    validate_unique_ids, ValidationReport,
};
