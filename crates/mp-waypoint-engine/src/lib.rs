//! Heading, timeline and upload-validation engine for DJI-style waypoint
//! missions.
//!
//! Every entry point is a pure function over a snapshot of waypoints,
//! targets, settings and actions. Callers recompute after each edit.

pub mod config;
pub mod error;
pub mod geodesy;
pub mod mission;

pub use config::{EngineConfig, ValidationLimits};
pub use error::EngineError;
pub use geodesy::{distance, heading, pitch, GeoPoint};

pub use mission::{
    active_actuators_at, actuator_start_time, assign_target, build_timeline, check_unique_ids,
    format_duration, heading_at, is_active, move_waypoint, recalculate_headings,
    recalculate_headings_with_config, remove_target, remove_waypoint, resolve_headings,
    validate_mission_upload, validate_mission_upload_with_config, Action, ActuatorOverride,
    Actuator, ActuatorKind, AnnotatedWaypoint, FailsafeAction, FinishedAction, FlightPathMode,
    HeadingMode, HeadingSource, InterpolationMode, IssueSeverity, MissionComputation,
    MissionDocument, MissionIssue, MissionSettings, MissionSummary, OverrideAxis,
    RemovedWaypoint, Target, Timeline, TimelineEntry, Trigger, TurnMode, ValidationReport,
    Waypoint,
};
