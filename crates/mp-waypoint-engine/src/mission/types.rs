use crate::geodesy::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeadingMode {
    #[default]
    Auto,
    UsingInitialDirection,
    ControlByRemoteController,
    UsingWaypointHeading,
    TowardPointOfInterest,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightPathMode {
    #[default]
    Normal,
    Curved,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishedAction {
    #[default]
    NoAction,
    GoHome,
    AutoLand,
    GoFirstWaypoint,
    ContinueUntilStop,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnMode {
    #[default]
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailsafeAction {
    #[default]
    GoHome,
    AutoLand,
    Hover,
    ContinueMission,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MissionSettings {
    pub heading_mode: HeadingMode,
    pub flight_path_mode: FlightPathMode,
    /// Cruise speed for waypoints without their own speed, m/s.
    pub auto_flight_speed: f64,
    pub max_flight_speed: f64,
    pub finished_action: FinishedAction,
    pub repeat_times: u32,
    pub global_turn_mode: TurnMode,
    pub gimbal_pitch_rotation_enabled: bool,
    pub battery_action: FailsafeAction,
    /// Remaining battery percentage that triggers `battery_action`.
    pub battery_threshold: u8,
    pub signal_lost_action: FailsafeAction,
}

impl Default for MissionSettings {
    fn default() -> Self {
        Self {
            heading_mode: HeadingMode::Auto,
            flight_path_mode: FlightPathMode::Normal,
            auto_flight_speed: 10.0,
            max_flight_speed: 15.0,
            finished_action: FinishedAction::NoAction,
            repeat_times: 1,
            global_turn_mode: TurnMode::Clockwise,
            gimbal_pitch_rotation_enabled: true,
            battery_action: FailsafeAction::GoHome,
            battery_threshold: 20,
            signal_lost_action: FailsafeAction::GoHome,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Terrain elevation above sea level, sampled by the map layer.
    #[serde(default)]
    pub ground_height: f64,
    /// Flight height above ground.
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint_heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gimbal_pitch: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gimbal_roll: Option<f64>,
    /// Looked up in the mission's targets; may dangle after edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_target_id: Option<String>,
    /// Negative curves inward, positive outward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_mode: Option<TurnMode>,
}

impl Waypoint {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            ground_height: 0.0,
            height: 0.0,
            speed: None,
            waypoint_heading: None,
            gimbal_pitch: None,
            gimbal_roll: None,
            focus_target_id: None,
            corner_radius: None,
            turn_mode: None,
        }
    }

    pub fn elevation(&self) -> f64 {
        self.ground_height + self.height
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::with_elevation(self.lat, self.lng, self.ground_height, self.height)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub ground_height: f64,
    #[serde(default)]
    pub height: f64,
}

impl Target {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            lat,
            lng,
            ground_height: 0.0,
            height: 0.0,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::with_elevation(self.lat, self.lng, self.ground_height, self.height)
    }
}

/// When an action fires. Waypoint-bound triggers refer to waypoints by id so
/// that deleting or reordering waypoints cannot silently retarget them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "triggerType", rename_all = "camelCase")]
pub enum Trigger {
    #[serde(rename_all = "camelCase")]
    ReachPoint { waypoint_id: String },
    /// Fires `distance_offset` meters after (positive) or before (negative)
    /// reaching the waypoint.
    #[serde(rename_all = "camelCase")]
    DistanceToPoint {
        waypoint_id: String,
        distance_offset: f64,
    },
    #[serde(rename_all = "camelCase")]
    TimeBased { time_ms: u64 },
    /// Fires at a percentage (0-100) of the total mission duration.
    #[serde(rename_all = "camelCase")]
    Trajectory { mission_percent: f64 },
}

impl Trigger {
    pub fn waypoint_id(&self) -> Option<&str> {
        match self {
            Trigger::ReachPoint { waypoint_id } | Trigger::DistanceToPoint { waypoint_id, .. } => {
                Some(waypoint_id)
            }
            Trigger::TimeBased { .. } | Trigger::Trajectory { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "actuatorType", rename_all = "camelCase")]
pub enum Actuator {
    TakePhoto,
    StartRecording,
    StopRecording,
    /// Gimbal pitch in degrees, -90 (nadir) to 30.
    RotateGimbal { pitch: f64 },
    /// Aircraft yaw in degrees, -180 to 180.
    RotateAircraft { yaw: f64 },
    Focus,
    Zoom,
    Custom { name: String },
}

impl Actuator {
    pub fn kind(&self) -> ActuatorKind {
        match self {
            Actuator::TakePhoto => ActuatorKind::TakePhoto,
            Actuator::StartRecording => ActuatorKind::StartRecording,
            Actuator::StopRecording => ActuatorKind::StopRecording,
            Actuator::RotateGimbal { .. } => ActuatorKind::RotateGimbal,
            Actuator::RotateAircraft { .. } => ActuatorKind::RotateAircraft,
            Actuator::Focus => ActuatorKind::Focus,
            Actuator::Zoom => ActuatorKind::Zoom,
            Actuator::Custom { .. } => ActuatorKind::Custom,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ActuatorKind {
    TakePhoto,
    StartRecording,
    StopRecording,
    RotateGimbal,
    RotateAircraft,
    Focus,
    Zoom,
    Custom,
}

impl ActuatorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActuatorKind::TakePhoto => "takePhoto",
            ActuatorKind::StartRecording => "startRecording",
            ActuatorKind::StopRecording => "stopRecording",
            ActuatorKind::RotateGimbal => "rotateGimbal",
            ActuatorKind::RotateAircraft => "rotateAircraft",
            ActuatorKind::Focus => "focus",
            ActuatorKind::Zoom => "zoom",
            ActuatorKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ActuatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    #[default]
    None,
    Linear,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub trigger: Trigger,
    pub actuator: Actuator,
    #[serde(default)]
    pub interpolation_mode: InterpolationMode,
}

impl Action {
    pub fn new(id: impl Into<String>, trigger: Trigger, actuator: Actuator) -> Self {
        Self {
            id: id.into(),
            trigger,
            actuator,
            interpolation_mode: InterpolationMode::None,
        }
    }

    pub fn linear(self) -> Self {
        Self {
            interpolation_mode: InterpolationMode::Linear,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissionIssue {
    pub code: String,
    pub message: String,
    /// Zero-based waypoint position the issue is anchored to, if any.
    pub waypoint: Option<usize>,
    pub severity: IssueSeverity,
}

impl MissionIssue {
    pub fn error(code: &str, message: impl Into<String>, waypoint: Option<usize>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            waypoint,
            severity: IssueSeverity::Error,
        }
    }

    pub fn warning(code: &str, message: impl Into<String>, waypoint: Option<usize>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            waypoint,
            severity: IssueSeverity::Warning,
        }
    }
}
