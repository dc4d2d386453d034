use serde::{Deserialize, Serialize};

/// Timing windows and limits shared by every engine entry point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Half-width of the window in which waypoint-bound triggers count as reached.
    pub trigger_tolerance_s: f64,
    /// How long a time-based trigger stays active.
    pub time_trigger_window_s: f64,
    /// Half-width of the window for mission-progress triggers, in percent.
    pub trajectory_tolerance_pct: f64,
    /// Duration of a linear aircraft rotation.
    pub rotation_ramp_s: f64,
    pub hover_time_per_waypoint_s: f64,
    pub limits: ValidationLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trigger_tolerance_s: 0.1,
            time_trigger_window_s: 1.0,
            trajectory_tolerance_pct: 1.0,
            rotation_ramp_s: 1.0,
            hover_time_per_waypoint_s: 2.0,
            limits: ValidationLimits::default(),
        }
    }
}

/// DJI Waypoint V2 numeric limits applied by the upload validator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationLimits {
    /// Radius assumed for waypoints that leave `corner_radius` unset.
    pub default_corner_radius_m: f64,
    pub min_corner_radius_m: f64,
    pub max_corner_radius_m: f64,
    pub min_negative_corner_radius_m: f64,
    pub min_waypoint_spacing_m: f64,
    pub min_gimbal_pitch_deg: f64,
    pub max_gimbal_pitch_deg: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            default_corner_radius_m: 0.2,
            min_corner_radius_m: 0.2,
            max_corner_radius_m: 100.0,
            min_negative_corner_radius_m: -50.0,
            min_waypoint_spacing_m: 0.5,
            min_gimbal_pitch_deg: -90.0,
            max_gimbal_pitch_deg: 30.0,
        }
    }
}
