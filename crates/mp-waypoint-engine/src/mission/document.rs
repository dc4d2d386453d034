use super::compute::{recalculate_headings_with_config, MissionComputation};
use super::summary::MissionSummary;
use super::types::{Action, MissionSettings, Target, Waypoint};
use super::validation::{validate_mission_upload_with_config, ValidationReport};
use crate::config::EngineConfig;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// The plain-data mission snapshot exchanged with the planner UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MissionDocument {
    pub settings: MissionSettings,
    pub waypoints: Vec<Waypoint>,
    pub targets: Vec<Target>,
    pub actions: Vec<Action>,
}

impl MissionDocument {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn compute(&self, config: &EngineConfig) -> MissionComputation {
        recalculate_headings_with_config(
            &self.waypoints,
            &self.targets,
            &self.settings,
            &self.actions,
            config,
        )
    }

    pub fn validate(&self, config: &EngineConfig) -> ValidationReport {
        validate_mission_upload_with_config(
            &self.settings,
            &self.targets,
            &self.waypoints,
            &self.actions,
            config,
        )
    }

    pub fn summary(&self, config: &EngineConfig) -> MissionSummary {
        MissionSummary::from_timeline(&self.compute(config).timeline, config)
    }
}
