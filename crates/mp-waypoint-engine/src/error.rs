#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown waypoint '{0}'")]
    UnknownWaypoint(String),
    #[error("unknown target '{0}'")]
    UnknownTarget(String),
    #[error("duplicate id '{0}'")]
    DuplicateId(String),
    #[error("waypoint position {index} is out of range for {len} waypoints")]
    PositionOutOfRange { index: usize, len: usize },
    #[error("mission document: {0}")]
    Document(#[from] serde_json::Error),
}
