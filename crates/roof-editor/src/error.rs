//! Editor errors

/// Refused interaction requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    #[error("a drag is already in progress")]
    DragInProgress,
    #[error("no drag is in progress")]
    NotDragging,
    #[error("pointer ray does not reach the drag plane")]
    RayMissed,
    #[error("grips are hidden")]
    GripsHidden,
}

/// Configuration load/save errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
