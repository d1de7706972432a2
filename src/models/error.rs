//! Error types for the reputation engine

use thiserror::Error;

/// Engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Shorthand for an unregistered agent id
    pub fn agent_not_found(id: impl Into<String>) -> Self {
        Self::not_found("agent", id)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::ValidationError(message.into())
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
