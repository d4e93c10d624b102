//! Error handling for the fare engine

use uuid::Uuid;

/// Fare engine error type.
///
/// All errors are synchronous and deterministic: the engine never retries,
/// and the calling layer is responsible for translating these into HTTP
/// status codes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Vehicle type not found or inactive: {0}")]
    VehicleTypeNotFound(Uuid),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, FareError>;
