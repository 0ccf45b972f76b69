//! Error handling for vaccination bookkeeping.
//!
//! Operations on a single [`Person`](crate::models::Person) never fail. The
//! errors here belong to the layers around it: JSON encoding, configuration
//! and the SSN-keyed collection.

/// Specialized error type for vaccination bookkeeping
#[derive(Debug, thiserror::Error)]
pub enum VaccinationError {
    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value could not be interpreted
    #[error("Configuration error: {0}")]
    Config(String),

    /// A person with this SSN is already registered
    #[error("Duplicate SSN: {0}")]
    DuplicateSsn(String),

    /// No person with this SSN is registered
    #[error("Unknown SSN: {0}")]
    UnknownSsn(String),
}

impl VaccinationError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type for vaccination bookkeeping operations
pub type Result<T> = std::result::Result<T, VaccinationError>;
