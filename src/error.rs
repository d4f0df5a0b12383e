//! Crate-level error types.

use thiserror::Error;

use crate::api::FetchError;

/// Errors surfaced by the dashboard outside of the HTTP layer.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Fetching the backend data failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration could not be loaded or applied
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),

    /// A value from the config or the command line could not be parsed
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },
}

impl DashboardError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
