//! Error types and handling for the `Shoreline` application

use thiserror::Error;

/// Main error type for the `Shoreline` application
#[derive(Error, Debug)]
pub enum ShorelineError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Latitude/longitude out of range or non-finite
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Malformed condition readings (negative values, unknown water quality)
    #[error("Invalid condition: {message}")]
    InvalidCondition { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Requested entity does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl ShorelineError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new invalid-coordinate error
    pub fn invalid_coordinate<S: Into<String>>(message: S) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    /// Create a new invalid-condition error
    pub fn invalid_condition<S: Into<String>>(message: S) -> Self {
        Self::InvalidCondition {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ShorelineError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            ShorelineError::Api { .. } => {
                "Unable to reach external weather services. Please try again later.".to_string()
            }
            ShorelineError::InvalidCoordinate { message } => {
                format!("Invalid coordinates: {message}")
            }
            ShorelineError::InvalidCondition { message } => {
                format!("Invalid condition data: {message}")
            }
            ShorelineError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            ShorelineError::NotFound { message } => message.clone(),
            ShorelineError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            ShorelineError::General { message } => message.clone(),
        }
    }
}
