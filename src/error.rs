//! Error types and handling for the `TripGenie` application

use thiserror::Error;

/// Main error type for the `TripGenie` application
#[derive(Error, Debug)]
pub enum TripGenieError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Export serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl TripGenieError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripGenieError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            TripGenieError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripGenieError::Serialization { .. } => {
                "The plan could not be exported. Please try again.".to_string()
            }
        }
    }
}
