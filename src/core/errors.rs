//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Source or destination language code is empty
    #[error("Missing required parameter: {field}")]
    MissingParameter {
        /// Name of the missing parameter
        field: String,
    },

    /// Connection, timeout or body read failure
    #[error("Transport error: {message}")]
    TransportError {
        /// Underlying transport message
        message: String,
    },

    /// Remote service answered with something other than 200
    #[error("Status code: {status}")]
    HttpStatusError {
        /// HTTP status returned by the service
        status: u16,
    },

    /// Response body did not match the expected shape
    #[error("Decode error: {message}")]
    DecodeError {
        /// Decoder message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },
}

impl TranslationError {
    pub(crate) fn missing(field: &str) -> Self {
        TranslationError::MissingParameter {
            field: field.to_string(),
        }
    }
}

impl From<reqwest::Error> for TranslationError {
    fn from(err: reqwest::Error) -> Self {
        TranslationError::TransportError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(err: serde_json::Error) -> Self {
        TranslationError::DecodeError {
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for TranslationError {
    fn from(err: anyhow::Error) -> Self {
        TranslationError::ConfigError {
            message: err.to_string(),
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
