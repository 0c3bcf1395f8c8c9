//! Unified error handling for the Closet Planner CLI
//!
//! Every failure carries a unique code in the format `CPxxx`:
//! - CP1xx: authentication and session errors
//! - CP2xx: network and API errors
//! - CP3xx: file and I/O errors
//! - CP4xx: configuration errors
//! - CP5xx: validation and input errors
//! - CP9xx: internal errors

use std::fmt;
use thiserror::Error;

/// Unified Result type for all Closet Planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Error codes for Closet Planner operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Authentication (CP1xx)
    /// CP101: Not authenticated
    NotAuthenticated,
    /// CP102: Stored token rejected
    TokenRejected,

    // Network (CP2xx)
    /// CP201: HTTP transport failure
    HttpError,
    /// CP202: Connection timeout
    ConnectionTimeout,
    /// CP203: Connection refused
    ConnectionRefused,
    /// CP204: API returned an error response
    ApiError,
    /// CP205: Response body did not match the expected shape
    InvalidResponse,

    // File/IO (CP3xx)
    /// CP301: File not found
    FileNotFound,
    /// CP302: File read error
    FileReadError,
    /// CP303: File write error
    FileWriteError,

    // Configuration (CP4xx)
    /// CP401: Configuration error
    ConfigError,
    /// CP402: Invalid endpoint URL
    InvalidEndpoint,

    // Validation (CP5xx)
    /// CP501: Invalid input
    InvalidInput,
    /// CP502: Form validation failed
    ValidationFailed,

    // Internal (CP9xx)
    /// CP901: Internal error
    InternalError,
    /// CP902: Serialization error
    SerializationError,
}

impl ErrorCode {
    pub fn code(&self) -> u16 {
        match self {
            ErrorCode::NotAuthenticated => 101,
            ErrorCode::TokenRejected => 102,

            ErrorCode::HttpError => 201,
            ErrorCode::ConnectionTimeout => 202,
            ErrorCode::ConnectionRefused => 203,
            ErrorCode::ApiError => 204,
            ErrorCode::InvalidResponse => 205,

            ErrorCode::FileNotFound => 301,
            ErrorCode::FileReadError => 302,
            ErrorCode::FileWriteError => 303,

            ErrorCode::ConfigError => 401,
            ErrorCode::InvalidEndpoint => 402,

            ErrorCode::InvalidInput => 501,
            ErrorCode::ValidationFailed => 502,

            ErrorCode::InternalError => 901,
            ErrorCode::SerializationError => 902,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CP{}", self.code())
    }
}

/// Main error type for all Closet Planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Authentication/session error
    #[error("[{code}] Authentication error: {message}")]
    Auth { code: ErrorCode, message: String },

    /// HTTP/transport error
    #[error("[{code}] Network error: {message}")]
    Network {
        code: ErrorCode,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// API error with HTTP status
    ///
    /// The message comes from the server's `detail` field when the error
    /// body parses, or a generic status-code fallback when it does not.
    #[error("[{code}] API error ({status}): {message}")]
    Api {
        code: ErrorCode,
        status: u16,
        message: String,
    },

    /// File or IO error
    #[error("[{code}] {context}: {message}")]
    Io {
        code: ErrorCode,
        context: String,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration error
    #[error("[{code}] Configuration error: {message}")]
    Config {
        code: ErrorCode,
        message: String,
        #[source]
        source: Option<config::ConfigError>,
    },

    /// Validation error
    #[error("[{code}] Validation error: {message}")]
    Validation {
        code: ErrorCode,
        message: String,
        field: Option<String>,
    },

    /// Invalid input error
    #[error("[{code}] Invalid input: {message}")]
    InvalidInput { code: ErrorCode, message: String },

    /// Internal/unexpected error
    #[error("[{code}] Internal error: {message}")]
    Internal { code: ErrorCode, message: String },

    /// JSON serialization error
    #[error("[{code}] Serialization error: {message}")]
    Serialization {
        code: ErrorCode,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl PlannerError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            code: ErrorCode::NotAuthenticated,
            message: message.into(),
        }
    }

    pub fn token_rejected(message: impl Into<String>) -> Self {
        Self::Auth {
            code: ErrorCode::TokenRejected,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            code: ErrorCode::HttpError,
            message: message.into(),
            source: None,
        }
    }

    pub fn network_from_reqwest(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            ErrorCode::ConnectionTimeout
        } else if err.is_connect() {
            ErrorCode::ConnectionRefused
        } else {
            ErrorCode::HttpError
        };

        Self::Network {
            code,
            message: err.to_string(),
            source: Some(err),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            code: ErrorCode::ApiError,
            status,
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::Api {
            code: ErrorCode::InvalidResponse,
            status: 0,
            message: message.into(),
        }
    }

    pub fn io(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            code: ErrorCode::FileReadError,
            context: context.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn io_from_error(context: impl Into<String>, err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::FileWriteError,
            _ => ErrorCode::FileReadError,
        };

        Self::Io {
            code,
            context: context.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::Io {
            code: ErrorCode::FileNotFound,
            context: "File not found".to_string(),
            message: path.into(),
            source: None,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::ConfigError,
            message: message.into(),
            source: None,
        }
    }

    pub fn config_from_error(err: config::ConfigError) -> Self {
        Self::Config {
            code: ErrorCode::ConfigError,
            message: err.to_string(),
            source: Some(err),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            field: None,
        }
    }

    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            code: ErrorCode::InvalidInput,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            code: ErrorCode::InternalError,
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            code: ErrorCode::SerializationError,
            message: message.into(),
            source: None,
        }
    }

    /// HTTP status for API errors, None for every other category
    pub fn status(&self) -> Option<u16> {
        match self {
            PlannerError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message for API errors, used by the orchestrators
    /// when composing user-facing guidance
    pub fn api_message(&self) -> Option<&str> {
        match self {
            PlannerError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        Self::network_from_reqwest(err)
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::io_from_error("IO operation failed", err)
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            code: ErrorCode::SerializationError,
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<config::ConfigError> for PlannerError {
    fn from(err: config::ConfigError) -> Self {
        Self::config_from_error(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status_and_message() {
        let err = PlannerError::api(503, "Service warming up");
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.api_message(), Some("Service warming up"));
        assert!(err.to_string().contains("CP204"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn non_api_errors_carry_no_status() {
        let err = PlannerError::validation("Occasion is required.");
        assert_eq!(err.status(), None);
        assert!(err.api_message().is_none());
    }

    #[test]
    fn io_error_maps_not_found_kind() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PlannerError::io_from_error("Reading image", source);
        match err {
            PlannerError::Io { code, .. } => assert_eq!(code, ErrorCode::FileNotFound),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
