//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for homebox-cli operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HomeboxError {
    /// Configuration Error - missing or invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Authentication Error - login was rejected by the server
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// API Error - the server returned a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Decode Error - the server response did not match the expected shape
    #[error("Malformed API response: {message}")]
    Decode { message: String },

    /// Path Error - a location path segment had no match
    #[error("Location path '{path}': no match for segment '{segment}'")]
    PathNotFound { segment: String, path: String },

    /// Path Error - a location path segment matched more than one sibling
    #[error("Location path '{path}': segment '{segment}' is ambiguous")]
    PathAmbiguous { segment: String, path: String },

    /// CSV Error - a CSV file could not be read or written
    #[error("CSV error: {message}")]
    Csv { message: String },
}

impl HomeboxError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Auth { .. } => 2,
            Self::Api { .. } => 3,
            Self::Decode { .. } => 4,
            Self::PathNotFound { .. } | Self::PathAmbiguous { .. } => 5,
            Self::Csv { .. } => 6,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an authentication error
    #[inline]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an API error from a status code and response body
    #[inline]
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    #[inline]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a path-not-found error for a segment of a path
    #[inline]
    pub fn path_not_found<S: Into<String>, P: Into<String>>(segment: S, path: P) -> Self {
        Self::PathNotFound {
            segment: segment.into(),
            path: path.into(),
        }
    }

    /// Create an ambiguous-path error for a segment of a path
    #[inline]
    pub fn path_ambiguous<S: Into<String>, P: Into<String>>(segment: S, path: P) -> Self {
        Self::PathAmbiguous {
            segment: segment.into(),
            path: path.into(),
        }
    }

    /// Create a CSV error
    #[inline]
    pub fn csv<S: Into<String>>(message: S) -> Self {
        Self::Csv {
            message: message.into(),
        }
    }
}
