//! Errors from a single search request.

use thiserror::Error;

use super::ErrorKind;

/// Failure of one search request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection could not be established or was dropped.
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request did not finish within the configured timeout.
    #[error("Request timed out: {message}")]
    Timeout { message: String },

    /// Server answered with a non-2xx status.
    #[error("HTTP {status} error: {message}")]
    HttpStatus { status: u16, message: String },

    /// Body arrived but is not the expected shape.
    #[error("Malformed response: {message}")]
    Malformed { message: String },

    /// Any other transport problem.
    #[error("Network error: {message}")]
    Other { message: String },
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Malformed { .. } => ErrorKind::MalformedResponse,
            FetchError::ConnectionFailed { .. }
            | FetchError::Timeout { .. }
            | FetchError::HttpStatus { .. }
            | FetchError::Other { .. } => ErrorKind::NetworkFailure,
        }
    }

    /// Short message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::ConnectionFailed { .. } => {
                "Unable to reach the news service. Check your internet connection.".to_string()
            }
            FetchError::Timeout { .. } => {
                "The news service took too long to answer.".to_string()
            }
            FetchError::HttpStatus { status, .. } => match *status {
                404 => "The news endpoint was not found.".to_string(),
                429 => "Too many requests. Wait a moment and try again.".to_string(),
                500..=599 => "The news service is having trouble. Try again later.".to_string(),
                _ => format!("The news service returned an error (HTTP {}).", status),
            },
            FetchError::Malformed { .. } => {
                "Received an unexpected response from the news service.".to_string()
            }
            FetchError::Other { message } => format!("Request failed: {}", message),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed {
            message: e.to_string(),
        }
    }
}

/// Classify a reqwest error into a [`FetchError`].
pub fn classify_reqwest_error(err: &reqwest::Error, url: &str) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        FetchError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if let Some(status) = err.status() {
        FetchError::HttpStatus {
            status: status.as_u16(),
            message: err.to_string(),
        }
    } else if err.is_decode() {
        FetchError::Malformed {
            message: format!("Failed to decode response: {}", err),
        }
    } else {
        FetchError::Other {
            message: err.to_string(),
        }
    }
}
