use std::fmt;

use super::FetchError;

/// Coarse classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Request could not complete: connectivity, timeout, non-2xx status.
    NetworkFailure,
    /// Response arrived but lacked the expected fields.
    MalformedResponse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NetworkFailure => write!(f, "network failure"),
            ErrorKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

/// Error surfaced to the render boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&FetchError> for ErrorInfo {
    fn from(err: &FetchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

impl From<FetchError> for ErrorInfo {
    fn from(err: FetchError) -> Self {
        Self::from(&err)
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
