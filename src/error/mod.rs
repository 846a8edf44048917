//! Error types for fetching and configuration.
//!
//! - [`FetchError`]: everything that can go wrong with one search request
//! - [`ErrorKind`]: the two-way classification the view cares about
//! - [`ErrorInfo`]: what the render boundary receives after a failed fetch
//! - [`ConfigError`]: invalid configuration values
//!
//! Fetch failures never escape the fetch coordinator; they are folded into
//! an [`ErrorInfo`] on the view.

mod config;
mod fetch;
mod info;

pub use config::ConfigError;
pub use fetch::{classify_reqwest_error, FetchError};
pub use info::{ErrorInfo, ErrorKind};
