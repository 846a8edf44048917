use thiserror::Error;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("endpoint URL must not be empty")]
    EmptyBaseUrl,

    #[error("endpoint URL '{0}' must start with http:// or https://")]
    UnsupportedScheme(String),

    #[error("page size must be at least 1")]
    ZeroPageSize,
}
