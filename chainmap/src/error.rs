use thiserror::Error;

/// Errors that can occur when configuring a map through [`crate::Builder`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The table needs at least one bucket
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// Load factor must be a finite number greater than zero
    #[error("invalid load factor: {0}")]
    InvalidLoadFactor(f64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
