//! Error types for guard configuration and click handling

use thiserror::Error;

/// Errors raised while building a guard or applying its effects.
///
/// Classification itself never fails: malformed hrefs are let through.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Configuration violates a structural requirement.
    #[error("Invalid guard configuration: {0}")]
    InvalidConfig(String),

    /// Variant name did not match a built-in preset.
    #[error("Unknown guard variant: {0} (expected `admin` or `user`)")]
    UnknownVariant(String),

    /// TOML configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Redirect to the fallback location failed.
    #[error("Navigation error: {0}")]
    Navigation(String),
}

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;
