//! Error types for the outer surfaces: configuration, easing names, layout.
//!
//! Event handling itself is infallible.

use thiserror::Error;

/// Errors produced while loading or validating an [`AccessoryConfig`](crate::config::AccessoryConfig).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Config source is not valid TOML or has unknown keys.
    #[error("Invalid accessory config: {0}")]
    Parse(String),

    /// An offset is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Config key that failed validation.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
}

/// Platform reported an easing curve this crate does not know.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown keyboard easing: {0:?}")]
pub struct EasingParseError(pub String);

/// Layout bridge failure.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Layout computation failed: {0}")]
    Taffy(#[from] taffy::TaffyError),
}
