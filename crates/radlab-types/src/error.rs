//! Error types for the radlab engine.
//!
//! All crates return `RadlabResult<T>` from fallible operations.
//! The per-tick simulation path never fails; these errors belong to
//! setup, validation and I/O.

use thiserror::Error;

/// Unified error type for the radlab engine.
#[derive(Debug, Error)]
pub enum RadlabError {
    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scene geometry is degenerate (zero-size box, zero-length axis).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Shield material name is not in the database.
    #[error("Unknown shield material: '{0}'")]
    UnknownMaterial(String),

    /// Shield id does not refer to a placed shield.
    #[error("Unknown shield id: {0}")]
    UnknownShield(u32),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, RadlabError>`.
pub type RadlabResult<T> = Result<T, RadlabError>;
