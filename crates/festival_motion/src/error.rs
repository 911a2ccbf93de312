//! Error types for festival_motion

use thiserror::Error;

/// Errors that can occur when constructing motion components
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Header geometry that cannot produce a collapsing header
    #[error("invalid header geometry: {0}")]
    InvalidGeometry(String),

    /// Sheet configuration that cannot classify a drag
    #[error("invalid sheet config: {0}")]
    InvalidSheetConfig(String),
}

/// Result type for festival_motion operations
pub type Result<T> = std::result::Result<T, MotionError>;
