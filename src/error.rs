use thiserror::Error;

/// Smallest allowed width or height of a box.
pub const MIN_DIMENSION: usize = 3;
/// Largest allowed width or height of a box, one letter per row or column.
pub const MAX_DIMENSION: usize = 26;

/// Errors raised while building or querying a mirror box.
///
/// Every variant aborts the current run; nothing is retried or substituted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MirrorBoxError {
    #[error("invalid {axis} {value}: must be between {} and {}", MIN_DIMENSION, MAX_DIMENSION)]
    InvalidDimension { axis: &'static str, value: String },

    #[error("invalid mirror description {0:?}")]
    InvalidMirrorDescription(String),

    #[error("invalid direction ({dx}, {dy}): components must be -1, 0 or 1 and not both zero")]
    InvalidDirection { dx: i32, dy: i32 },

    #[error("coordinate ({x}, {y}) is outside the {width}x{height} box")]
    OutOfBounds { x: i64, y: i64, width: usize, height: usize },

    #[error("invalid edge descriptor {0:?}")]
    InvalidEdgeDescriptor(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MirrorBoxError {
    fn from(err: serde_json::Error) -> Self {
        MirrorBoxError::Config(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MirrorBoxError>;
