/// Validation errors raised by the layout engine.
///
/// Only two inputs are ever rejected: segment weights and border
/// thickness. Everything else is clamped.
use thiserror::Error;

/// Errors produced while building or mutating a progress bar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A segment weight was NaN, infinite, zero or negative.
    #[error("segment weight {0} is out of range: must be finite and greater than 0")]
    OutOfRange(f64),

    /// A border side was negative.
    #[error("'{left},{top},{right},{bottom}' is not a valid value for the border thickness")]
    InvalidArgument {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },

    /// A bar description could not be parsed.
    #[error("invalid bar configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
