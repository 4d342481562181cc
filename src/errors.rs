use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("attempted to normalize a zero-length or non-finite vector")]
    DegenerateVector,
    #[error("viewport has no pixels: {width}x{height}")]
    EmptyViewport { width: usize, height: usize },
    #[error("primitive {index} is invalid: {reason}")]
    InvalidPrimitive { index: usize, reason: String },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
