use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum ScratchError {
    #[error("Surface must have a non-zero width and height")]
    EmptySurface,
    #[error("Surface of {0} pixels exceeds the supported maximum")]
    SurfaceTooLarge(u64),
    #[error("Reveal threshold {0} must be within (0, 1]")]
    InvalidThreshold(f64),
    #[error("Brush size {0} must be finite and positive")]
    InvalidBrush(f64),
}

pub type Result<T> = core::result::Result<T, ScratchError>;

/// Why the outcome could not be taken from the result endpoint.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Endpoint answered with status {0}")]
    Status(u16),
    #[error("Malformed result body: {0}")]
    Malformed(#[from] serde_json::Error),
}
