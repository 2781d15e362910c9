//! Error type for wheel rendering and color parsing.

use thiserror::Error;

/// Errors raised by the host-facing parts of the crate.
///
/// The geometry itself is total and never fails; these cover rendering the
/// preview, writing it out and parsing user-supplied colors.
#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid color '{0}' (expected a name like 'red' or '#rrggbb')")]
    InvalidColor(String),

    #[error("Surface size {0} is too large")]
    InvalidSurfaceSize(usize),
}

pub type Result<T> = std::result::Result<T, WheelError>;
