//! Driver errors
//!
//! [`Error`] is returned by every [`Display`](crate::display::Display)
//! operation. It carries either the interface's own error or a plane that
//! is too short to stream. [`CanvasError`] is the narrower failure of
//! wrapping a buffer as a [`Canvas`](crate::canvas::Canvas) and converts
//! into [`Error`] with `?`.
//!
//! ```
//! use il0373::{BUFFER_SIZE, Canvas, CanvasError, Rotation};
//!
//! let result = Canvas::new([0u8; 16], Rotation::Rotate0);
//! assert!(matches!(
//!     result,
//!     Err(CanvasError::BufferTooSmall { required: BUFFER_SIZE, provided: 16 })
//! ));
//! ```

use crate::interface::DisplayInterface;

/// Failure of a display operation, generic over the interface in use
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// The bus, a pin, or the busy wait failed
    Interface(I::Error),
    /// A plane shorter than [`BUFFER_SIZE`](crate::config::BUFFER_SIZE)
    BufferTooSmall {
        /// Bytes in one full plane
        required: usize,
        /// Bytes handed in
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "display interface failed: {e:?}"),
            Error::BufferTooSmall { required, provided } => write!(
                f,
                "plane holds {provided} bytes but the panel needs {required}"
            ),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<CanvasError> for Error<I> {
    fn from(err: CanvasError) -> Self {
        match err {
            CanvasError::BufferTooSmall { required, provided } => {
                Error::BufferTooSmall { required, provided }
            }
        }
    }
}

/// Buffer rejected by [`Canvas::new`](crate::canvas::Canvas::new)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// The buffer cannot hold a full plane
    BufferTooSmall { required: usize, provided: usize },
}

impl core::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CanvasError::BufferTooSmall { required, provided } => write!(
                f,
                "canvas buffer holds {provided} bytes but a plane needs {required}"
            ),
        }
    }
}

impl core::error::Error for CanvasError {}
