//! Drawing surface interface
//!
//! A canvas-style immediate-mode 2D API. Coordinates passed to path and
//! rectangle calls are transformed by the surface's current transform at the
//! time of the call. The transform stack is scoped by `save`/`restore`; every
//! render pass must leave it balanced.

use std::fmt;
use std::io;

use isoart_core::Color;

use crate::transform::Affine2;

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new Rect
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Rect at the origin
    #[inline]
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// The four corners, clockwise from the origin corner
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.x, self.y),
            (self.x + self.width, self.y),
            (self.x + self.width, self.y + self.height),
            (self.x, self.y + self.height),
        ]
    }

    /// True if `other` lies entirely inside this rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

/// The 2D drawing interface a host provides for each render pass
pub trait DrawingSurface {
    /// Clear a region to the background
    fn clear(&mut self, region: Rect);

    /// Start a new path, discarding the current one
    fn begin_path(&mut self);

    /// Close the current subpath back to its start
    fn close_path(&mut self);

    /// Start a new subpath at (x, y)
    fn move_to(&mut self, x: f64, y: f64);

    /// Add a straight segment to (x, y)
    fn line_to(&mut self, x: f64, y: f64);

    /// Fill the current path
    fn fill(&mut self, color: Color);

    /// Stroke the current path with the default outline
    fn stroke(&mut self);

    /// Fill a rectangle without touching the current path
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle without touching the current path
    fn stroke_rect(&mut self, rect: Rect);

    /// Append a translation to the current transform
    fn translate(&mut self, dx: f64, dy: f64);

    /// Append a rotation (radians, clockwise in screen space) to the current transform
    fn rotate(&mut self, radians: f64);

    /// Replace the current transform
    fn set_transform(&mut self, transform: Affine2);

    /// Push the current transform
    fn save(&mut self);

    /// Pop the last saved transform
    fn restore(&mut self);
}

/// Error acquiring or writing a drawing surface
///
/// Surface failures are fatal initialization errors; they are reported once
/// to the host and never retried.
#[derive(Debug)]
pub enum SurfaceError {
    /// The drawing area has a non-positive or non-finite size
    InvalidSize {
        /// Requested width
        width: f64,
        /// Requested height
        height: f64,
    },
    /// Writing the rendered surface failed
    Io(io::Error),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::InvalidSize { width, height } => {
                write!(f, "Invalid surface size: {}x{}", width, height)
            }
            SurfaceError::Io(err) => write!(f, "Surface IO error: {}", err),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::InvalidSize { .. } => None,
            SurfaceError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for SurfaceError {
    fn from(err: io::Error) -> Self {
        SurfaceError::Io(err)
    }
}

/// Check that a surface size is usable
pub(crate) fn validate_size(width: f64, height: f64) -> Result<(), SurfaceError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(SurfaceError::InvalidSize { width, height })
    }
}
