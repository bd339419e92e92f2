//! Render context
//!
//! Describes the canvas an art piece draws into: a drawing area surrounded by
//! a margin. Pieces draw in drawing-area coordinates; the gallery translates
//! by half the margin before handing over the surface.

use crate::surface::{validate_size, DrawingSurface, Rect, SurfaceError};

/// Canvas dimensions passed explicitly to every art piece
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    draw_width: f64,
    draw_height: f64,
    margin: f64,
}

impl RenderContext {
    /// Default drawing area width
    pub const DEFAULT_DRAW_WIDTH: f64 = 400.0;
    /// Default drawing area height
    pub const DEFAULT_DRAW_HEIGHT: f64 = 500.0;
    /// Default total margin (split evenly on both sides)
    pub const DEFAULT_MARGIN: f64 = 100.0;

    /// Create a context for the given drawing area and margin
    ///
    /// Fails if the drawing area is empty or the margin is negative.
    pub fn new(draw_width: f64, draw_height: f64, margin: f64) -> Result<Self, SurfaceError> {
        validate_size(draw_width, draw_height)?;
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(SurfaceError::InvalidSize {
                width: draw_width + margin,
                height: draw_height + margin,
            });
        }
        Ok(Self { draw_width, draw_height, margin })
    }

    /// Width of the drawing area
    #[inline]
    pub fn draw_width(&self) -> f64 {
        self.draw_width
    }

    /// Height of the drawing area
    #[inline]
    pub fn draw_height(&self) -> f64 {
        self.draw_height
    }

    /// Total margin
    #[inline]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Full canvas width including margin
    #[inline]
    pub fn width(&self) -> f64 {
        self.draw_width + self.margin
    }

    /// Full canvas height including margin
    #[inline]
    pub fn height(&self) -> f64 {
        self.draw_height + self.margin
    }

    /// The whole canvas in untransformed coordinates
    pub fn canvas_rect(&self) -> Rect {
        Rect::sized(self.width(), self.height())
    }

    /// The whole canvas in drawing-area coordinates
    pub fn canvas_rect_in_drawing_area(&self) -> Rect {
        let half = self.margin / 2.0;
        Rect::new(-half, -half, self.width(), self.height())
    }

    /// Translate from canvas to drawing-area coordinates
    pub fn enter_drawing_area(&self, surface: &mut dyn DrawingSurface) {
        let half = self.margin / 2.0;
        surface.translate(half, half);
    }

    /// Clear the whole canvas from inside the drawing area
    pub fn clear_drawing_area(&self, surface: &mut dyn DrawingSurface) {
        surface.clear(self.canvas_rect_in_drawing_area());
    }

    /// Center a `draw_width`-square footprint vertically in the drawing area
    pub fn center(&self, surface: &mut dyn DrawingSurface) {
        surface.translate(0.0, (self.draw_height - self.draw_width) / 2.0);
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            draw_width: Self::DEFAULT_DRAW_WIDTH,
            draw_height: Self::DEFAULT_DRAW_HEIGHT,
            margin: Self::DEFAULT_MARGIN,
        }
    }
}
