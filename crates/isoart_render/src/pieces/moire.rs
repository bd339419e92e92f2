//! Moiré pieces: two identical dot fields, the second one rotated
//!
//! Both fields read the pool from index 0, so they are exact copies and
//! the interference pattern comes only from the transform between them.

use isoart_core::{Color, Parameters, RandomCursor, RandomSource};

use crate::context::RenderContext;
use crate::piece::{ArtPiece, Capabilities};
use crate::surface::{DrawingSurface, Rect};

/// Dots per field
pub const DOTS: usize = 6000;

/// Dot edge length in pixels
pub const DOT_SIZE: f64 = 3.0;

/// Fill the drawing area with one field of dots
fn dot_field(ctx: &RenderContext, surface: &mut dyn DrawingSurface, random: &mut dyn RandomSource) {
    let mut cursor = RandomCursor::new();
    for _ in 0..DOTS {
        let x = cursor.draw(random) * ctx.draw_width();
        let y = cursor.draw(random) * ctx.draw_height();
        surface.fill_rect(Rect::new(x, y, DOT_SIZE, DOT_SIZE), Color::BLACK);
    }
}

/// Rotate the surface about the drawing center
fn rotate_about_center(ctx: &RenderContext, surface: &mut dyn DrawingSurface, radians: f64) {
    let cx = ctx.draw_width() / 2.0;
    let cy = ctx.draw_height() / 2.0;
    surface.translate(cx, cy);
    surface.rotate(radians);
    surface.translate(-cx, -cy);
}

/// Second field rotated by an angle set by parameter a
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Moire1;

impl Moire1 {
    /// Radians per unit of parameter a
    pub const ANGLE_FACTOR: f64 = 0.006;
}

impl ArtPiece for Moire1 {
    fn name(&self) -> &'static str {
        "moire-1"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TWO_D | Capabilities::RANDOM_POOL
    }

    fn draw(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn DrawingSurface,
        params: &Parameters,
        random: &mut dyn RandomSource,
    ) {
        dot_field(ctx, surface, random);

        surface.save();
        rotate_about_center(ctx, surface, params.a * Self::ANGLE_FACTOR);
        dot_field(ctx, surface, random);
        surface.restore();
    }
}

/// Second field at a fixed rotation, shifted sideways by parameter a
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Moire2;

impl Moire2 {
    /// Fixed rotation of the second field
    pub const ANGLE: f64 = 0.03;

    /// Horizontal pixels per unit of parameter a away from the midpoint
    pub const SHIFT_FACTOR: f64 = 2.0;
}

impl ArtPiece for Moire2 {
    fn name(&self) -> &'static str {
        "moire-2"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TWO_D | Capabilities::RANDOM_POOL
    }

    fn draw(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn DrawingSurface,
        params: &Parameters,
        random: &mut dyn RandomSource,
    ) {
        dot_field(ctx, surface, random);

        surface.save();
        rotate_about_center(ctx, surface, Self::ANGLE);
        surface.translate(params.a_centered() * Self::SHIFT_FACTOR, 0.0);
        dot_field(ctx, surface, random);
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};
    use isoart_core::RandomPool;

    fn fill_rects(surface: &RecordingSurface) -> Vec<Rect> {
        surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect(r, _) => Some(*r),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_fields_are_identical_copies() {
        let mut surface = RecordingSurface::new();
        Moire1.draw(
            &RenderContext::default(),
            &mut surface,
            &Parameters::NEUTRAL,
            &mut RandomPool::seeded("moire"),
        );
        let rects = fill_rects(&surface);
        assert_eq!(rects.len(), 2 * DOTS);
        assert_eq!(rects[..DOTS], rects[DOTS..]);
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_dots_stay_in_drawing_area() {
        let mut surface = RecordingSurface::new();
        Moire2.draw(
            &RenderContext::default(),
            &mut surface,
            &Parameters::NEUTRAL,
            &mut RandomPool::seeded("bounds"),
        );
        for r in fill_rects(&surface) {
            assert!(r.x >= 0.0 && r.x < 400.0);
            assert!(r.y >= 0.0 && r.y < 500.0);
            assert_eq!(r.width, DOT_SIZE);
        }
    }

    #[test]
    fn test_moire1_rotation_follows_parameter() {
        let mut surface = RecordingSurface::new();
        Moire1.draw(
            &RenderContext::default(),
            &mut surface,
            &Parameters::new(10.0, 5.0),
            &mut RandomPool::seeded("angle"),
        );
        assert!(surface.commands().contains(&DrawCommand::Rotate(10.0 * Moire1::ANGLE_FACTOR)));
    }

    #[test]
    fn test_moire2_shift_follows_parameter() {
        let mut surface = RecordingSurface::new();
        Moire2.draw(
            &RenderContext::default(),
            &mut surface,
            &Parameters::new(8.0, 5.0),
            &mut RandomPool::seeded("shift"),
        );
        assert!(surface.commands().contains(&DrawCommand::Rotate(Moire2::ANGLE)));
        assert!(surface.commands().contains(&DrawCommand::Translate(6.0, 0.0)));
    }
}
