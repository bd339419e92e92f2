//! Schotter: a grid of squares that tumbles more toward the bottom

use isoart_core::{Parameters, RandomCursor, RandomSource};

use crate::context::RenderContext;
use crate::piece::{ArtPiece, Capabilities};
use crate::surface::{DrawingSurface, Rect};

/// Squares per row
pub const SQUARES_PER_ROW: usize = 20;

/// Base rotation per unit of disorder
const ANGLE_FACTOR: f64 = 0.01;

/// Parameter value at which disorder grows by one unit per row
const DISORDER_DIVISOR: f64 = 7.5;

/// Grid of squares growing more disordered row by row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Schotter;

impl ArtPiece for Schotter {
    fn name(&self) -> &'static str {
        "schotter"
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
        let per_row = SQUARES_PER_ROW as f64;
        let per_col = per_row * (ctx.height() / ctx.width());
        let rect_width = ctx.draw_width() / per_row;
        let rect_height = ctx.draw_height() / per_col;
        let rows = per_col.ceil() as usize;

        let mut cursor = RandomCursor::new();
        for row in 0..rows {
            let disorder = row as f64 * params.a / DISORDER_DIVISOR;
            let angle = ANGLE_FACTOR * disorder;

            for col in 0..SQUARES_PER_ROW {
                let x = col as f64 * rect_width;
                let y = row as f64 * rect_height;
                let cx = x + rect_width / 2.0;
                let cy = y + rect_height / 2.0;

                surface.save();
                surface.translate(cx, cy);
                if cursor.draw(random) > 0.5 {
                    surface.rotate(angle);
                } else {
                    surface.rotate(-angle);
                }
                surface.translate(-cx, -cy);

                let dx = cursor.draw(random) * disorder;
                let dy = cursor.draw(random) * disorder;
                surface.translate(dx, dy);
                surface.stroke_rect(Rect::new(x, y, rect_width, rect_height));
                surface.restore();
            }
        }
        log::trace!("Schotter drew {} squares", rows * SQUARES_PER_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};
    use isoart_core::ConstantSource;

    #[test]
    fn test_square_count() {
        let mut surface = RecordingSurface::new();
        Schotter.draw(
            &RenderContext::default(),
            &mut surface,
            &Parameters::NEUTRAL,
            &mut ConstantSource(0.7),
        );
        // 600 / 500 * 20 = 24 rows
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::StrokeRect(_))), 24 * 20);
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_first_row_is_straight() {
        let mut surface = RecordingSurface::new();
        Schotter.draw(
            &RenderContext::default(),
            &mut surface,
            &Parameters::new(10.0, 5.0),
            &mut ConstantSource(0.7),
        );
        let rotations: Vec<f64> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rotate(r) => Some(*r),
                _ => None,
            })
            .collect();
        assert!(rotations[..SQUARES_PER_ROW].iter().all(|r| *r == 0.0));
        assert!(rotations[SQUARES_PER_ROW] > 0.0);
    }

    #[test]
    fn test_low_draw_rotates_counterclockwise() {
        let mut surface = RecordingSurface::new();
        Schotter.draw(
            &RenderContext::default(),
            &mut surface,
            &Parameters::new(7.5, 5.0),
            &mut ConstantSource(0.2),
        );
        let last_rotation = surface
            .commands()
            .iter()
            .rev()
            .find_map(|c| match c {
                DrawCommand::Rotate(r) => Some(*r),
                _ => None,
            });
        // Row 23 at parameter 7.5 has disorder 23
        let last_rotation = last_rotation.unwrap();
        assert!((last_rotation + 0.23).abs() < 1e-12);
    }

    #[test]
    fn test_zero_parameter_is_a_clean_grid() {
        let mut surface = RecordingSurface::new();
        Schotter.draw(
            &RenderContext::default(),
            &mut surface,
            &Parameters::new(0.0, 5.0),
            &mut ConstantSource(0.9),
        );
        assert!(surface.commands().iter().all(|c| match c {
            DrawCommand::Rotate(r) => *r == 0.0,
            _ => true,
        }));
    }
}
