//! Linien: a line grid whose vertices drift most near its middle

use isoart_core::{Parameters, RandomCursor, RandomSource};

use crate::context::RenderContext;
use crate::piece::{ArtPiece, Capabilities};
use crate::surface::DrawingSurface;

/// Cells per row
pub const CELLS_PER_ROW: usize = 20;

/// Grid of line segments drifting most near the middle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linien;

impl Linien {
    /// Row weight: rises to the middle row then falls off
    fn row_weight(row: usize, rows: usize) -> f64 {
        if row as f64 > rows as f64 / 2.0 {
            rows as f64 - row as f64 - 2.0
        } else {
            row as f64
        }
    }

    /// Column weight: rises to the middle column then falls off
    fn col_weight(col: usize) -> f64 {
        if col as f64 > CELLS_PER_ROW as f64 / 2.0 {
            CELLS_PER_ROW as f64 - col as f64 - 0.5
        } else {
            col as f64
        }
    }
}

fn segment(surface: &mut dyn DrawingSurface, from: (f64, f64), to: (f64, f64)) {
    surface.begin_path();
    surface.move_to(from.0, from.1);
    surface.line_to(to.0, to.1);
    surface.stroke();
}

impl ArtPiece for Linien {
    fn name(&self) -> &'static str {
        "linien"
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
        let rows = (CELLS_PER_ROW as f64 * (ctx.height() / ctx.width())).floor() as usize;
        if rows == 0 {
            return;
        }
        let cell_width = ctx.draw_width() / CELLS_PER_ROW as f64;
        let cell_height = ctx.draw_height() / rows as f64;
        let right_edge = cell_width * CELLS_PER_ROW as f64;

        // Current top edge of the row being drawn; the last entry is the fixed right edge
        let mut edge: Vec<(f64, f64)> = (0..=CELLS_PER_ROW)
            .map(|col| (col as f64 * cell_width, 0.0))
            .collect();

        let mut cursor = RandomCursor::new();
        for row in 0..rows {
            let row_y = row as f64 * cell_height;
            edge[CELLS_PER_ROW] = (right_edge, row_y);

            for col in 0..CELLS_PER_ROW {
                let drift = if row == rows - 1 {
                    1.0
                } else {
                    Self::row_weight(row, rows) * Self::col_weight(col) * params.a / 10.0
                };

                segment(surface, edge[col], edge[col + 1]);

                let next_x = col as f64 * cell_width + (cursor.draw(random) - 0.5) * drift;
                let next_y = row_y + cell_height + (cursor.draw(random) - 0.5) * drift;
                segment(surface, edge[col], (next_x, next_y));
                edge[col] = (next_x, next_y);
            }

            segment(surface, (right_edge, row_y), (right_edge, row_y + cell_height));
        }

        edge[CELLS_PER_ROW] = (right_edge, cell_height * rows as f64);
        for col in 0..CELLS_PER_ROW {
            segment(surface, edge[col], edge[col + 1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};
    use isoart_core::{ConstantSource, RandomPool};

    fn draw(params: Parameters, random: &mut dyn RandomSource) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        Linien.draw(&RenderContext::default(), &mut surface, &params, random);
        surface
    }

    #[test]
    fn test_segment_count() {
        let surface = draw(Parameters::NEUTRAL, &mut RandomPool::seeded("lines"));
        // Per row: horizontal and vertical per cell plus the right edge; then the bottom row
        let rows = 24;
        let expected = rows * (2 * CELLS_PER_ROW + 1) + CELLS_PER_ROW;
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::Stroke)), expected);
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_centered_draws_give_a_regular_grid() {
        let surface = draw(Parameters::new(10.0, 5.0), &mut ConstantSource(0.5));
        let line_ends: Vec<(f64, f64)> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::LineTo(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect();
        // Every vertex sits on a multiple of the cell size
        let cell_width = 400.0 / CELLS_PER_ROW as f64;
        let cell_height = 500.0 / 24.0;
        for (x, y) in line_ends {
            let cx = x / cell_width;
            let cy = y / cell_height;
            assert!((cx - cx.round()).abs() < 1e-9, "x {}", x);
            assert!((cy - cy.round()).abs() < 1e-9, "y {}", y);
        }
    }

    #[test]
    fn test_weights() {
        assert_eq!(Linien::row_weight(0, 24), 0.0);
        assert_eq!(Linien::row_weight(12, 24), 12.0);
        assert_eq!(Linien::row_weight(13, 24), 9.0);
        assert_eq!(Linien::col_weight(10), 10.0);
        assert_eq!(Linien::col_weight(19), 0.5);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = draw(Parameters::new(6.0, 5.0), &mut RandomPool::seeded("same"));
        let b = draw(Parameters::new(6.0, 5.0), &mut RandomPool::seeded("same"));
        assert_eq!(a.commands(), b.commands());
    }
}
