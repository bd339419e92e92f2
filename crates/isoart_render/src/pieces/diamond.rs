//! Diamond: a sine-spaced web of lines around the drawing center

use isoart_core::{Parameters, RandomSource};

use crate::context::RenderContext;
use crate::piece::{ArtPiece, Capabilities};
use crate::surface::DrawingSurface;

/// Half extent of the web in pixels
pub const SCALE: f64 = 200.0;

/// Lattice of sine-spaced lines between the two axes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diamond;

impl Diamond {
    /// Lines per axis for a parameter value
    pub fn steps(params: &Parameters) -> usize {
        (2.0 * params.a).ceil().max(0.0) as usize
    }
}

impl ArtPiece for Diamond {
    fn name(&self) -> &'static str {
        "diamond"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TWO_D
    }

    fn draw(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn DrawingSurface,
        params: &Parameters,
        _random: &mut dyn RandomSource,
    ) {
        let steps = Self::steps(params);
        surface.save();
        surface.translate(ctx.draw_width() / 2.0, ctx.draw_height() / 2.0);
        for i in 0..steps {
            for j in 0..steps {
                surface.begin_path();
                surface.move_to((i as f64).sin() * SCALE, 0.0);
                surface.line_to(0.0, (j as f64).sin() * SCALE);
                surface.stroke();
            }
        }
        surface.restore();
    }
}
