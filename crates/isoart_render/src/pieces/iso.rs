//! Isometric voxel pieces

use isoart_core::{Palette, Parameters, RandomCursor, RandomSource, VoxelSceneBuilder};

use crate::animation::{FrameHandle, FrameScheduler, RotatingCube};
use crate::context::RenderContext;
use crate::painter::{IsoPainter, IsoProjection};
use crate::piece::{ArtPiece, Capabilities};
use crate::surface::DrawingSurface;

/// Cubes per grid side
pub const GRID_SIZE: usize = 10;

/// Voxel terrain, monochrome with jitter or colored without
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsoCube {
    color: bool,
}

impl IsoCube {
    /// White faces, jittered by parameter a
    pub fn monochrome() -> Self {
        Self { color: false }
    }

    /// Palette faces selected by parameter a, no jitter
    pub fn colored() -> Self {
        Self { color: true }
    }
}

impl ArtPiece for IsoCube {
    fn name(&self) -> &'static str {
        if self.color {
            "iso-cube-color"
        } else {
            "iso-cube"
        }
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
        let mut cursor = RandomCursor::new();
        let scene = VoxelSceneBuilder::cube(GRID_SIZE)
            .with_color(self.color)
            .with_parameters(params)
            .generate(random, &mut cursor);

        let painter = IsoPainter::new(
            IsoProjection::new(scene.columns, scene.depth, ctx.draw_width()),
            Palette::for_mode(self.color, params.a),
        );
        painter.paint(surface, &scene.points);
    }
}

/// A single spinning cube, animated frame by frame
#[derive(Clone, Debug, Default)]
pub struct IsoCubeRotate {
    cube: RotatingCube,
}

impl IsoCubeRotate {
    /// A cube at rest, not yet animating
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtPiece for IsoCubeRotate {
    fn name(&self) -> &'static str {
        "iso-cube-rotate"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TWO_D | Capabilities::ANIMATED
    }

    /// The initial pass paints the current rotation; later frames come from
    /// [`ArtPiece::frame`]
    fn draw(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn DrawingSurface,
        _params: &Parameters,
        _random: &mut dyn RandomSource,
    ) {
        surface.save();
        ctx.center(surface);
        self.cube.paint_frame(ctx, surface);
        surface.restore();
    }

    fn activate(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.cube.activate(scheduler);
    }

    fn deactivate(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.cube.deactivate(scheduler);
    }

    fn teardown(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.cube.teardown(scheduler);
    }

    fn frame(
        &mut self,
        handle: FrameHandle,
        ctx: &RenderContext,
        surface: &mut dyn DrawingSurface,
        params: &Parameters,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        self.cube.tick(handle, ctx, surface, params, scheduler)
    }
}
