//! Art piece capability interface
//!
//! Every piece in the gallery is a type implementing [`ArtPiece`]. The
//! gallery hands each draw call an explicit render context, surface,
//! parameters, and random source; pieces never hold a reference back to the
//! canvas.

use bitflags::bitflags;

use isoart_core::{Parameters, RandomSource};

use crate::animation::{FrameHandle, FrameScheduler};
use crate::context::RenderContext;
use crate::surface::DrawingSurface;

bitflags! {
    /// What a piece needs from its host
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Draws through the 2D drawing surface
        const TWO_D = 1 << 0;
        /// Reads from the seeded random pool
        const RANDOM_POOL = 1 << 1;
        /// Reacts to parameter b
        const PARAMETER_B = 1 << 2;
        /// Draws further frames after the initial render
        const ANIMATED = 1 << 3;
    }
}

/// A drawable art piece
pub trait ArtPiece {
    /// Stable identifier used for selection and file names
    fn name(&self) -> &'static str;

    /// Host requirements of this piece
    fn capabilities(&self) -> Capabilities;

    /// Draw one complete render pass in drawing-area coordinates
    ///
    /// The surface transform must be balanced on return.
    fn draw(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn DrawingSurface,
        params: &Parameters,
        random: &mut dyn RandomSource,
    );

    /// True if the piece draws through the 2D surface
    fn is_2d(&self) -> bool {
        self.capabilities().contains(Capabilities::TWO_D)
    }

    /// True if the piece reads the seeded random pool
    fn uses_random_pool(&self) -> bool {
        self.capabilities().contains(Capabilities::RANDOM_POOL)
    }

    /// True if parameter b changes the drawing
    fn uses_parameter_b(&self) -> bool {
        self.capabilities().contains(Capabilities::PARAMETER_B)
    }

    /// True if frames follow the initial render pass
    fn is_animated(&self) -> bool {
        self.capabilities().contains(Capabilities::ANIMATED)
    }

    /// Start animating after a render pass
    fn activate(&mut self, _scheduler: &mut dyn FrameScheduler) {}

    /// Stop animating and cancel any pending frame
    fn deactivate(&mut self, _scheduler: &mut dyn FrameScheduler) {}

    /// Stop for good; defaults to [`ArtPiece::deactivate`]
    fn teardown(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.deactivate(scheduler);
    }

    /// Draw one animation frame; returns false for stale or unexpected handles
    fn frame(
        &mut self,
        _handle: FrameHandle,
        _ctx: &RenderContext,
        _surface: &mut dyn DrawingSurface,
        _params: &Parameters,
        _scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        false
    }
}
