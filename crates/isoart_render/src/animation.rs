//! Frame scheduling and the rotating cube animation
//!
//! The host owns the frame clock. A piece asks for the next frame through
//! [`FrameScheduler::schedule_next_frame`] and receives an opaque handle; when
//! the host fires that handle the piece draws one frame and schedules the
//! next. Deactivation cancels the pending handle, so no stale frame ever
//! paints over a newer render pass.

use isoart_core::{
    ConstantSource, CubeGenerator, Palette, Parameters, Point3, RandomCursor, CUBE_POINTS,
};

use crate::context::RenderContext;
use crate::painter::{IsoPainter, IsoProjection};
use crate::surface::DrawingSurface;

/// Opaque handle for a scheduled frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Host-provided frame clock
pub trait FrameScheduler {
    /// Request one more frame
    fn schedule_next_frame(&mut self) -> FrameHandle;

    /// Cancel a pending frame; cancelling an unknown handle is a no-op
    fn cancel(&mut self, handle: FrameHandle);
}

/// Animation lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    /// No frame pending
    #[default]
    Idle,
    /// Exactly one frame pending
    Animating {
        /// Handle of the pending frame
        pending: FrameHandle,
    },
    /// Torn down; never animates again
    Stopped,
}

/// A single unit cube spinning about its vertical axis
#[derive(Clone, Debug, Default)]
pub struct RotatingCube {
    state: AnimationState,
    radians: f64,
}

impl RotatingCube {
    /// Base position of the cube in grid units
    pub const BASE: Point3 = Point3::new(0.0, 0.8, 0.0);

    /// Rotation speed factor per frame
    pub const SPEED: f64 = 0.01;

    /// Parameter value at which the cube stands still
    pub const STILL_PARAMETER: f64 = 4.0;

    /// A cube at zero rotation, not animating
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Accumulated rotation in radians
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// True while a frame is pending
    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Rotation step per frame for the given parameters
    pub fn step(params: &Parameters) -> f64 {
        Self::SPEED * (params.a - Self::STILL_PARAMETER)
    }

    /// Idle -> Animating; no-op while animating or stopped
    pub fn activate(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let AnimationState::Idle = self.state {
            let pending = scheduler.schedule_next_frame();
            log::debug!("Rotating cube activated, frame {:?} pending", pending);
            self.state = AnimationState::Animating { pending };
        }
    }

    /// Animating -> Idle, cancelling the pending frame
    pub fn deactivate(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let AnimationState::Animating { pending } = self.state {
            scheduler.cancel(pending);
            log::debug!("Rotating cube deactivated, frame {:?} cancelled", pending);
            self.state = AnimationState::Idle;
        }
    }

    /// Any state -> Stopped, cancelling the pending frame
    ///
    /// Later calls to [`RotatingCube::activate`] are ignored.
    pub fn teardown(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.deactivate(scheduler);
        self.state = AnimationState::Stopped;
    }

    /// True once torn down
    pub fn is_stopped(&self) -> bool {
        self.state == AnimationState::Stopped
    }

    /// Handle a fired frame
    ///
    /// Returns false and draws nothing if `handle` is not the pending frame.
    pub fn tick(
        &mut self,
        handle: FrameHandle,
        ctx: &RenderContext,
        surface: &mut dyn DrawingSurface,
        params: &Parameters,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        match self.state {
            AnimationState::Animating { pending } if pending == handle => {}
            _ => {
                log::trace!("Ignoring stale frame {:?}", handle);
                return false;
            }
        }

        ctx.clear_drawing_area(surface);
        surface.save();
        ctx.center(surface);
        self.paint_frame(ctx, surface);
        surface.restore();

        self.radians += Self::step(params);
        let pending = scheduler.schedule_next_frame();
        self.state = AnimationState::Animating { pending };
        true
    }

    /// Paint the cube at its current rotation with a 1x1 footprint
    pub fn paint_frame(&self, ctx: &RenderContext, surface: &mut dyn DrawingSurface) {
        // No jitter, so nothing is drawn from the source
        let mut cursor = RandomCursor::new();
        let mesh = CubeGenerator::new()
            .with_rotation(self.radians)
            .generate(Self::BASE, &mut ConstantSource(0.0), &mut cursor);
        debug_assert_eq!(cursor.index(), 0);
        debug_assert_eq!(mesh.len(), CUBE_POINTS);

        let painter = IsoPainter::new(
            IsoProjection::new(1, 1, ctx.draw_width()),
            Palette::monochrome(),
        );
        painter.paint(surface, &mesh);
    }
}
