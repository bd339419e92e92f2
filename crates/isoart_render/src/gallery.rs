//! Gallery of art pieces
//!
//! The Gallery owns everything a render pass needs besides the surface and
//! the frame clock:
//! - the render context (canvas size and margin)
//! - the piece list and the selected piece
//! - the current parameters
//! - the current seed and its random pool
//!
//! # Example
//! ```ignore
//! let mut gallery = Gallery::new(RenderContext::default());
//! gallery.set_seed("morning");
//! gallery.select_by_name("iso-cube-color", &mut scheduler)?;
//! gallery.render(&mut surface, &mut scheduler);
//!
//! // Host frame loop
//! gallery.frame(handle, &mut surface, &mut scheduler);
//! ```

use isoart_core::{Parameters, RandomPool};

use crate::animation::{FrameHandle, FrameScheduler};
use crate::context::RenderContext;
use crate::piece::ArtPiece;
use crate::pieces;
use crate::surface::DrawingSurface;
use crate::transform::Affine2;

/// Piece selection and render passes
pub struct Gallery {
    ctx: RenderContext,
    pieces: Vec<Box<dyn ArtPiece>>,
    selected: usize,
    params: Parameters,
    seed: String,
    pool: RandomPool,
}

impl Gallery {
    /// A gallery with every built-in piece, the first one selected
    pub fn new(ctx: RenderContext) -> Self {
        Self {
            ctx,
            pieces: pieces::all(),
            selected: 0,
            params: Parameters::default(),
            seed: String::new(),
            pool: RandomPool::seeded(""),
        }
    }

    /// A gallery with a custom piece list
    pub fn with_pieces(
        ctx: RenderContext,
        pieces: Vec<Box<dyn ArtPiece>>,
    ) -> Result<Self, GalleryError> {
        if pieces.is_empty() {
            return Err(GalleryError::NoPieces);
        }
        Ok(Self {
            pieces,
            ..Self::new(ctx)
        })
    }

    /// Render context
    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Names of all pieces, in order
    pub fn piece_names(&self) -> Vec<&'static str> {
        self.pieces.iter().map(|p| p.name()).collect()
    }

    /// Number of pieces
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Always false; a gallery holds at least one piece
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Index of the selected piece
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected piece
    pub fn selected(&self) -> &dyn ArtPiece {
        self.pieces[self.selected].as_ref()
    }

    /// Current parameters
    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// Current seed as supplied by the host
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The pool for the current seed
    pub fn pool(&self) -> &RandomPool {
        &self.pool
    }

    /// Select a piece by index, cancelling any pending frame of the old one
    pub fn select(
        &mut self,
        index: usize,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<(), GalleryError> {
        if index >= self.pieces.len() {
            return Err(GalleryError::IndexOutOfRange(index));
        }
        self.pieces[self.selected].deactivate(scheduler);
        self.selected = index;
        log::info!("Selected piece '{}'", self.pieces[index].name());
        Ok(())
    }

    /// Select a piece by name
    pub fn select_by_name(
        &mut self,
        name: &str,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<(), GalleryError> {
        let index = self
            .pieces
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| GalleryError::UnknownPiece(name.to_string()))?;
        self.select(index, scheduler)
    }

    /// Replace the parameters (clamped into range)
    pub fn set_parameters(&mut self, a: f64, b: f64) {
        self.params = Parameters::new(a, b);
    }

    /// Rebuild the random pool if the seed changed
    ///
    /// Returns true if the pool was replaced.
    pub fn set_seed(&mut self, seed: &str) -> bool {
        if seed == self.seed {
            return false;
        }
        log::info!("Seed changed from '{}' to '{}'", self.seed, seed);
        self.seed = seed.to_string();
        self.pool = RandomPool::seeded(seed);
        true
    }

    /// Draw the selected piece from scratch
    ///
    /// Cancels any pending frame, clears the whole canvas, and draws inside the
    /// margin. Animated pieces are activated afterwards.
    pub fn render(&mut self, surface: &mut dyn DrawingSurface, scheduler: &mut dyn FrameScheduler) {
        let ctx = self.ctx;
        let params = self.params;
        let piece = &mut self.pieces[self.selected];
        piece.deactivate(scheduler);

        surface.set_transform(Affine2::IDENTITY);
        surface.clear(ctx.canvas_rect());

        surface.save();
        ctx.enter_drawing_area(surface);
        piece.draw(&ctx, surface, &params, &mut self.pool);
        surface.restore();

        log::debug!(
            "Rendered '{}' (seed '{}', a = {}, b = {})",
            piece.name(),
            self.seed,
            params.a,
            params.b
        );

        if piece.is_animated() {
            piece.activate(scheduler);
        }
    }

    /// Route a fired frame to the selected piece
    ///
    /// Returns false if the handle was stale and nothing was drawn.
    pub fn frame(
        &mut self,
        handle: FrameHandle,
        surface: &mut dyn DrawingSurface,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        let ctx = self.ctx;
        let params = self.params;
        let piece = &mut self.pieces[self.selected];

        surface.set_transform(Affine2::IDENTITY);
        surface.save();
        ctx.enter_drawing_area(surface);
        let drawn = piece.frame(handle, &ctx, surface, &params, scheduler);
        surface.restore();
        drawn
    }

    /// Stop every piece for good
    ///
    /// Pending frames are cancelled and animated pieces ignore later render
    /// passes' activation.
    pub fn teardown(&mut self, scheduler: &mut dyn FrameScheduler) {
        for piece in &mut self.pieces {
            piece.teardown(scheduler);
        }
        log::debug!("Gallery torn down");
    }
}

/// Error selecting a piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// No piece has this name
    UnknownPiece(String),
    /// Index past the end of the piece list
    IndexOutOfRange(usize),
    /// A gallery needs at least one piece
    NoPieces,
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::UnknownPiece(name) => write!(f, "Unknown art piece: {}", name),
            GalleryError::IndexOutOfRange(i) => write!(f, "Art piece index out of range: {}", i),
            GalleryError::NoPieces => write!(f, "Gallery has no pieces"),
        }
    }
}

impl std::error::Error for GalleryError {}
