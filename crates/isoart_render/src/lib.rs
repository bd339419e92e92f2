//! 2D Rendering Library
//!
//! This crate turns generated scenes into drawing calls on a 2D surface.
//!
//! ## Key Components
//!
//! - [`surface::DrawingSurface`] - Canvas-style drawing interface the host provides
//! - [`context::RenderContext`] - Canvas dimensions, margin, and centering
//! - [`painter::IsoPainter`] - Isometric projection, depth sort, and face painting
//! - [`piece::ArtPiece`] - Capability interface shared by every art piece
//! - [`animation::RotatingCube`] - Idle/Animating state machine with a cancellable frame
//! - [`gallery::Gallery`] - Piece selection, seed tracking, and render passes
//!
//! ## Surfaces
//!
//! [`svg::SvgSurface`] renders to an SVG document; [`recording::RecordingSurface`]
//! records every call for inspection.

pub mod surface;
pub mod transform;
pub mod context;
pub mod recording;
pub mod svg;
pub mod painter;
pub mod piece;
pub mod pieces;
pub mod animation;
pub mod gallery;

pub use surface::{DrawingSurface, Rect, SurfaceError};
pub use transform::Affine2;
pub use context::RenderContext;
pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;
pub use painter::{sort_faces, Face, IsoPainter, IsoProjection};
pub use piece::{ArtPiece, Capabilities};
pub use animation::{AnimationState, FrameHandle, FrameScheduler, RotatingCube};
pub use gallery::{Gallery, GalleryError};

// Re-export core types for convenience
pub use isoart_core::{Color, Palette, Parameters, RandomPool, RandomSource};
