//! Core types for the isoart gallery
//!
//! This crate provides the deterministic generators behind the isometric
//! art pieces:
//!
//! - [`RandomPool`] - Seeded, index-addressable stream of unit-interval floats
//! - [`RandomCursor`] - Explicit read position threaded through every generator
//! - [`Parameters`] - The two user parameters, centered at 5
//! - [`HeightMap`] - Depth-major grid of column heights
//! - [`CubeGenerator`] - 30-point unit cube meshes with jitter and rotation
//! - [`VoxelSceneBuilder`] - Walks a height map and emits visible cube meshes
//! - [`Palette`] - Hand-picked fill colors, cycled across faces
//! - [`GalleryPreset`] - Loadable/saveable list of artworks

mod random;
mod params;
mod height_map;
mod cube;
mod voxel_scene;
mod palette;
mod preset;

pub use random::{RandomSource, RandomPool, RandomCursor, ConstantSource, FixedSequence};
pub use params::Parameters;
pub use height_map::HeightMap;
pub use cube::{
    CubeGenerator, CubeMesh, Jitter, face_chunks, CUBE_CENTER, CUBE_POINTS, FACES_PER_CUBE,
    JITTER_SCALE, POINTS_PER_FACE, UNIT_CUBE,
};
pub use voxel_scene::{VoxelScene, VoxelSceneBuilder, GridCell, is_occluded};
pub use palette::{Color, Palette, PALETTES};
pub use preset::{Artwork, GalleryPreset, PresetLoadError, PresetSaveError};

// Re-export commonly used types from isoart_math for convenience
pub use isoart_math::{Point3, RotationPlane};
