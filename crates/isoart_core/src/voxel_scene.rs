//! Voxel scene construction
//!
//! Walks a height map level by level (level outer, then depth, then column)
//! and emits one cube mesh per visible cell into a flat point list.
//!
//! A cell is skipped when it is hidden behind both its front neighbor
//! (depth + 1) and its right neighbor (column + 1), i.e. when both of those
//! columns reach more than one level above it. Grid edges never occlude.
//!
//! Faces shared by adjacent solid cubes are not deduplicated; the painter
//! sorts faces back to front, so interior faces are simply overpainted.

use isoart_math::Point3;

use crate::cube::{CubeGenerator, Jitter, CUBE_POINTS};
use crate::height_map::HeightMap;
use crate::params::Parameters;
use crate::random::{RandomCursor, RandomSource};

/// Grid position of an emitted cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Horizontal index (0 is the left edge)
    pub column: usize,
    /// Vertical level (0 is the ground)
    pub level: usize,
    /// Depth row (0 is the back)
    pub depth: usize,
}

impl GridCell {
    /// Base position of the cell in grid units (column, level, depth)
    pub fn base(&self) -> Point3 {
        Point3::new(self.column as f64, self.level as f64, self.depth as f64)
    }
}

/// True if the cell at (level, depth, column) is hidden by both its front and
/// right neighbors
pub fn is_occluded(map: &HeightMap, level: i32, depth: usize, column: usize) -> bool {
    let taller = |h: Option<i32>| h.map_or(false, |h| h > level + 1);
    let in_front = taller(map.get(depth + 1, column));
    let to_the_right = taller(map.get(depth, column + 1));
    in_front && to_the_right
}

/// Visible cubes of a voxel scene
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoxelScene {
    /// Horizontal extent the scene was built for
    pub columns: usize,
    /// Depth extent the scene was built for
    pub depth: usize,
    /// Emitted cells, in draw order
    pub cells: Vec<GridCell>,
    /// Cube meshes of all emitted cells, concatenated
    pub points: Vec<Point3>,
}

impl VoxelScene {
    /// Number of emitted cubes
    pub fn cube_count(&self) -> usize {
        self.cells.len()
    }

    /// True if no cube was emitted
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Consume the scene, returning the flat point list
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

/// Builder for voxel terrain scenes
///
/// # Example
/// ```ignore
/// let scene = VoxelSceneBuilder::cube(10)
///     .with_color(false)
///     .with_parameters(&params)
///     .generate(&mut pool, &mut cursor);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelSceneBuilder {
    columns: usize,
    depth: usize,
    levels: usize,
    starting_height: i32,
    color: bool,
    jitter: Jitter,
}

impl VoxelSceneBuilder {
    /// A builder for a grid of the given extents
    ///
    /// The starting height defaults to the number of levels.
    pub fn new(columns: usize, depth: usize, levels: usize) -> Self {
        Self {
            columns,
            depth,
            levels,
            starting_height: i32::try_from(levels).unwrap_or(i32::MAX),
            color: false,
            jitter: Jitter::new(0.0),
        }
    }

    /// A builder for an `n × n × n` grid
    pub fn cube(size: usize) -> Self {
        Self::new(size, size, size)
    }

    /// Override the starting height of the back row
    pub fn with_starting_height(mut self, height: i32) -> Self {
        self.starting_height = height;
        self
    }

    /// Color mode disables jitter; monochrome mode enables it
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the jitter explicitly (only used in monochrome mode)
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    /// Derive the jitter from the user parameters
    pub fn with_parameters(self, params: &Parameters) -> Self {
        self.with_jitter(Jitter::from_parameters(params))
    }

    /// Horizontal extent
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Depth extent
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether color mode is enabled
    pub fn color(&self) -> bool {
        self.color
    }

    /// Generate a height map and build the scene from it
    ///
    /// The height map consumes random values first, then cube jitter
    /// continues from the same cursor.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        cursor: &mut RandomCursor,
    ) -> VoxelScene {
        let map = HeightMap::generate(self.depth, self.columns, self.starting_height, source, cursor);
        self.build(&map, source, cursor)
    }

    /// Build the scene from an existing height map
    pub fn build<R: RandomSource + ?Sized>(
        &self,
        map: &HeightMap,
        source: &mut R,
        cursor: &mut RandomCursor,
    ) -> VoxelScene {
        let generator = if self.color {
            CubeGenerator::new()
        } else {
            CubeGenerator::new().with_jitter(self.jitter)
        };

        let mut scene = VoxelScene {
            columns: map.columns(),
            depth: map.depth(),
            cells: Vec::new(),
            points: Vec::new(),
        };

        for level in 0..self.levels {
            let h = i32::try_from(level).unwrap_or(i32::MAX);
            for depth in 0..map.depth() {
                for column in 0..map.columns() {
                    if is_occluded(map, h, depth, column) || h > map.height(depth, column) {
                        continue;
                    }

                    let cell = GridCell { column, level, depth };
                    let mesh = generator.generate(cell.base(), source, cursor);
                    scene.cells.push(cell);
                    scene.points.extend_from_slice(&mesh);
                }
            }
        }

        debug_assert_eq!(scene.points.len(), scene.cells.len() * CUBE_POINTS);
        log::debug!(
            "Built voxel scene: {} cubes from {}x{} map, {} points",
            scene.cube_count(),
            map.depth(),
            map.columns(),
            scene.points.len()
        );

        scene
    }
}
