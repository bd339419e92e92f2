//! Unit cube mesh generation
//!
//! A cube mesh is 30 points: six faces of five points each, the fifth point
//! closing the quadrilateral. Faces are emitted in a fixed order:
//!
//! | Face   | Lands in the isometric view as |
//! |--------|--------------------------------|
//! | top    | bottom                         |
//! | front  | back right                     |
//! | left   | back left                      |
//! | back   | front left                     |
//! | right  | front right                    |
//! | bottom | top                            |
//!
//! The vertical axis is inverted between height-map levels and render space,
//! so the base position's y component is negated before translation.

use isoart_math::{Point3, RotationPlane};

use crate::params::Parameters;
use crate::random::{RandomCursor, RandomSource};

/// Points per face (four corners plus the closing point)
pub const POINTS_PER_FACE: usize = 5;

/// Faces per cube
pub const FACES_PER_CUBE: usize = 6;

/// Points per cube mesh
pub const CUBE_POINTS: usize = POINTS_PER_FACE * FACES_PER_CUBE;

/// Divisor turning the centered parameter into a jitter magnitude
pub const JITTER_SCALE: f64 = 20.0;

/// Rotation pivot: the center of the unit cube
pub const CUBE_CENTER: Point3 = Point3::splat(0.5);

/// A single cube mesh in render space
pub type CubeMesh = [Point3; CUBE_POINTS];

const fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// The unit cube template, in face order
#[rustfmt::skip]
pub const UNIT_CUBE: CubeMesh = [
    // top
    p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 1.0, 1.0), p(0.0, 1.0, 1.0), p(0.0, 1.0, 0.0),
    // front
    p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0),
    // left
    p(0.0, 0.0, 0.0), p(0.0, 0.0, 1.0), p(0.0, 1.0, 1.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0),
    // back
    p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(1.0, 1.0, 1.0), p(0.0, 1.0, 1.0), p(0.0, 0.0, 1.0),
    // right
    p(1.0, 0.0, 0.0), p(1.0, 0.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0),
    // bottom
    p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 1.0), p(0.0, 0.0, 1.0), p(0.0, 0.0, 0.0),
];

/// Split a flat point list into faces
///
/// Trailing points that do not form a whole face are ignored.
pub fn face_chunks(points: &[Point3]) -> std::slice::ChunksExact<'_, Point3> {
    points.chunks_exact(POINTS_PER_FACE)
}

/// Per-point random offset applied to simulate a hand-drawn look
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jitter {
    magnitude: f64,
}

impl Jitter {
    /// Jitter with an explicit magnitude
    pub const fn new(magnitude: f64) -> Self {
        Self { magnitude }
    }

    /// Jitter derived from parameter a: `(a - 5) / 20`
    ///
    /// The neutral parameter gives a magnitude of exactly zero.
    pub fn from_parameters(params: &Parameters) -> Self {
        Self::new(params.a_centered() / JITTER_SCALE)
    }

    /// Scale applied to each random draw
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Draw the offset for one point
    ///
    /// Consumes three values: x, y, then the sign. The offset is added when
    /// the sign draw exceeds 0.5 and subtracted otherwise.
    fn offset<R: RandomSource + ?Sized>(&self, source: &mut R, cursor: &mut RandomCursor) -> Point3 {
        let offset = Point3::new(
            cursor.draw(source) * self.magnitude,
            cursor.draw(source) * self.magnitude,
            0.0,
        );
        if cursor.draw(source) > 0.5 {
            offset
        } else {
            -offset
        }
    }
}

/// Generates cube meshes with optional jitter and rotation
///
/// # Example
/// ```ignore
/// let mesh = CubeGenerator::new()
///     .with_rotation(0.3)
///     .generate(Point3::new(0.0, 0.8, 0.0), &mut pool, &mut cursor);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubeGenerator {
    jitter: Option<Jitter>,
    rotation: Option<f64>,
}

impl CubeGenerator {
    /// A generator producing plain unit cubes
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable per-point jitter
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = Some(jitter);
        self
    }

    /// Rotate every cube in the XZ plane around its own center
    pub fn with_rotation(mut self, radians: f64) -> Self {
        self.rotation = Some(radians);
        self
    }

    /// Jitter setting, if enabled
    pub fn jitter(&self) -> Option<Jitter> {
        self.jitter
    }

    /// Random values consumed by one [`CubeGenerator::generate`] call
    pub fn draws_per_cube(&self) -> usize {
        if self.jitter.is_some() { CUBE_POINTS * 3 } else { 0 }
    }

    /// Generate one cube with its bottom-left-front corner at `base`
    ///
    /// `base` is in grid units (column, level, depth).
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        base: Point3,
        source: &mut R,
        cursor: &mut RandomCursor,
    ) -> CubeMesh {
        let mut mesh = UNIT_CUBE;
        let base = Point3::new(base.x, -base.y, base.z);

        for point in mesh.iter_mut() {
            if let Some(radians) = self.rotation {
                point.rotate_about(CUBE_CENTER, RotationPlane::XZ, radians);
            }

            point.translate(base);

            if let Some(jitter) = self.jitter {
                *point += jitter.offset(source, cursor);
            }
        }

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ConstantSource, FixedSequence, RandomPool};

    fn approx_eq(a: Point3, b: Point3) -> bool {
        (a - b).to_array().iter().all(|c| c.abs() < 1e-9)
    }

    #[test]
    fn test_template_faces_are_closed() {
        for face in face_chunks(&UNIT_CUBE) {
            assert_eq!(face[0], face[4]);
        }
        assert_eq!(face_chunks(&UNIT_CUBE).count(), FACES_PER_CUBE);
    }

    #[test]
    fn test_template_faces_are_planar_unit_squares() {
        for face in face_chunks(&UNIT_CUBE) {
            // Exactly one axis is constant across a face
            let constant_axes = (0..3)
                .filter(|&axis| face.iter().all(|p| p.to_array()[axis] == face[0].to_array()[axis]))
                .count();
            assert_eq!(constant_axes, 1);

            // Consecutive corners are one unit apart
            for pair in face.windows(2) {
                let d = pair[1] - pair[0];
                let len: f64 = d.to_array().iter().map(|c| c.abs()).sum();
                assert_eq!(len, 1.0);
            }
        }
    }

    #[test]
    fn test_plain_cube_is_translated_template() {
        let mut cursor = RandomCursor::new();
        let mesh = CubeGenerator::new().generate(
            Point3::new(3.0, 2.0, 5.0),
            &mut ConstantSource(0.9),
            &mut cursor,
        );

        assert_eq!(mesh.len(), CUBE_POINTS);
        for (p, t) in mesh.iter().zip(UNIT_CUBE.iter()) {
            assert_eq!(*p, *t + Point3::new(3.0, -2.0, 5.0));
        }
        // No jitter means no random consumption
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_y_is_negated() {
        let mut cursor = RandomCursor::new();
        let mesh = CubeGenerator::new().generate(
            Point3::new(0.0, 4.0, 0.0),
            &mut ConstantSource(0.0),
            &mut cursor,
        );
        let min_y = mesh.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = mesh.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min_y, -4.0);
        assert_eq!(max_y, -3.0);
    }

    #[test]
    fn test_neutral_parameter_gives_zero_jitter() {
        let jitter = Jitter::from_parameters(&Parameters::NEUTRAL);
        assert_eq!(jitter.magnitude(), 0.0);

        let mut pool = RandomPool::seeded("neutral");
        let mut cursor = RandomCursor::new();
        let generator = CubeGenerator::new().with_jitter(jitter);
        let mesh = generator.generate(Point3::new(1.0, 1.0, 1.0), &mut pool, &mut cursor);

        for (p, t) in mesh.iter().zip(UNIT_CUBE.iter()) {
            assert_eq!(*p, *t + Point3::new(1.0, -1.0, 1.0));
        }
        // Draws still happen so consumption order does not depend on the parameter
        assert_eq!(cursor.index(), generator.draws_per_cube());
    }

    #[test]
    fn test_jitter_direction_per_point() {
        // Point 0: x=0.5, y=1.0, sign 0.9 (add); point 1: x=1.0, y=0.5, sign 0.1 (subtract)
        let mut values = vec![0.5, 1.0, 0.9, 1.0, 0.5, 0.1];
        values.resize(CUBE_POINTS * 3, 0.0);
        let mut source = FixedSequence(values);
        let mut cursor = RandomCursor::new();

        let mesh = CubeGenerator::new()
            .with_jitter(Jitter::new(0.2))
            .generate(Point3::ZERO, &mut source, &mut cursor);

        assert!(approx_eq(mesh[0], UNIT_CUBE[0] + Point3::new(0.1, 0.2, 0.0)));
        assert!(approx_eq(mesh[1], UNIT_CUBE[1] - Point3::new(0.2, 0.1, 0.0)));
        assert_eq!(cursor.index(), CUBE_POINTS * 3);
    }

    #[test]
    fn test_jitter_never_moves_z() {
        let mut pool = RandomPool::seeded("z");
        let mut cursor = RandomCursor::new();
        let params = Parameters::new(10.0, 5.0);
        let mesh = CubeGenerator::new()
            .with_jitter(Jitter::from_parameters(&params))
            .generate(Point3::ZERO, &mut pool, &mut cursor);
        for (p, t) in mesh.iter().zip(UNIT_CUBE.iter()) {
            assert_eq!(p.z, t.z);
            assert!((p.x - t.x).abs() <= 0.25);
        }
    }

    #[test]
    fn test_rotation_keeps_center() {
        let mut cursor = RandomCursor::new();
        let mesh = CubeGenerator::new()
            .with_rotation(0.8)
            .generate(Point3::ZERO, &mut ConstantSource(0.0), &mut cursor);

        let corners: Vec<Point3> = face_chunks(&mesh)
            .flat_map(|face| face[..4].iter().copied())
            .collect();
        assert!(approx_eq(Point3::mean(&corners), CUBE_CENTER));
    }

    #[test]
    fn test_quarter_rotation_maps_cube_onto_itself() {
        let mut cursor = RandomCursor::new();
        let mesh = CubeGenerator::new()
            .with_rotation(std::f64::consts::FRAC_PI_2)
            .generate(Point3::ZERO, &mut ConstantSource(0.0), &mut cursor);
        for p in mesh.iter() {
            assert!(UNIT_CUBE.iter().any(|t| approx_eq(*p, *t)));
        }
    }
}
