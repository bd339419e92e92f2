//! Axis-pair rotations in 3D
//!
//! A rotation by θ in the (a, b) plane applies the standard 2D rotation
//! matrix to the two named components:
//!
//! ```text
//! a' = a·cos θ − b·sin θ
//! b' = a·sin θ + b·cos θ
//! ```
//!
//! The remaining component is unchanged.

use crate::Point3;

/// The 3 rotation planes in 3D space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPlane {
    /// XZ plane - rotation around the Y axis
    XZ,
    /// XY plane - rotation around the Z axis
    XY,
    /// YZ plane - rotation around the X axis
    YZ,
}

impl RotationPlane {
    /// Rotate `p` by `radians` in this plane
    #[inline]
    pub fn rotate(self, p: Point3, radians: f64) -> Point3 {
        match self {
            RotationPlane::XZ => rotate_xz(p, radians),
            RotationPlane::XY => rotate_xy(p, radians),
            RotationPlane::YZ => rotate_yz(p, radians),
        }
    }
}

#[inline]
fn rotate_pair(a: f64, b: f64, radians: f64) -> (f64, f64) {
    let (sin, cos) = radians.sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}

fn rotate_xz(p: Point3, radians: f64) -> Point3 {
    let (x, z) = rotate_pair(p.x, p.z, radians);
    Point3::new(x, p.y, z)
}

fn rotate_xy(p: Point3, radians: f64) -> Point3 {
    let (x, y) = rotate_pair(p.x, p.y, radians);
    Point3::new(x, y, p.z)
}

fn rotate_yz(p: Point3, radians: f64) -> Point3 {
    let (y, z) = rotate_pair(p.y, p.z, radians);
    Point3::new(p.x, y, z)
}
