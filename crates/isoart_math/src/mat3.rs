//! 3x3 Matrix utilities
//!
//! Holds the fixed oblique isometric basis used to project render-space
//! points before they are painted:
//!
//! ```text
//! x' = √3·x        − √3·z
//! y' =    x + 2·y  +    z
//! z' = √2·x − √2·y + √2·z
//! ```
//!
//! x' and y' become screen coordinates, z' is only used for depth sorting.

use std::f64::consts::SQRT_2;

use crate::Point3;

/// √3, used by the isometric basis and by screen-space fitting
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// 3x3 matrix type (row-major)
pub type Mat3 = [[f64; 3]; 3];

/// The isometric projection basis
pub const ISOMETRIC: Mat3 = [
    [SQRT_3, 0.0, -SQRT_3],
    [1.0, 2.0, 1.0],
    [SQRT_2, -SQRT_2, SQRT_2],
];

/// Transform a point by a 3x3 matrix
///
/// result = M * p
#[inline]
pub fn transform(m: Mat3, p: Point3) -> Point3 {
    Point3::new(
        m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z,
        m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z,
        m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z,
    )
}

/// Project a render-space point with the isometric basis
#[inline]
pub fn to_isometric(p: Point3) -> Point3 {
    transform(ISOMETRIC, p)
}
