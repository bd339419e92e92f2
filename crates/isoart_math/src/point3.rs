//! 3D Point type

use serde::{Serialize, Deserialize};
use crate::RotationPlane;

/// 3D point with x, y, z components
///
/// Points are plain values: copying one never aliases another, and every
/// in-place operation only touches `self`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new Point3
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same point for every component
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Translate in place by `other`
    #[inline]
    pub fn translate(&mut self, other: Self) {
        *self += other;
    }

    /// Rotate in place within the given axis pair
    ///
    /// The third component is left untouched.
    #[inline]
    pub fn rotate(&mut self, plane: RotationPlane, radians: f64) {
        *self = plane.rotate(*self, radians);
    }

    /// Rotate in place within the given axis pair around `pivot`
    pub fn rotate_about(&mut self, pivot: Self, plane: RotationPlane, radians: f64) {
        *self -= pivot;
        self.rotate(plane, radians);
        *self += pivot;
    }

    /// Component-wise mean of a set of points
    ///
    /// Returns [`Point3::ZERO`] for an empty slice.
    pub fn mean(points: &[Self]) -> Self {
        if points.is_empty() {
            return Self::ZERO;
        }
        let sum = points.iter().fold(Self::ZERO, |acc, &p| acc + p);
        sum / points.len() as f64
    }

    /// Extract the components as an array
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

// Operator overloads

impl std::ops::Add for Point3 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::AddAssign for Point3 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl std::ops::Sub for Point3 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::SubAssign for Point3 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl std::ops::Mul<f64> for Point3 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Point3 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Point3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
