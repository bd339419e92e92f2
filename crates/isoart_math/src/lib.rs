//! 3D Mathematics Library
//!
//! This crate provides the small amount of 3D math the isoart generators need.
//!
//! ## Core Types
//!
//! - [`Point3`] - Mutable 3D coordinate with x, y, z components
//! - [`RotationPlane`] - The three axis pairs a point can be rotated in
//! - [`Mat3`] - 3x3 matrix, including the fixed isometric basis

mod point3;
mod rotation;
pub mod mat3;

pub use point3::Point3;
pub use rotation::RotationPlane;
pub use mat3::Mat3;
