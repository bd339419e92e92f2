//! 2D affine transforms
//!
//! Uses the canvas convention `[a, b, c, d, e, f]`:
//!
//! ```text
//! x' = a·x + c·y + e
//! y' = b·x + d·y + f
//! ```
//!
//! `translate` and `rotate` post-multiply, so they apply to coordinates
//! before the existing transform, exactly like a canvas context.

/// 2D affine transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2 {
    /// Identity transform
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    /// Pure translation
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: dx, f: dy }
    }

    /// Pure rotation
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { a: cos, b: sin, c: -sin, d: cos, e: 0.0, f: 0.0 }
    }

    /// `self * other`: apply `other` first, then `self`
    pub fn then(self, other: Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    /// Append a translation
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        self.then(Self::translation(dx, dy))
    }

    /// Append a rotation
    pub fn rotated(self, radians: f64) -> Self {
        self.then(Self::rotation(radians))
    }

    /// Transform a point
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// True if this transform only translates
    pub fn is_translation(&self) -> bool {
        self.a == 1.0 && self.b == 0.0 && self.c == 0.0 && self.d == 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < EPSILON && (a.1 - b.1).abs() < EPSILON
    }

    #[test]
    fn test_identity() {
        assert_eq!(Affine2::IDENTITY.apply(3.0, 4.0), (3.0, 4.0));
        assert!(Affine2::default().is_translation());
    }

    #[test]
    fn test_translate() {
        let t = Affine2::IDENTITY.translated(10.0, -5.0);
        assert_eq!(t.apply(1.0, 1.0), (11.0, -4.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let r = Affine2::IDENTITY.rotated(FRAC_PI_2);
        // Canvas rotation: +x maps to +y
        assert!(approx_eq(r.apply(1.0, 0.0), (0.0, 1.0)));
        assert!(!r.is_translation());
    }

    #[test]
    fn test_post_multiply_order() {
        // Translate then rotate: rotation applies to coordinates first
        let t = Affine2::IDENTITY.translated(10.0, 0.0).rotated(FRAC_PI_2);
        assert!(approx_eq(t.apply(1.0, 0.0), (10.0, 1.0)));
    }

    #[test]
    fn test_rotate_about_center_fixes_center() {
        let t = Affine2::IDENTITY
            .translated(50.0, 60.0)
            .rotated(0.3)
            .translated(-50.0, -60.0);
        assert!(approx_eq(t.apply(50.0, 60.0), (50.0, 60.0)));
    }
}
