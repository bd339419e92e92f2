//! User parameters
//!
//! Two continuous values in `[0, 10]`, supplied by the host per render pass.
//! Both are centered at 5, the neutral / no-distortion setting.

use serde::{Serialize, Deserialize};

/// The two user parameters of an art piece
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Primary parameter (jitter, palette, rotation speed, ...)
    pub a: f64,
    /// Secondary parameter, only read by pieces that declare it
    pub b: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl Parameters {
    /// Lower bound of a parameter
    pub const MIN: f64 = 0.0;
    /// Upper bound of a parameter
    pub const MAX: f64 = 10.0;
    /// The neutral midpoint
    pub const MIDPOINT: f64 = 5.0;

    /// Both parameters at the midpoint
    pub const NEUTRAL: Self = Self { a: Self::MIDPOINT, b: Self::MIDPOINT };

    /// Create parameters, clamping both values into `[0, 10]`
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a: clamp_parameter(a),
            b: clamp_parameter(b),
        }
    }

    /// Parameter a relative to the midpoint
    #[inline]
    pub fn a_centered(&self) -> f64 {
        self.a - Self::MIDPOINT
    }

    /// Parameter b relative to the midpoint
    #[inline]
    pub fn b_centered(&self) -> f64 {
        self.b - Self::MIDPOINT
    }
}

fn clamp_parameter(v: f64) -> f64 {
    if v.is_nan() {
        Parameters::MIDPOINT
    } else {
        v.clamp(Parameters::MIN, Parameters::MAX)
    }
}
