//! Fill colors and palettes
//!
//! Monochrome scenes fill every face white. Color scenes pick one palette
//! from a fixed table using `floor(a / 11 * table_len)` and cycle through its
//! colors face by face.

use std::fmt;

/// A CSS color value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub &'static str);

impl Color {
    pub const WHITE: Self = Self("white");
    pub const BLACK: Self = Self("black");

    /// The CSS text of this color
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The fixed palette table, in selection order
pub const PALETTES: [&[Color]; 6] = [
    &[Color("#619b3d"), Color("#3e9eaa"), Color("#8a3eba"), Color("#c55243")],
    &[Color("#c6a36c"), Color("#75cd7f"), Color("#7e9fd4"), Color("#da88d1")],
    &[Color("#42b87a"), Color("#42bda1"), Color("#44b7c0"), Color("#4794c2"), Color("#4972c5")],
    &[Color("#35885c"), Color("#373997"), Color("#a63772"), Color("#b6b238")],
    &[Color("#cd7376"), Color("#d08e76"), Color("#d2ab79"), Color("#d4c87c"), Color("#c8d67f")],
    &[Color("#3e9e55"), Color("#3f5cad"), Color("#bd3f9f"), Color("#c6a445")],
];

const MONOCHROME: &[Color] = &[Color::WHITE];

/// A non-empty, ordered set of fill colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Color],
}

impl Palette {
    /// Single white fill
    pub fn monochrome() -> Self {
        Self { colors: MONOCHROME }
    }

    /// Palette `index` of [`PALETTES`]
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn from_table(index: usize) -> Self {
        Self { colors: PALETTES[index] }
    }

    /// Table index for a parameter value
    ///
    /// Parameter values in `[0, 10]` always land inside the table; anything
    /// outside is clamped to the first or last palette.
    pub fn table_index(parameter_a: f64) -> usize {
        let raw = (parameter_a / 11.0 * PALETTES.len() as f64).floor();
        if raw.is_nan() || raw < 0.0 {
            0
        } else {
            (raw as usize).min(PALETTES.len() - 1)
        }
    }

    /// Palette selected by parameter a
    pub fn from_parameter(parameter_a: f64) -> Self {
        Self::from_table(Self::table_index(parameter_a))
    }

    /// Monochrome or parameter-selected palette
    pub fn for_mode(color: bool, parameter_a: f64) -> Self {
        if color {
            Self::from_parameter(parameter_a)
        } else {
            Self::monochrome()
        }
    }

    /// All colors of this palette
    pub fn colors(&self) -> &'static [Color] {
        self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes are never empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the `n`-th painted face (round robin)
    #[inline]
    pub fn color(&self, n: usize) -> Color {
        self.colors[n % self.colors.len()]
    }
}
