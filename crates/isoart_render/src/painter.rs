//! Isometric projection and face painting
//!
//! Projects a flat list of cube-mesh points through the fixed isometric
//! basis, groups them into five-point faces, sorts the faces back to front
//! by their projected center depth, and paints each one as a filled and
//! stroked polygon.
//!
//! The screen mapping shifts the projected footprint `[-√3·depth, columns·√3]`
//! to start at zero and scales it so it exactly fills the drawing width.

use isoart_core::{Palette, Point3, POINTS_PER_FACE};
use isoart_math::mat3::{to_isometric, SQRT_3};

use crate::surface::DrawingSurface;

/// One projected face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    /// Screen x/y; z stays in isometric space
    pub points: [Point3; POINTS_PER_FACE],
    /// Mean of the first four isometric points (the fifth closes the loop)
    pub center: Point3,
}

/// Maps isometric coordinates to screen space for a grid footprint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsoProjection {
    depth: f64,
    scale: f64,
}

impl IsoProjection {
    /// Projection for a grid of `horizontal_extent` columns by `depth` rows,
    /// scaled to fill `draw_width`
    pub fn new(horizontal_extent: usize, depth: usize, draw_width: f64) -> Self {
        let depth = depth as f64;
        let footprint = (horizontal_extent as f64 + depth) * SQRT_3;
        let scale = if footprint > 0.0 { draw_width / footprint } else { 0.0 };
        Self { depth, scale }
    }

    /// Pixels per isometric unit
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map one isometric coordinate to screen space
    #[inline]
    pub fn to_screen(&self, v: f64) -> f64 {
        (v + SQRT_3 * self.depth) * self.scale
    }

    /// Project a point list into faces, in input order
    ///
    /// Trailing points that do not fill a whole face are ignored.
    pub fn faces(&self, points: &[Point3]) -> Vec<Face> {
        points
            .chunks_exact(POINTS_PER_FACE)
            .map(|chunk| {
                let mut iso = [Point3::ZERO; POINTS_PER_FACE];
                for (dst, src) in iso.iter_mut().zip(chunk) {
                    *dst = to_isometric(*src);
                }
                let center = Point3::mean(&iso[..POINTS_PER_FACE - 1]);

                let mut points = iso;
                for p in points.iter_mut() {
                    p.x = self.to_screen(p.x);
                    p.y = self.to_screen(p.y);
                }
                Face { points, center }
            })
            .collect()
    }
}

/// Order faces ascending by center depth; equal depths keep input order
pub fn sort_faces(faces: &mut [Face]) {
    faces.sort_by(|a, b| a.center.z.total_cmp(&b.center.z));
}

/// Paints projected cube meshes onto a drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsoPainter {
    projection: IsoProjection,
    palette: Palette,
}

impl IsoPainter {
    /// Create a painter
    pub fn new(projection: IsoProjection, palette: Palette) -> Self {
        Self { projection, palette }
    }

    /// The projection in use
    pub fn projection(&self) -> &IsoProjection {
        &self.projection
    }

    /// The palette in use
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Project and depth-sort without painting
    pub fn prepare(&self, points: &[Point3]) -> Vec<Face> {
        let mut faces = self.projection.faces(points);
        sort_faces(&mut faces);
        faces
    }

    /// Paint a point list back to front
    ///
    /// Palette cycling restarts at the first color on every call.
    pub fn paint(&self, surface: &mut dyn DrawingSurface, points: &[Point3]) {
        let faces = self.prepare(points);
        log::trace!(
            "Painting {} faces with {} colors",
            faces.len(),
            self.palette.len()
        );

        for (n, face) in faces.iter().enumerate() {
            let [first, rest @ ..] = &face.points;
            surface.begin_path();
            surface.move_to(first.x, first.y);
            for p in rest {
                surface.line_to(p.x, p.y);
            }
            surface.close_path();
            surface.fill(self.palette.color(n));
            surface.stroke();
        }
    }
}
