//! SVG drawing surface
//!
//! Renders drawing calls into a standalone SVG document. Coordinates are
//! transformed by the current affine transform when they are recorded, so
//! the output contains only absolute canvas coordinates.

use std::fmt::Write as _;
use std::path::Path;

use isoart_core::Color;

use crate::surface::{validate_size, DrawingSurface, Rect, SurfaceError};
use crate::transform::Affine2;

const STROKE: &str = "black";
const STROKE_WIDTH: f64 = 1.0;

/// An SVG document being drawn into
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    transform: Affine2,
    stack: Vec<Affine2>,
    path: String,
    elements: Vec<String>,
}

impl SvgSurface {
    /// Create an empty document of the given size
    pub fn new(width: f64, height: f64) -> Result<Self, SurfaceError> {
        validate_size(width, height)?;
        Ok(Self {
            width,
            height,
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
            path: String::new(),
            elements: Vec::new(),
        })
    }

    /// Document width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Document height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current transform
    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    /// Number of drawn elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the document
    pub fn to_svg_string(&self) -> String {
        let mut out = String::with_capacity(128 + self.elements.iter().map(|e| e.len() + 1).sum::<usize>());
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
        );
        for element in &self.elements {
            out.push_str(element);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    /// Write the document to a file
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), SurfaceError> {
        std::fs::write(path, self.to_svg_string())?;
        Ok(())
    }

    fn point(&self, x: f64, y: f64) -> (f64, f64) {
        self.transform.apply(x, y)
    }

    fn rect_path(&self, rect: Rect) -> String {
        let mut d = String::new();
        for (i, (x, y)) in rect.corners().iter().enumerate() {
            let (tx, ty) = self.point(*x, *y);
            let _ = write!(d, "{}{} {} ", if i == 0 { 'M' } else { 'L' }, fmt_num(tx), fmt_num(ty));
        }
        d.push('Z');
        d
    }

    fn transformed_region(&self, region: Rect) -> Option<Rect> {
        if !self.transform.is_translation() {
            return None;
        }
        let (x, y) = self.point(region.x, region.y);
        Some(Rect::new(x, y, region.width, region.height))
    }
}

impl DrawingSurface for SvgSurface {
    fn clear(&mut self, region: Rect) {
        let canvas = Rect::sized(self.width, self.height);
        match self.transformed_region(region) {
            Some(r) if r.contains_rect(&canvas) => self.elements.clear(),
            _ => {
                let d = self.rect_path(region);
                self.elements.push(format!(r#"<path d="{}" fill="white"/>"#, d));
            }
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn close_path(&mut self) {
        if !self.path.is_empty() {
            self.path.push('Z');
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let (tx, ty) = self.point(x, y);
        let _ = write!(self.path, "M{} {} ", fmt_num(tx), fmt_num(ty));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let (tx, ty) = self.point(x, y);
        let _ = write!(self.path, "L{} {} ", fmt_num(tx), fmt_num(ty));
    }

    fn fill(&mut self, color: Color) {
        if self.path.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" stroke="none"/>"#,
            self.path.trim_end(),
            color
        ));
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            self.path.trim_end(),
            STROKE,
            STROKE_WIDTH
        ));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let d = self.rect_path(rect);
        self.elements.push(format!(r#"<path d="{}" fill="{}" stroke="none"/>"#, d, color));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let d = self.rect_path(rect);
        self.elements.push(format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            d, STROKE, STROKE_WIDTH
        ));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.translated(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.transform = self.transform.rotated(radians);
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        } else {
            log::warn!("SvgSurface: restore without matching save");
        }
    }
}

/// Format a coordinate with at most three decimals
fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}
