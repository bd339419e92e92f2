//! Recording drawing surface
//!
//! Stores every call as a [`DrawCommand`] so paint order, palette cycling,
//! and transform balance can be inspected after a render pass.

use isoart_core::Color;

use crate::surface::{DrawingSurface, Rect};
use crate::transform::Affine2;

/// One recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    BeginPath,
    ClosePath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Fill(Color),
    Stroke,
    FillRect(Rect, Color),
    StrokeRect(Rect),
    Translate(f64, f64),
    Rotate(f64),
    SetTransform(Affine2),
    Save,
    Restore,
}

/// A surface that records calls instead of drawing
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    depth: usize,
    max_depth: usize,
    unbalanced_restore: bool,
}

impl RecordingSurface {
    /// Create an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recording empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current save depth
    pub fn save_depth(&self) -> usize {
        self.depth
    }

    /// Deepest save nesting seen so far
    pub fn max_save_depth(&self) -> usize {
        self.max_depth
    }

    /// True if every save has been restored and no restore underflowed
    pub fn is_balanced(&self) -> bool {
        self.depth == 0 && !self.unbalanced_restore
    }

    /// Colors of every `fill` call, in order
    pub fn fills(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Number of commands matching a predicate
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect(rect));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate(dx, dy));
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(DrawCommand::Rotate(radians));
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.commands.push(DrawCommand::SetTransform(transform));
    }

    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.unbalanced_restore = true,
        }
        self.commands.push(DrawCommand::Restore);
    }
}
