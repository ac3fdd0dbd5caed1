//! Host drawing capability
//!
//! Elements only ever draw through the [`Canvas`] trait. Text measurement is a
//! separate, optional capability: a host that is not ready yet returns `None`
//! from [`Canvas::text_metrics`] and text drawing is skipped for that frame.

use crate::color::Color;
use crate::math::Vec2;
use crate::primitives::Rect;

/// Backend-agnostic text measurement
pub trait TextMetrics {
    /// Width of a single line of text at scale 1.0
    fn measure_width(&self, text: &str) -> f32;

    /// Height of one line at scale 1.0
    fn line_height(&self) -> f32;
}

/// A region of a texture drawn into a rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Backend-defined texture identifier
    pub id: String,
    /// Size of the sampled region in texels
    pub region_size: Vec2,
    /// Full texture size in texels
    pub texture_size: Vec2,
}

impl Texture {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            region_size: Vec2::splat(256.0),
            texture_size: Vec2::splat(256.0),
        }
    }

    pub fn with_region_size(mut self, region_size: Vec2) -> Self {
        self.region_size = region_size;
        self
    }

    pub fn with_texture_size(mut self, texture_size: Vec2) -> Self {
        self.texture_size = texture_size;
        self
    }
}

/// Draw primitives and transform stack supplied by the host
pub trait Canvas {
    /// Size of the drawable area in overlay coordinates
    fn viewport(&self) -> Vec2;

    fn text_metrics(&self) -> Option<&dyn TextMetrics>;

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, shadow: bool);

    fn draw_textured_rect(&mut self, rect: Rect, texture: &Texture, color: Color);

    /// Clip subsequent drawing to `rect` until the matching pop
    fn push_scissor(&mut self, rect: Rect);

    fn pop_scissor(&mut self);

    fn push_transform(&mut self);

    fn pop_transform(&mut self);

    /// Rotate the current transform by `degrees` around `pivot`
    fn rotate_about(&mut self, pivot: Vec2, degrees: f32);

    /// Scale the current transform by `factor` around `anchor`
    fn scale_about(&mut self, anchor: Vec2, factor: f32);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    Text { text: String, position: Vec2, color: Color, shadow: bool },
    TexturedRect { rect: Rect, texture_id: String, color: Color },
    PushScissor(Rect),
    PopScissor,
    PushTransform,
    PopTransform,
    Rotate { pivot: Vec2, degrees: f32 },
    Scale { anchor: Vec2, factor: f32 },
}

/// Monospace metrics: every char has the same width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl TextMetrics for FixedMetrics {
    fn measure_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Canvas that records every call instead of drawing
///
/// Used by headless hosts and tests to inspect what a frame would draw.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    viewport: Vec2,
    metrics: Option<FixedMetrics>,
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            metrics: None,
            commands: Vec::new(),
        }
    }

    pub fn with_metrics(mut self, metrics: FixedMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn set_metrics(&mut self, metrics: Option<FixedMetrics>) {
        self.metrics = metrics;
    }

    /// Drop the recorded commands, typically between frames
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn text_metrics(&self) -> Option<&dyn TextMetrics> {
        self.metrics.as_ref().map(|metrics| metrics as &dyn TextMetrics)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, shadow: bool) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
            shadow,
        });
    }

    fn draw_textured_rect(&mut self, rect: Rect, texture: &Texture, color: Color) {
        self.commands.push(DrawCommand::TexturedRect {
            rect,
            texture_id: texture.id.clone(),
            color,
        });
    }

    fn push_scissor(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushScissor(rect));
    }

    fn pop_scissor(&mut self) {
        self.commands.push(DrawCommand::PopScissor);
    }

    fn push_transform(&mut self) {
        self.commands.push(DrawCommand::PushTransform);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
    }

    fn rotate_about(&mut self, pivot: Vec2, degrees: f32) {
        self.commands.push(DrawCommand::Rotate { pivot, degrees });
    }

    fn scale_about(&mut self, anchor: Vec2, factor: f32) {
        self.commands.push(DrawCommand::Scale { anchor, factor });
    }
}
