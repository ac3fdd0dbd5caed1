use crate::canvas::{Canvas, Texture};
use crate::primitives::Rect;
use crate::snapshot::ElementState;

/// Filled or textured rectangle, optionally clipping its children
#[derive(Debug, Clone, Default)]
pub struct RectElement {
    /// Drawn instead of the fill color when set
    pub texture: Option<Texture>,
    /// Clip children to this rectangle's bounds
    pub mask: bool,
}

impl RectElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    pub(crate) fn draw(&self, state: &ElementState, bounds: Rect, canvas: &mut dyn Canvas) {
        if bounds.is_degenerate() {
            return;
        }
        match &self.texture {
            Some(texture) => canvas.draw_textured_rect(bounds, texture, state.color),
            None => canvas.fill_rect(bounds, state.color),
        }
        if state.stroke_color.a > 0.0 {
            draw_outline(bounds, state, canvas);
        }
    }
}

/// One pixel border drawn inside the bounds
fn draw_outline(bounds: Rect, state: &ElementState, canvas: &mut dyn Canvas) {
    let [x0, y0] = bounds.min;
    let [x1, y1] = bounds.max;
    let color = state.stroke_color;
    canvas.fill_rect(Rect::new([x0, y0], [x1, y0 + 1.0]), color);
    canvas.fill_rect(Rect::new([x0, y1 - 1.0], [x1, y1]), color);
    canvas.fill_rect(Rect::new([x0, y0 + 1.0], [x0 + 1.0, y1 - 1.0]), color);
    canvas.fill_rect(Rect::new([x1 - 1.0, y0 + 1.0], [x1, y1 - 1.0]), color);
}
