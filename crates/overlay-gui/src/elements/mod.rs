//! Concrete element kinds
//!
//! A [`Node`](crate::Node) holds exactly one kind. Kinds only decide what is
//! drawn; layout, animation and input are shared by every node.

mod input;
mod line;
mod rect;
mod screen;
mod text;

pub use input::*;
pub use line::*;
pub use rect::*;
pub use screen::*;
pub use text::*;

use crate::canvas::Canvas;
use crate::math::Vec2;
use crate::node::RenderCx;
use crate::primitives::Rect;
use crate::snapshot::ElementState;

/// What a node draws
pub enum NodeKind {
    Rect(RectElement),
    Text(TextElement),
    Line(DashedLine),
    Screen(ScreenElement),
    Input(TextInput),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Rect(_) => "rectangle",
            NodeKind::Text(_) => "text",
            NodeKind::Line(_) => "line",
            NodeKind::Screen(_) => "screen",
            NodeKind::Input(_) => "input",
        }
    }

    /// Kinds that get a child container attached
    pub fn accepts_children(&self) -> bool {
        matches!(self, NodeKind::Rect(_) | NodeKind::Screen(_))
    }

    pub(crate) fn clips_children(&self) -> bool {
        match self {
            NodeKind::Rect(rect) => rect.mask,
            _ => false,
        }
    }

    /// Adjust the state before layout: text sizes itself, screens fill the viewport
    pub(crate) fn prepare(&mut self, state: &mut ElementState, canvas: &dyn Canvas, viewport: Vec2) {
        match self {
            NodeKind::Text(text) => text.refresh_size(state, canvas.text_metrics()),
            NodeKind::Screen(_) => state.size = viewport.extend(state.size.z),
            _ => {}
        }
    }

    pub(crate) fn draw(&mut self, state: &ElementState, bounds: Rect, canvas: &mut dyn Canvas, cx: &RenderCx<'_>) {
        match self {
            NodeKind::Rect(rect) => rect.draw(state, bounds, canvas),
            NodeKind::Text(text) => text.draw(state, bounds, canvas),
            NodeKind::Line(line) => line.draw(state, canvas, cx),
            NodeKind::Screen(_) => {
                let backdrop = Rect::from_min_size([0.0, 0.0], cx.viewport.to_array());
                canvas.fill_rect(backdrop, state.color);
            }
            NodeKind::Input(input) => input.draw(state, bounds, canvas),
        }
    }
}

impl From<RectElement> for NodeKind {
    fn from(rect: RectElement) -> Self {
        NodeKind::Rect(rect)
    }
}

impl From<TextElement> for NodeKind {
    fn from(text: TextElement) -> Self {
        NodeKind::Text(text)
    }
}

impl From<DashedLine> for NodeKind {
    fn from(line: DashedLine) -> Self {
        NodeKind::Line(line)
    }
}

impl From<ScreenElement> for NodeKind {
    fn from(screen: ScreenElement) -> Self {
        NodeKind::Screen(screen)
    }
}

impl From<TextInput> for NodeKind {
    fn from(input: TextInput) -> Self {
        NodeKind::Input(input)
    }
}
