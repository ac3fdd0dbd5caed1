//! Shorthand constructors for common elements
//!
//! ```
//! use overlay_gui::{ui, Color, Vec2};
//!
//! let panel = ui::rectangle()
//!     .with_id("panel")
//!     .with_size(120.0, 40.0)
//!     .with_anchor(Vec2::splat(0.5))
//!     .with_color(Color::rgba(0, 0, 0, 0.6))
//!     .with_child(ui::text("Hello").with_anchor(Vec2::splat(0.5)));
//! assert_eq!(panel.children().len(), 1);
//! ```

use crate::canvas::Texture;
use crate::color::Color;
use crate::elements::{DashedLine, LineEnd, RectElement, ScreenElement, TextElement, TextInput};
use crate::node::Node;

pub fn rectangle() -> Node {
    Node::new(RectElement::new())
}

/// Rectangle that clips its children to its bounds
pub fn masked_rectangle() -> Node {
    Node::new(RectElement::new().with_mask(true))
}

pub fn textured(texture: Texture) -> Node {
    Node::new(RectElement::new().with_texture(texture)).with_color(Color::WHITE)
}

pub fn text(text: impl Into<String>) -> Node {
    Node::new(TextElement::new(text)).with_color(Color::WHITE)
}

/// Text with `&`-code color switches
pub fn color_text(text: impl Into<String>) -> Node {
    Node::new(TextElement::new(text).with_color_codes(true)).with_color(Color::WHITE)
}

pub fn line(start: impl Into<LineEnd>, end: impl Into<LineEnd>) -> Node {
    Node::new(DashedLine::new(start, end)).with_color(Color::WHITE)
}

/// Hidden, dimmed full-viewport screen. Open it with [`Node::show`].
pub fn screen(screen: ScreenElement) -> Node {
    Node::new(screen)
        .with_color(Color::rgba(0, 0, 0, 0.8))
        .with_enabled(false)
        .with_interactable(false)
}

pub fn input() -> Node {
    Node::new(TextInput::new())
        .with_size(100.0, 20.0)
        .with_color(Color::rgba(0, 0, 0, 0.5))
}
