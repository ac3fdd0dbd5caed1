use crate::canvas::Canvas;
use crate::color::Color;
use crate::input::Key;
use crate::math::Vec2;
use crate::primitives::Rect;
use crate::snapshot::ElementState;

const PADDING: f32 = 5.0;

/// Single-line text field
///
/// Focus follows left presses: pressing inside focuses it, pressing anywhere
/// else blurs it. While focused it accepts letters, digits and whitespace up
/// to `max_length` chars; Enter blurs it. The node color is the background.
#[derive(Debug, Clone)]
pub struct TextInput {
    text: String,
    focused: bool,
    pub max_length: usize,
    pub text_color: Color,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            text: String::new(),
            focused: false,
            max_length: 100,
            text_color: Color::WHITE,
        }
    }
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content, truncated to `max_length` chars
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().take(self.max_length).collect();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Apply a key to the content
    ///
    /// # Returns
    /// Whether the input was focused and consumed the key.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.focused {
            return false;
        }
        match key {
            Key::Backspace => {
                self.text.pop();
            }
            Key::Enter => self.focused = false,
            Key::Char(ch) if ch.is_alphanumeric() || ch.is_whitespace() => {
                if self.text.chars().count() < self.max_length {
                    self.text.push(ch);
                }
            }
            _ => return false,
        }
        true
    }

    pub(crate) fn draw(&self, state: &ElementState, bounds: Rect, canvas: &mut dyn Canvas) {
        if !bounds.is_degenerate() {
            canvas.fill_rect(bounds, state.color);
        }
        let Some(metrics) = canvas.text_metrics() else {
            return;
        };
        let line_height = metrics.line_height();
        let text_width = metrics.measure_width(&self.text);

        let x = bounds.min[0] + PADDING;
        let y = bounds.min[1] + (bounds.height() - line_height) / 2.0;
        canvas.draw_text(&self.text, Vec2::new(x, y), self.text_color, false);
        if self.focused {
            let caret = Rect::from_min_size([x + text_width + 1.0, y], [1.0, line_height]);
            canvas.fill_rect(caret, self.text_color);
        }
    }
}
