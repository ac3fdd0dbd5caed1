//! Per-tick pointer and keyboard input
//!
//! The scene manager owns the previous tick's button state and threads a
//! [`FrameInput`] value through the update walk, so edge detection never
//! depends on global state.

use crate::node::NodeId;

/// The two pointer buttons the overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    pub const ALL: [MouseButton; 2] = [MouseButton::Left, MouseButton::Right];
}

/// Pressed state of both buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub left: bool,
    pub right: bool,
}

impl ButtonState {
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
        }
    }
}

/// Pointer position and buttons for one tick, in overlay coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSnapshot {
    pub x: f32,
    pub y: f32,
    pub buttons: ButtonState,
}

impl PointerSnapshot {
    pub fn new(x: f32, y: f32, left_down: bool, right_down: bool) -> Self {
        Self {
            x,
            y,
            buttons: ButtonState::new(left_down, right_down),
        }
    }
}

/// Input threaded through one update walk
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Pointer with the host Y correction already applied
    pub pointer: PointerSnapshot,
    /// Buttons as they were on the previous tick
    pub previous: ButtonState,
    /// Result of the scene's interaction gate for this tick
    pub interaction_allowed: bool,
}

impl FrameInput {
    /// `Some(pressed)` when `button` changed state since the previous tick
    pub fn button_edge(&self, button: MouseButton) -> Option<bool> {
        let now = self.pointer.buttons.is_down(button);
        (now != self.previous.is_down(button)).then_some(now)
    }
}

/// Passed to click handlers on both the press and the release edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickContext {
    pub button: MouseButton,
    /// `true` on the press edge, `false` on the release edge
    pub pressed: bool,
    pub x: f32,
    pub y: f32,
}

/// Passed to hover handlers when the hovered state flips
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverContext {
    pub hovered: bool,
    pub x: f32,
    pub y: f32,
}

/// Keys the overlay distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Backspace,
    Enter,
    Escape,
    Tab,
    Char(char),
    /// Any other key, by host key code
    Other(u32),
}

/// Modifier keys held during a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Passed to screen key handlers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyContext {
    pub key: Key,
    pub modifiers: Modifiers,
}

/// Passed to screen scroll handlers
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollContext {
    /// Index and id of the direct child under the pointer, if any
    pub hovered: Option<(usize, Option<NodeId>)>,
    pub amount: f32,
}

/// Passed to screen drag handlers together with the dragged child
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edge() {
        let mut input = FrameInput {
            pointer: PointerSnapshot::new(0.0, 0.0, true, false),
            previous: ButtonState::new(false, false),
            interaction_allowed: true,
        };
        assert_eq!(input.button_edge(MouseButton::Left), Some(true));
        assert_eq!(input.button_edge(MouseButton::Right), None);

        input.previous = ButtonState::new(true, true);
        assert_eq!(input.button_edge(MouseButton::Left), None);
        assert_eq!(input.button_edge(MouseButton::Right), Some(false));
    }
}
