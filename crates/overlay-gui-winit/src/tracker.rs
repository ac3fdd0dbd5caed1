//! Pointer and keyboard tracking for winit windows
//!
//! winit reports input as a stream of events; the overlay wants one snapshot
//! per tick. This module folds the stream into that snapshot plus the scroll
//! and key presses that happened since the last tick.

use overlay_gui::{Key, Modifiers, PointerSnapshot, SceneManager};
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as WinitKey, ModifiersState, NamedKey};

/// Pixel scroll distance that counts as one line
const PIXELS_PER_LINE: f32 = 20.0;

/// Accumulates winit events between overlay ticks
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Last cursor position in window pixels, `None` while outside the window
    cursor: Option<(f32, f32)>,
    left_down: bool,
    right_down: bool,
    /// Lines scrolled since the last tick, positive away from the user
    scroll: f32,
    keys: Vec<Key>,
    chars: Vec<char>,
    modifiers: Modifiers,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent and update internal state
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::CursorLeft { .. } => self.cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => self.mouse_wheel(*delta),
            WindowEvent::ModifiersChanged(modifiers) => self.modifiers_changed(modifiers.state()),
            WindowEvent::KeyboardInput { event, .. } => {
                self.key_input(&event.logical_key, event.state, event.repeat)
            }
            // Focus loss would otherwise leave buttons stuck down
            WindowEvent::Focused(false) => {
                self.left_down = false;
                self.right_down = false;
            }
            _ => {}
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some((position.x as f32, position.y as f32));
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let pressed = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.left_down = pressed,
            MouseButton::Right => self.right_down = pressed,
            other => log::trace!("Ignoring mouse button {other:?}"),
        }
    }

    pub fn mouse_wheel(&mut self, delta: MouseScrollDelta) {
        self.scroll += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
        };
    }

    pub fn modifiers_changed(&mut self, state: ModifiersState) {
        self.modifiers = Modifiers {
            shift: state.shift_key(),
            ctrl: state.control_key() || state.super_key(),
            alt: state.alt_key(),
        };
    }

    /// Record a key press. Releases and auto-repeats of non-text keys are dropped.
    pub fn key_input(&mut self, key: &WinitKey, state: ElementState, repeat: bool) {
        if state != ElementState::Pressed {
            return;
        }
        match key {
            WinitKey::Named(NamedKey::Space) => self.chars.push(' '),
            WinitKey::Character(text) => {
                // ctrl+letter is a shortcut, not text
                let shortcut = self.modifiers.ctrl && text.chars().all(char::is_alphabetic);
                if !shortcut {
                    self.chars.extend(text.chars());
                }
            }
            _ => {}
        }
        if !repeat {
            if let Some(key) = map_key(key) {
                self.keys.push(key);
            }
        } else if matches!(key, WinitKey::Named(NamedKey::Backspace)) {
            self.keys.push(Key::Backspace);
        }
    }

    /// Pointer state for this tick, in raw window pixels
    ///
    /// A cursor outside the window is reported infinitely far away so nothing
    /// is hovered.
    pub fn snapshot(&self) -> PointerSnapshot {
        let (x, y) = self.cursor.unwrap_or((f32::NEG_INFINITY, f32::NEG_INFINITY));
        PointerSnapshot::new(x, y, self.left_down, self.right_down)
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn pending_scroll(&self) -> f32 {
        self.scroll
    }

    pub fn pending_keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn pending_chars(&self) -> &[char] {
        &self.chars
    }

    /// Run one overlay tick with everything collected since the last one
    ///
    /// Updates the scene with the pointer snapshot, then forwards scroll, key
    /// presses and typed characters, then clears the per-tick state.
    pub fn drive(&mut self, scene: &mut SceneManager) {
        let pointer = self.snapshot();
        scene.update(pointer.x, pointer.y, pointer.buttons.left, pointer.buttons.right);

        if self.scroll != 0.0 {
            scene.scroll(self.scroll);
        }
        for key in self.keys.drain(..) {
            scene.key_pressed(key, self.modifiers);
        }
        for ch in self.chars.drain(..) {
            scene.char_typed(ch);
        }
        self.begin_frame();
    }

    /// Clear per-tick state without driving a scene
    pub fn begin_frame(&mut self) {
        self.scroll = 0.0;
        self.keys.clear();
        self.chars.clear();
    }
}

/// Map a winit key to the keys the overlay distinguishes
pub fn map_key(key: &WinitKey) -> Option<Key> {
    match key {
        WinitKey::Named(NamedKey::Backspace) => Some(Key::Backspace),
        WinitKey::Named(NamedKey::Enter) => Some(Key::Enter),
        WinitKey::Named(NamedKey::Escape) => Some(Key::Escape),
        WinitKey::Named(NamedKey::Tab) => Some(Key::Tab),
        WinitKey::Named(NamedKey::Space) => Some(Key::Char(' ')),
        WinitKey::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(Key::Char(ch)),
                _ => None,
            }
        }
        _ => None,
    }
}
