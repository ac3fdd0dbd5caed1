use crate::commands::SceneCommands;
use crate::input::{DragContext, KeyContext, ScrollContext};
use crate::node::Node;

pub type KeyHandler = Box<dyn FnMut(&KeyContext, &mut SceneCommands)>;
pub type ScrollHandler = Box<dyn FnMut(&ScrollContext, &mut SceneCommands)>;
/// Receives the dragged child directly so it can move it
pub type DragHandler = Box<dyn FnMut(&mut Node, &DragContext)>;
pub type CloseHandler = Box<dyn FnMut()>;

/// A full-viewport dimmed layer holding a menu or dialog
///
/// Screens start hidden. While one is shown at the top level, elements outside
/// it stop receiving hover and click input.
#[derive(Default)]
pub struct ScreenElement {
    on_key: Option<KeyHandler>,
    on_scroll: Option<ScrollHandler>,
    on_drag: Option<DragHandler>,
    on_close: Option<CloseHandler>,
    dragging: Option<usize>,
}

impl ScreenElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(mut self, handler: impl FnMut(&KeyContext, &mut SceneCommands) + 'static) -> Self {
        self.on_key = Some(Box::new(handler));
        self
    }

    pub fn on_scroll(mut self, handler: impl FnMut(&ScrollContext, &mut SceneCommands) + 'static) -> Self {
        self.on_scroll = Some(Box::new(handler));
        self
    }

    pub fn on_drag(mut self, handler: impl FnMut(&mut Node, &DragContext) + 'static) -> Self {
        self.on_drag = Some(Box::new(handler));
        self
    }

    pub fn on_close(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Index of the child being dragged, if any
    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    pub(crate) fn handle_key(&mut self, context: &KeyContext, commands: &mut SceneCommands) -> bool {
        match self.on_key.as_mut() {
            Some(handler) => {
                handler(context, commands);
                true
            }
            None => false,
        }
    }

    pub(crate) fn handle_scroll(&mut self, context: &ScrollContext, commands: &mut SceneCommands) -> bool {
        match self.on_scroll.as_mut() {
            Some(handler) => {
                handler(context, commands);
                true
            }
            None => false,
        }
    }

    /// Pick the child under the pointer on the first drag step and keep
    /// dragging it until the button is released
    pub(crate) fn handle_drag(&mut self, children: &mut [Node], context: &DragContext) {
        if self.dragging.is_none() {
            self.dragging = children
                .iter()
                .position(|child| child.bounds().contains(context.x, context.y));
        }
        let (Some(index), Some(handler)) = (self.dragging, self.on_drag.as_mut()) else {
            return;
        };
        if let Some(child) = children.get_mut(index) {
            handler(child, context);
        }
    }

    pub(crate) fn end_drag(&mut self) {
        self.dragging = None;
    }

    pub(crate) fn notify_closed(&mut self) {
        if let Some(handler) = self.on_close.as_mut() {
            handler();
        }
    }
}

impl std::fmt::Debug for ScreenElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenElement")
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}
