use std::collections::HashMap;
use std::fmt;

use crate::canvas::Canvas;
use crate::chain::{AnimationChain, ChainBuilder, DEFAULT_TICKS_PER_SECOND};
use crate::color::Color;
use crate::commands::SceneCommands;
use crate::easing::EasingFn;
use crate::elements::{DashedLine, NodeKind, RectElement, ScreenElement, TextElement, TextInput};
use crate::error::{HudError, HudResult};
use crate::events::{ElementRef, EventBus, HostContext, HoverEnd, HoverEnter, HoverMove};
use crate::input::{
    ClickContext, DragContext, FrameInput, HoverContext, Key, KeyContext, MouseButton, ScrollContext,
};
use crate::layout::{pivot, resolve_position, ParentFrame};
use crate::math::{Rotation, Vec2, Vec3};
use crate::primitives::Rect;
use crate::snapshot::ElementState;

/// Stable identifier used to find elements and attach lines to them
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Called with the node itself when its hovered state flips
pub type HoverHandler = Box<dyn FnMut(&mut Node, &HoverContext, &mut SceneCommands)>;

/// Called with the node itself on the press and release edge of one button
pub type ClickHandler = Box<dyn FnMut(&mut Node, &ClickContext, &mut SceneCommands)>;

/// Ordered children of a node kind that can hold them
#[derive(Default)]
pub struct Container {
    pub children: Vec<Node>,
}

/// Shared state of one update walk
pub(crate) struct UpdateCx<'a> {
    pub input: FrameInput,
    /// Corrected pointer position of the previous tick
    pub last_pointer: Option<Vec2>,
    pub host: HostContext,
    pub commands: &'a mut SceneCommands,
    pub bus: &'a mut EventBus,
}

/// Shared state of one render walk
pub(crate) struct RenderCx<'a> {
    pub delta: f32,
    pub viewport: Vec2,
    /// Pivots recorded so far in this frame
    pub anchors: &'a mut HashMap<NodeId, Vec2>,
    /// Pivots of the previous frame, for elements not yet rendered in this one
    pub previous_anchors: &'a HashMap<NodeId, Vec2>,
}

impl RenderCx<'_> {
    /// Pivot of the element with `id`, preferring this frame's position
    pub fn anchor(&self, id: &NodeId) -> Option<Vec2> {
        self.anchors
            .get(id)
            .or_else(|| self.previous_anchors.get(id))
            .copied()
    }
}

/// An element of the overlay tree
///
/// Every node carries geometry, colors, animation chains and input handlers.
/// What it draws is decided by its [`NodeKind`]; kinds that can hold children
/// get a [`Container`] attached at construction.
pub struct Node {
    id: Option<NodeId>,
    state: ElementState,
    enabled: bool,
    interactable: bool,
    position: Vec3,
    was_hovered: bool,
    kind: NodeKind,
    container: Option<Container>,
    on_hover: Option<HoverHandler>,
    on_left_click: Option<ClickHandler>,
    on_right_click: Option<ClickHandler>,
    animations: Vec<AnimationChain>,
    ticks_per_second: f32,
}

impl Node {
    pub fn new(kind: impl Into<NodeKind>) -> Self {
        let kind = kind.into();
        let container = kind.accepts_children().then(Container::default);
        Self {
            id: None,
            state: ElementState::default(),
            enabled: true,
            interactable: true,
            position: Vec3::ZERO,
            was_hovered: false,
            kind,
            container,
            on_hover: None,
            on_left_click: None,
            on_right_click: None,
            animations: Vec::new(),
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set width and height, keeping depth
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.state.size = Vec3::new(width, height, self.state.size.z);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.state.color = color;
        self
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.state.stroke_color = color;
        self
    }

    pub fn with_align(mut self, align: Vec2) -> Self {
        self.state.align = align;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.state.origin = origin;
        self
    }

    /// Set both align and origin, the usual way to anchor an element
    pub fn with_anchor(self, anchor: Vec2) -> Self {
        self.with_align(anchor).with_origin(anchor)
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.state.offset = Vec3::new(x, y, self.state.offset.z);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.state.rotation = Rotation::degrees(degrees);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_interactable(mut self, interactable: bool) -> Self {
        self.interactable = interactable;
        self
    }

    /// Add a child
    ///
    /// # Panics
    /// If this node's kind cannot hold children. Use
    /// [`try_add_child`](Self::try_add_child) to handle that case.
    pub fn with_child(mut self, child: Node) -> Self {
        if let Err(err) = self.try_add_child(child) {
            panic!("{err}");
        }
        self
    }

    /// Add several children
    ///
    /// # Panics
    /// If this node's kind cannot hold children.
    pub fn with_children(self, children: impl IntoIterator<Item = Node>) -> Self {
        children.into_iter().fold(self, Node::with_child)
    }

    /// Run `f` on the node while building, for configuration that does not
    /// fit a single builder call
    pub fn setup(mut self, f: impl FnOnce(&mut Node)) -> Self {
        f(&mut self);
        self
    }

    pub fn on_hover(mut self, handler: impl FnMut(&mut Node, &HoverContext, &mut SceneCommands) + 'static) -> Self {
        self.on_hover = Some(Box::new(handler));
        self
    }

    pub fn on_left_click(mut self, handler: impl FnMut(&mut Node, &ClickContext, &mut SceneCommands) + 'static) -> Self {
        self.on_left_click = Some(Box::new(handler));
        self
    }

    pub fn on_right_click(mut self, handler: impl FnMut(&mut Node, &ClickContext, &mut SceneCommands) + 'static) -> Self {
        self.on_right_click = Some(Box::new(handler));
        self
    }

    pub fn try_add_child(&mut self, mut child: Node) -> HudResult<()> {
        let name = self.kind.name();
        let Some(container) = self.container.as_mut() else {
            return Err(HudError::NotAContainer(name));
        };
        child.set_ticks_per_second(self.ticks_per_second);
        container.children.push(child);
        Ok(())
    }

    pub fn id(&self) -> Option<&NodeId> {
        self.id.as_ref()
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub fn state(&self) -> &ElementState {
        &self.state
    }

    /// Live animatable state. Running animations overwrite it on their next frame.
    pub fn state_mut(&mut self) -> &mut ElementState {
        &mut self.state
    }

    /// Absolute position resolved during the latest render
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Screen bounds from the latest resolved position
    pub fn bounds(&self) -> Rect {
        Rect::from_position_size(self.position, self.state.size)
    }

    /// Point the element rotates around and lines attach to
    pub fn pivot(&self) -> Vec2 {
        pivot(self.position, self.state.size, self.state.origin)
    }

    pub fn is_hovered(&self) -> bool {
        self.was_hovered
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling hides the node and its subtree from rendering and makes the
    /// node itself non-interactable. The stored interactable flag survives and
    /// applies again once re-enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    /// Whether the node reacts to input, given the scene's interaction gate
    pub fn is_interactable(&self, interaction_allowed: bool) -> bool {
        self.enabled && self.interactable && interaction_allowed
    }

    pub fn is_screen(&self) -> bool {
        matches!(self.kind, NodeKind::Screen(_))
    }

    /// Enable the node. For screens this opens them.
    pub fn show(&mut self) {
        self.enabled = true;
    }

    /// Disable the node. For screens this closes them and runs their close handler.
    pub fn hide(&mut self) {
        let was_enabled = std::mem::replace(&mut self.enabled, false);
        if let NodeKind::Screen(screen) = &mut self.kind {
            if was_enabled {
                screen.notify_closed();
            }
        }
    }

    pub fn children(&self) -> &[Node] {
        match self.container.as_ref() {
            Some(container) => container.children.as_slice(),
            None => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        match self.container.as_mut() {
            Some(container) => container.children.as_mut_slice(),
            None => &mut [],
        }
    }

    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    pub fn as_rect_mut(&mut self) -> Option<&mut RectElement> {
        match &mut self.kind {
            NodeKind::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextElement> {
        match &mut self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut DashedLine> {
        match &mut self.kind {
            NodeKind::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_screen_mut(&mut self) -> Option<&mut ScreenElement> {
        match &mut self.kind {
            NodeKind::Screen(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn as_input(&self) -> Option<&TextInput> {
        match &self.kind {
            NodeKind::Input(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_input_mut(&mut self) -> Option<&mut TextInput> {
        match &mut self.kind {
            NodeKind::Input(input) => Some(input),
            _ => None,
        }
    }

    /// Depth-first search for `id`, starting with this node
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        if self.id.as_ref() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        if self.id.as_ref() == Some(id) {
            return Some(self);
        }
        self.children_mut().iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Detach the first descendant with `id`
    pub fn remove_descendant(&mut self, id: &NodeId) -> Option<Node> {
        let container = self.container.as_mut()?;
        if let Some(index) = container.children.iter().position(|child| child.id() == Some(id)) {
            return Some(container.children.remove(index));
        }
        container
            .children
            .iter_mut()
            .find_map(|child| child.remove_descendant(id))
    }

    /// Schedule an animation: apply `mutate` to the live state now and animate
    /// from the previous state towards the result over `seconds`
    ///
    /// # Returns
    /// A builder for appending further steps, looping, repeating or grabbing a
    /// cancellation handle.
    pub fn animate(&mut self, seconds: f32, easing: EasingFn, mutate: impl FnOnce(&mut ElementState)) -> ChainBuilder<'_> {
        self.chain().then(seconds, easing, mutate)
    }

    /// Attach an empty chain, for sequences that start with a wait
    pub fn chain(&mut self) -> ChainBuilder<'_> {
        let ticks_per_second = self.ticks_per_second;
        let index = self.animations.len();
        self.animations.push(AnimationChain::new());
        ChainBuilder::new(&mut self.state, &mut self.animations[index], ticks_per_second)
    }

    /// Number of chains still attached
    pub fn active_animations(&self) -> usize {
        self.animations.len()
    }

    /// Cancel every attached chain. They are dropped on the next frame.
    pub fn cancel_animations(&mut self) {
        for chain in &self.animations {
            chain.cancel();
        }
    }

    pub(crate) fn set_ticks_per_second(&mut self, ticks_per_second: f32) {
        self.ticks_per_second = ticks_per_second;
        for child in self.children_mut() {
            child.set_ticks_per_second(ticks_per_second);
        }
    }

    /// Hover and click state machine for this node, then its children
    pub(crate) fn update_input(&mut self, cx: &mut UpdateCx<'_>) {
        let pointer = cx.input.pointer;
        let was_hovered = self.was_hovered;
        let interactable = self.is_interactable(cx.input.interaction_allowed);

        if interactable {
            let hovered = self.bounds().contains(pointer.x, pointer.y);
            if hovered != was_hovered {
                self.was_hovered = hovered;
                let context = HoverContext {
                    hovered,
                    x: pointer.x,
                    y: pointer.y,
                };
                if let Some(mut handler) = self.on_hover.take() {
                    handler(self, &context, &mut *cx.commands);
                    if self.on_hover.is_none() {
                        self.on_hover = Some(handler);
                    }
                }
            }
        }
        self.publish_hover_events(was_hovered, cx);

        for button in MouseButton::ALL {
            if let Some(pressed) = cx.input.button_edge(button) {
                self.handle_click(button, pressed, interactable, cx);
            }
        }

        if let Some(container) = self.container.as_mut() {
            for child in &mut container.children {
                child.update_input(cx);
            }
        }
    }

    fn handle_click(&mut self, button: MouseButton, pressed: bool, interactable: bool, cx: &mut UpdateCx<'_>) {
        let pointer = cx.input.pointer;
        if interactable && button == MouseButton::Left && pressed {
            let inside = self.bounds().contains(pointer.x, pointer.y);
            if let NodeKind::Input(input) = &mut self.kind {
                input.set_focused(inside);
            }
        }

        if !(interactable && self.was_hovered) {
            return;
        }
        let context = ClickContext {
            button,
            pressed,
            x: pointer.x,
            y: pointer.y,
        };
        let slot = match button {
            MouseButton::Left => &mut self.on_left_click,
            MouseButton::Right => &mut self.on_right_click,
        };
        if let Some(mut handler) = slot.take() {
            handler(self, &context, &mut *cx.commands);
            let slot = match button {
                MouseButton::Left => &mut self.on_left_click,
                MouseButton::Right => &mut self.on_right_click,
            };
            if slot.is_none() {
                *slot = Some(handler);
            }
        }
    }

    fn publish_hover_events(&self, was_hovered: bool, cx: &mut UpdateCx<'_>) {
        let pointer = cx.input.pointer;
        match (was_hovered, self.was_hovered) {
            (false, true) if cx.bus.has_listeners::<HoverEnter>() => {
                cx.bus.publish(&HoverEnter {
                    host: cx.host,
                    x: pointer.x,
                    y: pointer.y,
                    element: self.element_ref(),
                });
            }
            (true, false) if cx.bus.has_listeners::<HoverEnd>() => {
                cx.bus.publish(&HoverEnd {
                    host: cx.host,
                    x: pointer.x,
                    y: pointer.y,
                    element: self.element_ref(),
                });
            }
            (true, true) if cx.bus.has_listeners::<HoverMove>() => {
                let Some(last) = cx.last_pointer else {
                    return;
                };
                if last != Vec2::new(pointer.x, pointer.y) {
                    cx.bus.publish(&HoverMove {
                        host: cx.host,
                        x: pointer.x,
                        y: pointer.y,
                        last_x: last.x,
                        last_y: last.y,
                        element: self.element_ref(),
                    });
                }
            }
            _ => {}
        }
    }

    fn element_ref(&self) -> ElementRef {
        ElementRef {
            id: self.id.clone(),
            bounds: self.bounds(),
        }
    }

    /// Advance animations, resolve layout and draw this node and its subtree
    pub(crate) fn render(&mut self, canvas: &mut dyn Canvas, frame: ParentFrame, cx: &mut RenderCx<'_>) {
        if !self.enabled {
            return;
        }

        if !self.animations.is_empty() {
            let delta = cx.delta;
            let state = &mut self.state;
            let before = self.animations.len();
            self.animations.retain_mut(|chain| !chain.tick(delta, state));
            if self.animations.len() != before {
                log::trace!(
                    "{} animation chain(s) finished on {}",
                    before - self.animations.len(),
                    self.describe()
                );
            }
        }

        self.kind.prepare(&mut self.state, &*canvas, cx.viewport);
        self.position = resolve_position(&frame, &self.state, self.position.z);
        let pivot = self.pivot();
        if let Some(id) = &self.id {
            cx.anchors.insert(id.clone(), pivot);
        }

        let rotated = !self.state.rotation.is_zero();
        if rotated {
            canvas.push_transform();
            canvas.rotate_about(pivot, self.state.rotation.degrees);
        }

        let bounds = self.bounds();
        self.kind.draw(&self.state, bounds, canvas, cx);

        if let Some(container) = self.container.as_mut() {
            let clip = self.kind.clips_children();
            if clip {
                canvas.push_scissor(bounds);
            }
            let child_frame = ParentFrame::of(self.position, self.state.size);
            for child in &mut container.children {
                child.render(canvas, child_frame, cx);
            }
            if clip {
                canvas.pop_scissor();
            }
        }

        if rotated {
            canvas.pop_transform();
        }
    }

    /// Route a key press to enabled screens and focused inputs in this subtree
    pub(crate) fn dispatch_key(&mut self, context: &KeyContext, commands: &mut SceneCommands) -> bool {
        if !self.enabled {
            return false;
        }
        let mut handled = match &mut self.kind {
            NodeKind::Screen(screen) => screen.handle_key(context, commands),
            // Printable text arrives through dispatch_char
            NodeKind::Input(input) if !matches!(context.key, Key::Char(_)) => input.handle_key(context.key),
            _ => false,
        };
        for child in self.children_mut() {
            handled |= child.dispatch_key(context, commands);
        }
        handled
    }

    /// Route a typed character to focused inputs in this subtree
    pub(crate) fn dispatch_char(&mut self, ch: char) -> bool {
        if !self.enabled {
            return false;
        }
        let mut handled = match &mut self.kind {
            NodeKind::Input(input) => input.handle_key(Key::Char(ch)),
            _ => false,
        };
        for child in self.children_mut() {
            handled |= child.dispatch_char(ch);
        }
        handled
    }

    /// Route a scroll to enabled screens in this subtree
    pub(crate) fn dispatch_scroll(&mut self, pointer: Vec2, amount: f32, commands: &mut SceneCommands) -> bool {
        if !self.enabled {
            return false;
        }
        let mut handled = false;
        if let (NodeKind::Screen(screen), Some(container)) = (&mut self.kind, self.container.as_ref()) {
            let hovered = container
                .children
                .iter()
                .position(|child| child.bounds().contains(pointer.x, pointer.y))
                .map(|index| (index, container.children[index].id.clone()));
            handled = screen.handle_scroll(&ScrollContext { hovered, amount }, commands);
        }
        for child in self.children_mut() {
            handled |= child.dispatch_scroll(pointer, amount, commands);
        }
        handled
    }

    /// Route a drag step to enabled screens in this subtree
    pub(crate) fn dispatch_drag(&mut self, context: &DragContext) {
        if !self.enabled {
            return;
        }
        if let (NodeKind::Screen(screen), Some(container)) = (&mut self.kind, self.container.as_mut()) {
            screen.handle_drag(&mut container.children, context);
        }
        for child in self.children_mut() {
            child.dispatch_drag(context);
        }
    }

    /// Forget the dragged element of every screen in this subtree
    pub(crate) fn end_drag(&mut self) {
        if let NodeKind::Screen(screen) = &mut self.kind {
            screen.end_drag();
        }
        for child in self.children_mut() {
            child.end_drag();
        }
    }

    fn describe(&self) -> String {
        match &self.id {
            Some(id) => format!("{} `{id}`", self.kind.name()),
            None => self.kind.name().to_string(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind.name())
            .field("enabled", &self.enabled)
            .field("interactable", &self.interactable)
            .field("position", &self.position)
            .field("state", &self.state)
            .field("children", &self.children().len())
            .field("animations", &self.animations.len())
            .finish()
    }
}
