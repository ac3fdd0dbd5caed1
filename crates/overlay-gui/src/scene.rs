use std::collections::HashMap;

use crate::canvas::Canvas;
use crate::commands::{SceneCommand, SceneCommands};
use crate::config::HudConfig;
use crate::events::{EventBus, FrameRender, HostContext, PointerMove};
use crate::input::{ButtonState, DragContext, FrameInput, Key, KeyContext, Modifiers, PointerSnapshot};
use crate::layout::ParentFrame;
use crate::math::Vec2;
use crate::node::{Node, NodeId, RenderCx, UpdateCx};

type InteractionGate = Box<dyn Fn() -> bool>;

/// Owns the top-level elements and drives the per-tick walks
///
/// The host calls [`update`](Self::update) once per logical tick with the raw
/// pointer state and [`render`](Self::render) once per frame. Previous button
/// state lives here, so independent scenes never share input history.
pub struct SceneManager {
    config: HudConfig,
    elements: Vec<Node>,
    previous_buttons: ButtonState,
    last_pointer: Option<Vec2>,
    commands: SceneCommands,
    bus: EventBus,
    /// Element pivots recorded by the latest render
    anchors: HashMap<NodeId, Vec2>,
    interaction_gate: Option<InteractionGate>,
    tick: u64,
    viewport: Vec2,
}

impl SceneManager {
    pub fn new(config: HudConfig) -> Self {
        let viewport = config.viewport_extent();
        Self {
            config,
            elements: Vec::new(),
            previous_buttons: ButtonState::default(),
            last_pointer: None,
            commands: SceneCommands::new(),
            bus: EventBus::new(),
            anchors: HashMap::new(),
            interaction_gate: None,
            tick: 0,
            viewport,
        }
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Add a top-level element. It adopts the scene's tick rate for future animations.
    pub fn add(&mut self, mut node: Node) {
        node.set_ticks_per_second(self.config.ticks_per_second);
        log::debug!("Adding element {:?} to scene", node.id());
        self.elements.push(node);
    }

    /// Remove an element anywhere in the tree
    pub fn remove(&mut self, id: &NodeId) -> Option<Node> {
        let removed = match self.elements.iter().position(|node| node.id() == Some(id)) {
            Some(index) => Some(self.elements.remove(index)),
            None => self
                .elements
                .iter_mut()
                .find_map(|node| node.remove_descendant(id)),
        };
        match &removed {
            Some(node) => {
                log::debug!("Removed element `{id}` from scene");
                self.forget_anchors(node);
            }
            None => log::warn!("Cannot remove `{id}`: no such element"),
        }
        removed
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.anchors.clear();
    }

    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        self.elements.iter().find_map(|node| node.find(id))
    }

    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.elements.iter_mut().find_map(|node| node.find_mut(id))
    }

    pub fn elements(&self) -> &[Node] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Queue for structural changes, applied at the start of the next update
    pub fn commands_mut(&mut self) -> &mut SceneCommands {
        &mut self.commands
    }

    /// Predicate consulted every tick; while it returns `false` no element is
    /// interactable
    pub fn set_interaction_gate(&mut self, gate: impl Fn() -> bool + 'static) {
        self.interaction_gate = Some(Box::new(gate));
    }

    pub fn clear_interaction_gate(&mut self) {
        self.interaction_gate = None;
    }

    pub fn previous_buttons(&self) -> ButtonState {
        self.previous_buttons
    }

    /// Pointer position of the last update, Y already corrected
    pub fn last_pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Whether a top-level screen is currently shown
    pub fn screen_open(&self) -> bool {
        self.elements
            .iter()
            .any(|node| node.is_screen() && node.is_enabled())
    }

    /// Run one input tick
    ///
    /// Applies commands queued since the last tick, then walks every element
    /// depth-first running the hover and click state machine, then stores the
    /// button state for the next tick. `raw_y` is scaled by the configured
    /// `pointer_y_scale` before anything looks at it.
    pub fn update(&mut self, raw_x: f32, raw_y: f32, left_down: bool, right_down: bool) {
        self.apply_commands();

        let pointer = PointerSnapshot::new(raw_x, raw_y * self.config.pointer_y_scale, left_down, right_down);
        let position = Vec2::new(pointer.x, pointer.y);
        let host = self.host_context();
        let allowed = self.interaction_gate.as_ref().map_or(true, |gate| gate());
        let screen_open = self.screen_open();

        if let Some(last) = self.last_pointer.filter(|last| *last != position) {
            if self.bus.has_listeners::<PointerMove>() {
                self.bus.publish(&PointerMove {
                    host,
                    x: position.x,
                    y: position.y,
                    last_x: last.x,
                    last_y: last.y,
                });
            }
        }

        let mut cx = UpdateCx {
            input: FrameInput {
                pointer,
                previous: self.previous_buttons,
                interaction_allowed: allowed,
            },
            last_pointer: self.last_pointer,
            host,
            commands: &mut self.commands,
            bus: &mut self.bus,
        };
        for element in &mut self.elements {
            cx.input.interaction_allowed = allowed && (!screen_open || element.is_screen());
            element.update_input(&mut cx);
        }

        self.update_drag(position, left_down);

        self.previous_buttons = pointer.buttons;
        self.last_pointer = Some(position);
        self.tick += 1;
    }

    fn update_drag(&mut self, position: Vec2, left_down: bool) {
        if !left_down {
            for element in &mut self.elements {
                element.end_drag();
            }
            return;
        }
        let Some(last) = self.last_pointer.filter(|_| self.previous_buttons.left) else {
            return;
        };
        let delta = position - last;
        if delta == Vec2::ZERO {
            return;
        }
        let context = DragContext {
            x: position.x,
            y: position.y,
            dx: delta.x,
            dy: delta.y,
        };
        for element in &mut self.elements {
            element.dispatch_drag(&context);
        }
    }

    /// Render every enabled element, advancing animations by `delta` ticks
    pub fn render(&mut self, canvas: &mut dyn Canvas, delta: f32) {
        let reported = canvas.viewport();
        self.viewport = if reported.x > 0.0 && reported.y > 0.0 {
            reported
        } else {
            self.config.viewport_extent()
        };

        // Hidden or removed elements drop out of the map after one frame
        let previous_anchors = std::mem::take(&mut self.anchors);
        let mut anchors = HashMap::with_capacity(previous_anchors.len());
        let mut cx = RenderCx {
            delta,
            viewport: self.viewport,
            anchors: &mut anchors,
            previous_anchors: &previous_anchors,
        };
        let frame = ParentFrame::viewport(self.viewport);
        for element in &mut self.elements {
            element.render(canvas, frame, &mut cx);
        }
        self.anchors = anchors;

        if self.bus.has_listeners::<FrameRender>() {
            let host = self.host_context();
            self.bus.publish(&FrameRender { host, delta });
        }
    }

    /// Forward a scroll to shown screens
    ///
    /// # Returns
    /// Whether a screen handled it.
    pub fn scroll(&mut self, amount: f32) -> bool {
        let pointer = self.last_pointer.unwrap_or(Vec2::NAN);
        let mut handled = false;
        for element in &mut self.elements {
            handled |= element.dispatch_scroll(pointer, amount, &mut self.commands);
        }
        handled
    }

    /// Forward a key press to shown screens and focused text inputs
    pub fn key_pressed(&mut self, key: Key, modifiers: Modifiers) -> bool {
        let context = KeyContext { key, modifiers };
        let mut handled = false;
        for element in &mut self.elements {
            handled |= element.dispatch_key(&context, &mut self.commands);
        }
        handled
    }

    /// Forward a typed character to focused text inputs
    pub fn char_typed(&mut self, ch: char) -> bool {
        let mut handled = false;
        for element in &mut self.elements {
            handled |= element.dispatch_char(ch);
        }
        handled
    }

    /// Apply queued structural changes now instead of on the next update
    pub fn apply_commands(&mut self) {
        let pending = self.commands.take();
        if pending.is_empty() {
            return;
        }
        log::trace!("Applying {} deferred scene command(s)", pending.len());
        for command in pending {
            match command {
                SceneCommand::Add(node) => self.add(node),
                SceneCommand::Remove(id) => {
                    self.remove(&id);
                }
                SceneCommand::With(id, f) => match self.find_mut(&id) {
                    Some(node) => f(node),
                    None => log::warn!("Skipping deferred change to `{id}`: no such element"),
                },
            }
        }
    }

    fn forget_anchors(&mut self, node: &Node) {
        if let Some(id) = node.id() {
            self.anchors.remove(id);
        }
        for child in node.children() {
            self.forget_anchors(child);
        }
    }

    fn host_context(&self) -> HostContext {
        HostContext {
            tick: self.tick,
            viewport: self.viewport,
        }
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new(HudConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, FixedMetrics, RecordingCanvas};
    use crate::color::Color;
    use crate::easing::linear;
    use crate::elements::{LineEnd, ScreenElement};
    use crate::events::{HoverEnd, HoverEnter, HoverMove};
    use crate::input::MouseButton;
    use crate::ui;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn unscaled() -> SceneManager {
        let _ = env_logger::builder().is_test(true).try_init();
        SceneManager::new(HudConfig {
            pointer_y_scale: 1.0,
            ..HudConfig::default()
        })
    }

    fn canvas() -> RecordingCanvas {
        RecordingCanvas::new(Vec2::new(800.0, 600.0))
    }

    fn centered_button(id: &str) -> Node {
        ui::rectangle()
            .with_id(id)
            .with_size(100.0, 50.0)
            .with_anchor(Vec2::splat(0.5))
    }

    #[test]
    fn test_layout_resolves_against_viewport() {
        let mut scene = unscaled();
        scene.add(centered_button("button"));
        scene.render(&mut canvas(), 0.0);
        let node = scene.find(&NodeId::from("button")).unwrap();
        assert_eq!(node.position(), crate::math::Vec3::new(350.0, 275.0, 0.0));
    }

    #[test]
    fn test_hover_events_on_bus() {
        let mut scene = unscaled();
        scene.add(centered_button("button"));
        scene.render(&mut canvas(), 0.0);

        let log = Rc::new(RefCell::new(Vec::new()));
        let enter = log.clone();
        scene.events_mut().subscribe(move |e: &HoverEnter| enter.borrow_mut().push(("enter", e.host.tick)));
        let moved = log.clone();
        scene.events_mut().subscribe(move |e: &HoverMove| moved.borrow_mut().push(("move", e.host.tick)));
        let end = log.clone();
        scene.events_mut().subscribe(move |e: &HoverEnd| end.borrow_mut().push(("end", e.host.tick)));

        let path = [(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (400.0, 300.0), (400.0, 300.0), (410.0, 300.0), (410.0, 300.0), (0.0, 0.0)];
        for (x, y) in path {
            scene.update(x, y, false, false);
        }
        assert_eq!(*log.borrow(), vec![("enter", 3), ("move", 5), ("end", 7)]);
    }

    #[test]
    fn test_pointer_y_is_scaled_once() {
        let mut scene = SceneManager::default();
        let hovered = Rc::new(Cell::new(false));
        let flag = hovered.clone();
        scene.add(
            ui::rectangle()
                .with_size(100.0, 100.0)
                .with_offset(0.0, 200.0)
                .on_hover(move |_, ctx, _| flag.set(ctx.hovered)),
        );
        scene.render(&mut canvas(), 0.0);

        scene.update(50.0, 250.0, false, false);
        assert!(!hovered.get());
        scene.update(50.0, 500.0, false, false);
        assert!(hovered.get());
        assert_eq!(scene.last_pointer(), Some(Vec2::new(50.0, 250.0)));
    }

    #[test]
    fn test_click_edges_with_previous_state() {
        let mut scene = unscaled();
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let sink = clicks.clone();
        scene.add(centered_button("button").on_right_click(move |_, ctx, _| {
            sink.borrow_mut().push((ctx.button, ctx.pressed))
        }));
        scene.render(&mut canvas(), 0.0);

        for right in [false, false, true, true, true, true, false] {
            scene.update(400.0, 300.0, false, right);
        }
        assert_eq!(
            *clicks.borrow(),
            vec![(MouseButton::Right, true), (MouseButton::Right, false)]
        );
        assert_eq!(scene.previous_buttons(), ButtonState::new(false, false));
    }

    #[test]
    fn test_structural_changes_are_deferred() {
        let mut scene = unscaled();
        scene.add(centered_button("button").on_left_click(|_, ctx, commands| {
            if ctx.pressed {
                commands.remove("button");
                commands.add(ui::rectangle().with_id("replacement"));
            }
        }));
        scene.render(&mut canvas(), 0.0);

        scene.update(400.0, 300.0, false, false);
        scene.update(400.0, 300.0, true, false);
        assert!(scene.find(&NodeId::from("button")).is_some());
        assert_eq!(scene.len(), 1);

        scene.update(400.0, 300.0, false, false);
        assert!(scene.find(&NodeId::from("button")).is_none());
        assert!(scene.find(&NodeId::from("replacement")).is_some());
    }

    #[test]
    fn test_interaction_gate_blocks_input() {
        let mut scene = unscaled();
        let allowed = Rc::new(Cell::new(false));
        let gate = allowed.clone();
        scene.set_interaction_gate(move || gate.get());
        scene.add(centered_button("button"));
        scene.render(&mut canvas(), 0.0);

        scene.update(400.0, 300.0, false, false);
        assert!(!scene.find(&NodeId::from("button")).unwrap().is_hovered());
        allowed.set(true);
        scene.update(400.0, 300.0, false, false);
        assert!(scene.find(&NodeId::from("button")).unwrap().is_hovered());
    }

    #[test]
    fn test_open_screen_blocks_other_elements() {
        let mut scene = unscaled();
        let closed = Rc::new(Cell::new(false));
        let on_close = closed.clone();
        scene.add(centered_button("behind"));
        scene.add(
            ui::screen(ScreenElement::new().on_close(move || on_close.set(true)))
                .with_id("menu")
                .with_child(centered_button("menu-item")),
        );
        scene.commands_mut().show("menu");
        scene.update(0.0, 0.0, false, false);
        scene.render(&mut canvas(), 0.0);

        scene.update(400.0, 300.0, false, false);
        assert!(!scene.find(&NodeId::from("behind")).unwrap().is_hovered());
        assert!(scene.find(&NodeId::from("menu-item")).unwrap().is_hovered());

        scene.find_mut(&NodeId::from("menu")).unwrap().hide();
        assert!(closed.get());
        scene.update(401.0, 300.0, false, false);
        assert!(scene.find(&NodeId::from("behind")).unwrap().is_hovered());
    }

    #[test]
    fn test_screen_fills_viewport_and_lays_out_children() {
        let mut scene = unscaled();
        scene.add(
            ui::screen(ScreenElement::new())
                .with_enabled(true)
                .with_child(centered_button("item")),
        );
        let mut canvas = canvas();
        scene.render(&mut canvas, 0.0);
        let (rect, color) = canvas.fills().next().unwrap();
        assert_eq!(rect.max, [800.0, 600.0]);
        assert_eq!(color.a, 0.8);
        assert_eq!(scene.find(&NodeId::from("item")).unwrap().position().x, 350.0);
    }

    #[test]
    fn test_drag_moves_child_under_pointer() {
        let mut scene = unscaled();
        scene.add(
            ui::screen(ScreenElement::new().on_drag(|child, ctx| {
                child.state_mut().offset.x += ctx.dx;
                child.state_mut().offset.y += ctx.dy;
            }))
            .with_enabled(true)
            .with_child(ui::rectangle().with_id("card").with_size(50.0, 50.0)),
        );
        scene.render(&mut canvas(), 0.0);

        scene.update(10.0, 10.0, false, false);
        scene.update(10.0, 10.0, true, false);
        scene.update(30.0, 15.0, true, false);
        scene.update(100.0, 15.0, true, false);
        scene.update(100.0, 15.0, false, false);
        scene.update(200.0, 15.0, true, false);

        let card = scene.find(&NodeId::from("card")).unwrap();
        assert_eq!(card.state().offset.x, 90.0);
        assert_eq!(card.state().offset.y, 5.0);
    }

    #[test]
    fn test_scroll_reports_hovered_child() {
        let mut scene = unscaled();
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        scene.add(
            ui::screen(ScreenElement::new().on_scroll(move |ctx, _| {
                *sink.borrow_mut() = Some((ctx.hovered.clone(), ctx.amount));
            }))
            .with_enabled(true)
            .with_child(ui::rectangle().with_size(10.0, 10.0))
            .with_child(centered_button("list")),
        );
        scene.render(&mut canvas(), 0.0);
        scene.update(400.0, 300.0, false, false);

        assert!(scene.scroll(-1.0));
        assert_eq!(
            *seen.borrow(),
            Some((Some((1, Some(NodeId::from("list")))), -1.0))
        );
    }

    #[test]
    fn test_text_input_focus_and_typing() {
        let mut scene = unscaled();
        scene.add(ui::input().with_id("name").with_offset(10.0, 10.0));
        scene.render(&mut canvas(), 0.0);

        scene.update(20.0, 20.0, true, false);
        scene.update(20.0, 20.0, false, false);
        for ch in "Bob!".chars() {
            scene.char_typed(ch);
        }
        assert!(scene.key_pressed(Key::Backspace, Modifiers::default()));
        let input = scene.find(&NodeId::from("name")).and_then(Node::as_input).unwrap();
        assert_eq!(input.text(), "Bo");

        scene.update(500.0, 500.0, true, false);
        let input = scene.find(&NodeId::from("name")).and_then(Node::as_input).unwrap();
        assert!(!input.is_focused());
        assert!(!scene.char_typed('x'));
    }

    #[test]
    fn test_render_advances_animations_and_publishes_frames() {
        let mut scene = unscaled();
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        scene.events_mut().subscribe(move |_: &FrameRender| counter.set(counter.get() + 1));

        let mut node = ui::rectangle().with_id("box").with_size(10.0, 10.0);
        node.animate(1.0, linear, |s| s.offset.x = 40.0).then(1.0, linear, |s| s.offset.x = 0.0);
        scene.add(node);

        let mut canvas = canvas();
        for _ in 0..2 {
            scene.render(&mut canvas, 10.0);
        }
        assert_eq!(scene.find(&NodeId::from("box")).unwrap().position().x, 40.0);
        scene.render(&mut canvas, 10.0);
        assert_eq!(scene.find(&NodeId::from("box")).unwrap().position().x, 20.0);
        assert_eq!(frames.get(), 3);
    }

    #[test]
    fn test_line_follows_anchored_elements() {
        let mut scene = unscaled();
        scene.add(ui::rectangle().with_id("a").with_size(10.0, 10.0).with_origin(Vec2::splat(0.5)).with_offset(100.0, 100.0));
        scene.add(ui::rectangle().with_id("b").with_size(10.0, 10.0).with_origin(Vec2::splat(0.5)).with_offset(200.0, 100.0));
        scene.add(ui::line(LineEnd::Element("a".into()), LineEnd::Element("b".into())).with_color(Color::WHITE));

        let mut canvas = canvas();
        scene.render(&mut canvas, 0.0);
        let dots: Vec<_> = canvas
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect { rect, .. } if rect.width() == 2.0 => Some(rect.min),
                _ => None,
            })
            .collect();
        assert_eq!(dots.len(), 10);
        assert_eq!(dots[0], [100.0, 100.0]);
        assert_eq!(dots[5], [150.0, 100.0]);
    }

    fn dot_count(canvas: &RecordingCanvas) -> usize {
        canvas
            .commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillRect { rect, .. } if rect.width() == 2.0))
            .count()
    }

    fn connected_pair(scene: &mut SceneManager) {
        scene.add(ui::rectangle().with_id("a").with_size(10.0, 10.0).with_offset(100.0, 100.0));
        scene.add(ui::rectangle().with_id("b").with_size(10.0, 10.0).with_offset(200.0, 100.0));
        scene.add(ui::line(LineEnd::Element("a".into()), LineEnd::Element("b".into())).with_color(Color::WHITE));
    }

    #[test]
    fn test_line_stops_at_removed_endpoint() {
        let mut scene = unscaled();
        connected_pair(&mut scene);
        let mut canvas = canvas();
        scene.render(&mut canvas, 0.0);
        assert_eq!(dot_count(&canvas), 10);

        scene.remove(&NodeId::from("a"));
        canvas.clear();
        scene.render(&mut canvas, 0.0);
        assert_eq!(dot_count(&canvas), 0);
        assert!(!scene.anchors.contains_key(&NodeId::from("a")));
    }

    #[test]
    fn test_line_stops_at_hidden_endpoint() {
        let mut scene = unscaled();
        connected_pair(&mut scene);
        let mut canvas = canvas();
        scene.render(&mut canvas, 0.0);

        scene.find_mut(&NodeId::from("b")).unwrap().hide();
        for _ in 0..2 {
            canvas.clear();
            scene.render(&mut canvas, 0.0);
        }
        assert_eq!(dot_count(&canvas), 0);
        assert_eq!(scene.anchors.len(), 1);

        scene.find_mut(&NodeId::from("b")).unwrap().show();
        canvas.clear();
        scene.render(&mut canvas, 0.0);
        assert_eq!(dot_count(&canvas), 10);
    }

    #[test]
    fn test_line_drawn_before_its_endpoint() {
        let mut scene = unscaled();
        scene.add(ui::line(LineEnd::Point(Vec2::ZERO), LineEnd::Element("late".into())).with_color(Color::WHITE));
        scene.add(ui::rectangle().with_id("late").with_size(10.0, 10.0).with_offset(50.0, 0.0));

        let mut canvas = canvas();
        scene.render(&mut canvas, 0.0);
        assert_eq!(dot_count(&canvas), 0);
        canvas.clear();
        scene.render(&mut canvas, 0.0);
        assert_eq!(dot_count(&canvas), 10);
    }

    #[test]
    fn test_open_screen_keeps_focus_off_background_input() {
        let mut scene = unscaled();
        scene.add(ui::input().with_id("background").with_offset(10.0, 10.0));
        scene.add(
            ui::screen(ScreenElement::new())
                .with_id("menu")
                .with_child(ui::input().with_id("menu-field").with_anchor(Vec2::splat(0.5))),
        );
        scene.commands_mut().show("menu");
        scene.update(0.0, 0.0, false, false);
        scene.render(&mut canvas(), 0.0);

        scene.update(20.0, 20.0, true, false);
        scene.update(20.0, 20.0, false, false);
        scene.update(400.0, 300.0, true, false);
        scene.update(400.0, 300.0, false, false);
        for ch in "hi".chars() {
            scene.char_typed(ch);
        }

        let text_of = |scene: &SceneManager, id: &str| {
            scene
                .find(&NodeId::from(id))
                .and_then(Node::as_input)
                .map(|input| (input.text().to_owned(), input.is_focused()))
        };
        assert_eq!(text_of(&scene, "background"), Some((String::new(), false)));
        assert_eq!(text_of(&scene, "menu-field"), Some(("hi".to_owned(), true)));
    }

    #[test]
    fn test_text_measures_once_metrics_arrive() {
        let mut scene = unscaled();
        scene.add(ui::text("hello").with_id("label").with_anchor(Vec2::splat(0.5)));

        let mut canvas = canvas();
        scene.render(&mut canvas, 0.0);
        assert_eq!(canvas.texts().count(), 0);
        assert_eq!(scene.find(&NodeId::from("label")).unwrap().state().size.x, 0.0);

        canvas.set_metrics(Some(FixedMetrics {
            char_width: 6.0,
            line_height: 10.0,
        }));
        canvas.clear();
        scene.render(&mut canvas, 0.0);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["hello"]);
        let label = scene.find(&NodeId::from("label")).unwrap();
        assert_eq!(label.position().x, 385.0);
    }

    #[test]
    fn test_remove_nested_and_missing() {
        let mut scene = unscaled();
        scene.add(ui::rectangle().with_child(ui::rectangle().with_id("nested")));
        assert!(scene.remove(&NodeId::from("nested")).is_some());
        assert!(scene.remove(&NodeId::from("nested")).is_none());
        assert_eq!(scene.len(), 1);
    }
}
