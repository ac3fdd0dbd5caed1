//! Typed publish/subscribe bus
//!
//! External collaborators subscribe to event types instead of being wired
//! into the element tree. Listeners are keyed by the event's [`TypeId`] and
//! invoked synchronously, in subscription order, from within the scene tick.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::math::Vec2;
use crate::node::NodeId;
use crate::primitives::Rect;

/// Host state attached to every event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostContext {
    /// Number of completed scene updates
    pub tick: u64,
    pub viewport: Vec2,
}

/// An element an event refers to
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRef {
    pub id: Option<NodeId>,
    /// Resolved screen bounds at the time of the event
    pub bounds: Rect,
}

/// The pointer entered an element
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEnter {
    pub host: HostContext,
    pub x: f32,
    pub y: f32,
    pub element: ElementRef,
}

/// The pointer moved while staying over an element
#[derive(Debug, Clone, PartialEq)]
pub struct HoverMove {
    pub host: HostContext,
    pub x: f32,
    pub y: f32,
    pub last_x: f32,
    pub last_y: f32,
    pub element: ElementRef,
}

/// The pointer left an element
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEnd {
    pub host: HostContext,
    pub x: f32,
    pub y: f32,
    pub element: ElementRef,
}

/// The pointer moved, anywhere
#[derive(Debug, Clone, PartialEq)]
pub struct PointerMove {
    pub host: HostContext,
    pub x: f32,
    pub y: f32,
    pub last_x: f32,
    pub last_y: f32,
}

/// A frame was rendered
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRender {
    pub host: HostContext,
    pub delta: f32,
}

/// Returned by [`EventBus::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&dyn Any)>;

/// Registry of listeners keyed by event type
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<TypeId, Vec<(SubscriptionId, Listener)>>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for events of type `E`
    pub fn subscribe<E: 'static>(&mut self, mut listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let erased: Listener = Box::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                listener(event);
            }
        });
        self.listeners
            .entry(TypeId::of::<E>())
            .or_default()
            .push((id, erased));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        for listeners in self.listeners.values_mut() {
            if let Some(index) = listeners.iter().position(|(existing, _)| *existing == id) {
                listeners.remove(index);
                return true;
            }
        }
        false
    }

    /// Deliver `event` to every listener of its type
    ///
    /// # Returns
    /// How many listeners received it.
    pub fn publish<E: 'static>(&mut self, event: &E) -> usize {
        let Some(listeners) = self.listeners.get_mut(&TypeId::of::<E>()) else {
            return 0;
        };
        for (_, listener) in listeners.iter_mut() {
            listener(event);
        }
        listeners.len()
    }

    pub fn listener_count<E: 'static>(&self) -> usize {
        self.listeners
            .get(&TypeId::of::<E>())
            .map_or(0, |listeners| listeners.len())
    }

    /// Whether anyone listens for `E`, to skip building events nobody reads
    pub fn has_listeners<E: 'static>(&self) -> bool {
        self.listener_count::<E>() > 0
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("event_types", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
