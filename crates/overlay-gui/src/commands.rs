use crate::node::{Node, NodeId};

/// A structural change requested during a tick
pub enum SceneCommand {
    Add(Node),
    Remove(NodeId),
    With(NodeId, Box<dyn FnOnce(&mut Node)>),
}

/// Deferred mutations, applied by the scene at the start of the next update
///
/// Handlers receive this queue instead of the scene itself, so the tree is
/// never restructured while it is being walked.
#[derive(Default)]
pub struct SceneCommands {
    queue: Vec<SceneCommand>,
}

impl SceneCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element
    pub fn add(&mut self, node: Node) {
        self.queue.push(SceneCommand::Add(node));
    }

    /// Remove an element anywhere in the tree
    pub fn remove(&mut self, id: impl Into<NodeId>) {
        self.queue.push(SceneCommand::Remove(id.into()));
    }

    /// Run `f` on an element anywhere in the tree. Skipped if it no longer exists.
    pub fn with_node(&mut self, id: impl Into<NodeId>, f: impl FnOnce(&mut Node) + 'static) {
        self.queue.push(SceneCommand::With(id.into(), Box::new(f)));
    }

    pub fn show(&mut self, id: impl Into<NodeId>) {
        self.with_node(id, Node::show);
    }

    pub fn hide(&mut self, id: impl Into<NodeId>) {
        self.with_node(id, Node::hide);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn take(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.queue)
    }
}

impl std::fmt::Debug for SceneCommands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneCommands")
            .field("pending", &self.queue.len())
            .finish()
    }
}
