//! Headless node arena standing in for the document tree

use std::cell::RefCell;

/// Handle to a node in a [`NodeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A pointer interaction, carrying its composed path (target first, root last).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    path: Vec<NodeId>,
}

impl PointerEvent {
    pub fn target(&self) -> NodeId {
        self.path[0]
    }

    /// Target and all of its ancestors
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }
}

/// Parent-linked node arena.
///
/// Nodes are never removed; a detached window container simply stops being
/// bound, which is all the outside-click check cares about.
#[derive(Debug, Default)]
pub struct NodeTree {
    parents: RefCell<Vec<Option<NodeId>>>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&self) -> NodeId {
        self.push(None)
    }

    pub fn add_child(&self, parent: NodeId) -> NodeId {
        self.push(Some(parent))
    }

    fn push(&self, parent: Option<NodeId>) -> NodeId {
        let mut parents = self.parents.borrow_mut();
        let id = NodeId(parents.len());
        parents.push(parent);
        id
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.borrow().get(node.0).copied().flatten()
    }

    /// True when `node` is `ancestor` or lies anywhere in its subtree
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Build the event a click on `target` would produce
    pub fn click(&self, target: NodeId) -> PointerEvent {
        let mut path = vec![target];
        let mut current = self.parent(target);
        while let Some(id) = current {
            path.push(id);
            current = self.parent(id);
        }
        PointerEvent { path }
    }
}
