//! Arena-backed storage (single-threaded).

use safe_bump::{Arena, Idx};

use crate::node::Node;
use crate::store::NodeStore;

/// Single-threaded storage backend using an [`Arena`].
pub struct NodeArena<R> {
    nodes: Arena<Node<R>>,
    children: Vec<Vec<Idx<Node<R>>>>,
}

impl<R> NodeArena<R> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            children: Vec::new(),
        }
    }
}

impl<R> Default for NodeArena<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> NodeStore<R> for NodeArena<R> {
    fn alloc_node(&mut self, node: Node<R>) -> Idx<Node<R>> {
        self.children.push(Vec::new());
        self.nodes.alloc(node)
    }

    fn get_node(&self, idx: Idx<Node<R>>) -> &Node<R> {
        self.nodes.get(idx)
    }

    fn push_child(&mut self, parent: Idx<Node<R>>, child: Idx<Node<R>>) {
        self.children[parent.into_raw()].push(child);
    }

    fn children(&self, idx: Idx<Node<R>>) -> &[Idx<Node<R>>] {
        &self.children[idx.into_raw()]
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
