//! Storage abstraction for tree nodes.

use safe_bump::Idx;

use crate::node::Node;

/// Storage backend for a [`TreeStore`](crate::TreeStore).
///
/// [`NodeArena`](crate::NodeArena) is the default, backed by
/// [`Arena`](safe_bump::Arena).
/// Child lists live next to the arena because nodes are immutable once
/// allocated while a parent keeps gaining children during construction.
pub trait NodeStore<R> {
    /// Allocates a node with an empty child list, returning its index.
    fn alloc_node(&mut self, node: Node<R>) -> Idx<Node<R>>;

    /// Returns a reference to the node at `idx`.
    fn get_node(&self, idx: Idx<Node<R>>) -> &Node<R>;

    /// Appends `child` to the child list of `parent`.
    fn push_child(&mut self, parent: Idx<Node<R>>, child: Idx<Node<R>>);

    /// Returns the children of `idx` in the order they were linked.
    fn children(&self, idx: Idx<Node<R>>) -> &[Idx<Node<R>>];

    /// Returns the number of allocated nodes.
    fn len(&self) -> usize;

    /// Returns `true` if no node has been allocated.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
