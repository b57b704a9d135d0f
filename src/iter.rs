//! Iterator types over stored records.

use std::iter::FusedIterator;
use std::slice;

use safe_bump::Idx;

use crate::node::Node;
use crate::store::NodeStore;

/// Iterator over records addressed by a list of node indices.
///
/// Yields all records of a [`TreeStore`](crate::TreeStore) in input order,
/// or the children of one node in the order they were linked.
pub struct Iter<'a, R, S> {
    store: &'a S,
    indices: slice::Iter<'a, Idx<Node<R>>>,
}

impl<'a, R, S> Iter<'a, R, S> {
    /// Creates an iterator over the records at `indices`.
    pub fn new(store: &'a S, indices: &'a [Idx<Node<R>>]) -> Self {
        Self {
            store,
            indices: indices.iter(),
        }
    }
}

impl<'a, R: 'a, S: NodeStore<R>> Iterator for Iter<'a, R, S> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        self.indices.next().map(|&idx| &store.get_node(idx).record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<'a, R: 'a, S: NodeStore<R>> DoubleEndedIterator for Iter<'a, R, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let store = self.store;
        self.indices.next_back().map(|&idx| &store.get_node(idx).record)
    }
}

impl<'a, R: 'a, S: NodeStore<R>> ExactSizeIterator for Iter<'a, R, S> {}

impl<'a, R: 'a, S: NodeStore<R>> FusedIterator for Iter<'a, R, S> {}

/// Iterator walking parent links from a node up to the root, nearest first.
///
/// Iterative by construction: the walk length is bounded by the depth limit
/// enforced when the tree was built, never by the call stack.
pub struct Ancestors<'a, R, S> {
    store: &'a S,
    next: Option<Idx<Node<R>>>,
}

impl<'a, R, S> Ancestors<'a, R, S> {
    /// Starts the walk at `first`, which is yielded first.
    pub const fn new(store: &'a S, first: Option<Idx<Node<R>>>) -> Self {
        Self { store, next: first }
    }
}

impl<'a, R: 'a, S: NodeStore<R>> Iterator for Ancestors<'a, R, S> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        let node = store.get_node(self.next?);
        self.next = node.parent;
        Some(&node.record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A node at depth d has exactly d ancestors above it.
        let remaining = self
            .next
            .map_or(0, |idx| self.store.get_node(idx).depth + 1);
        (remaining, Some(remaining))
    }
}

impl<'a, R: 'a, S: NodeStore<R>> ExactSizeIterator for Ancestors<'a, R, S> {}

impl<'a, R: 'a, S: NodeStore<R>> FusedIterator for Ancestors<'a, R, S> {}
