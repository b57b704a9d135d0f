//! Tree node stored in the node arena.

use std::fmt;

use safe_bump::Idx;

/// One record plus its resolved position in the tree.
///
/// Nodes never change after allocation. The parent link is an arena index,
/// not an owning pointer: the arena owns every node, links are lookups.
pub struct Node<R> {
    /// The caller's record, returned verbatim by queries.
    pub record: R,
    /// Index of the parent node, `None` for the root.
    pub parent: Option<Idx<Self>>,
    /// Number of ancestor hops to the root (0 for the root).
    pub depth: usize,
}

impl<R> Node<R> {
    /// Creates the root node.
    #[must_use]
    pub const fn root(record: R) -> Self {
        Self {
            record,
            parent: None,
            depth: 0,
        }
    }

    /// Creates a node hanging under `parent`, whose own depth is `parent_depth`.
    #[must_use]
    pub const fn child(record: R, parent: Idx<Self>, parent_depth: usize) -> Self {
        Self {
            record,
            parent: Some(parent),
            depth: parent_depth + 1,
        }
    }

    /// Returns `true` if this node is the tree root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

// Idx carries no Debug bound on R, print the raw parent index instead.

impl<R: fmt::Debug> fmt::Debug for Node<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("record", &self.record)
            .field("parent", &self.parent.map(Idx::into_raw))
            .field("depth", &self.depth)
            .finish()
    }
}
