//! The tree store and its borrowed node view.

use std::collections::HashMap;
use std::fmt;

use safe_bump::Idx;

use crate::arena::NodeArena;
use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::iter::{Ancestors, Iter};
use crate::node::Node;
use crate::ops::build::{Linked, link_records};
use crate::record::Record;
use crate::store::NodeStore;

/// Validated, immutable tree built from a flat list of records.
///
/// Built once by [`new`](Self::new) and then queried read-only: no method
/// takes `&mut self`, so the index, child lists and root never change after
/// construction. A built store is `Sync` whenever `R` and `R::Id` are, so it can be
/// shared between threads for reads without locking.
pub struct TreeStore<R: Record, S = NodeArena<R>> {
    store: S,
    index: HashMap<R::Id, Idx<Node<R>>>,
    order: Vec<Idx<Node<R>>>,
    root: Idx<Node<R>>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<R: Record> TreeStore<R> {
    /// Builds a store from `records` with the default depth limit.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure in input order; see
    /// [`with_store`](Self::with_store).
    pub fn new(records: impl IntoIterator<Item = R>) -> Result<Self, TreeError<R::Id>> {
        Self::with_config(records, TreeConfig::default())
    }

    /// Builds a store from `records` with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure in input order; see
    /// [`with_store`](Self::with_store).
    pub fn with_config(
        records: impl IntoIterator<Item = R>,
        config: TreeConfig,
    ) -> Result<Self, TreeError<R::Id>> {
        Self::with_store(NodeArena::new(), records, config)
    }
}

impl<R: Record, S: NodeStore<R>> TreeStore<R, S> {
    /// Builds a store in the given backend.
    ///
    /// Records are processed once, left to right. For each record the checks
    /// run in this order and the first failure aborts the build:
    ///
    /// 1. parent equals own id: [`TreeError::SelfLink`]
    /// 2. second root: [`TreeError::MultipleRoots`]
    /// 3. id seen before: [`TreeError::DuplicateId`]
    /// 4. parent not seen before: [`TreeError::UnresolvedParent`]
    /// 5. ancestor chain longer than `config.max_depth`:
    ///    [`TreeError::MaxDepthExceeded`]
    ///
    /// # Errors
    ///
    /// Any of the above, or [`TreeError::EmptyTree`] if `records` is empty.
    pub fn with_store(
        mut store: S,
        records: impl IntoIterator<Item = R>,
        config: TreeConfig,
    ) -> Result<Self, TreeError<R::Id>> {
        let Linked { index, order, root } = link_records(&mut store, records, config)?;
        Ok(Self {
            store,
            index,
            order,
            root,
        })
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl<R: Record, S: NodeStore<R>> TreeStore<R, S> {
    /// Returns the root record.
    #[must_use]
    pub fn root(&self) -> &R {
        &self.store.get_node(self.root).record
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the store holds no records. Never the case for a
    /// successfully built store.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if a record with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &R::Id) -> bool {
        self.index.contains_key(id)
    }

    /// Returns an iterator over all records in input order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, R, S> {
        Iter::new(&self.store, &self.order)
    }

    /// Returns all records in input order.
    #[must_use]
    pub fn get_all(&self) -> Vec<&R> {
        self.iter().collect()
    }

    /// Returns a view of the node holding `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no record has this id.
    pub fn node(&self, id: &R::Id) -> Result<NodeRef<'_, R, S>, TreeError<R::Id>> {
        self.index
            .get(id)
            .map(|&idx| NodeRef {
                store: &self.store,
                idx,
            })
            .ok_or_else(|| TreeError::NotFound(id.clone()))
    }

    /// Returns the record with `id`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no record has this id.
    pub fn get_item(&self, id: &R::Id) -> Result<&R, TreeError<R::Id>> {
        self.node(id).map(|node| node.record())
    }

    /// Returns the parent record of `id`, `None` for the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no record has this id.
    pub fn get_parent(&self, id: &R::Id) -> Result<Option<&R>, TreeError<R::Id>> {
        self.node(id).map(|node| node.parent())
    }

    /// Returns the direct children of `id` in first-seen order.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no record has this id.
    pub fn get_children(&self, id: &R::Id) -> Result<Vec<&R>, TreeError<R::Id>> {
        self.node(id).map(|node| node.children().collect())
    }

    /// Returns the ancestors of `id`, nearest first, ending with the root.
    /// Empty for the root itself.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no record has this id.
    pub fn get_all_parents(&self, id: &R::Id) -> Result<Vec<&R>, TreeError<R::Id>> {
        self.node(id).map(|node| node.parents())
    }
}

impl<R: Record, S: NodeStore<R>> fmt::Debug for TreeStore<R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeStore")
            .field("len", &self.order.len())
            .field("root", self.root().id())
            .finish_non_exhaustive()
    }
}

impl<'a, R: Record, S: NodeStore<R>> IntoIterator for &'a TreeStore<R, S> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R, S>;

    fn into_iter(self) -> Iter<'a, R, S> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// NodeRef
// ---------------------------------------------------------------------------

/// Borrowed view of one node in a [`TreeStore`].
pub struct NodeRef<'a, R, S> {
    store: &'a S,
    idx: Idx<Node<R>>,
}

impl<'a, R: Record + 'a, S: NodeStore<R>> NodeRef<'a, R, S> {
    fn node(&self) -> &'a Node<R> {
        let store = self.store;
        store.get_node(self.idx)
    }

    /// Returns the record, exactly as it was passed in.
    #[must_use]
    pub fn record(&self) -> &'a R {
        &self.node().record
    }

    /// Returns the record's id.
    #[must_use]
    pub fn id(&self) -> &'a R::Id {
        self.record().id()
    }

    /// Returns `true` for the root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.node().is_root()
    }

    /// Returns the number of ancestors.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.node().depth
    }

    /// Returns the parent's view, `None` for the root.
    #[must_use]
    pub fn parent_node(&self) -> Option<Self> {
        self.node().parent.map(|idx| Self {
            store: self.store,
            idx,
        })
    }

    /// Returns the parent record, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&'a R> {
        self.parent_node().map(|parent| parent.record())
    }

    /// Returns a lazy walk over the ancestors, nearest first.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'a, R, S> {
        Ancestors::new(self.store, self.node().parent)
    }

    /// Returns all ancestors, nearest first, ending with the root.
    #[must_use]
    pub fn parents(&self) -> Vec<&'a R> {
        self.ancestors().collect()
    }

    /// Returns the direct children in first-seen order.
    #[must_use]
    pub fn children(&self) -> Iter<'a, R, S> {
        let store = self.store;
        Iter::new(store, store.children(self.idx))
    }
}

// Manual impls: NodeRef holds a reference and an index, no R or S data.

impl<R, S> Clone for NodeRef<'_, R, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, S> Copy for NodeRef<'_, R, S> {}

impl<'a, R: Record + fmt::Debug + 'a, S: NodeStore<R>> fmt::Debug for NodeRef<'a, R, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("record", self.record())
            .field("depth", &self.depth())
            .finish()
    }
}
