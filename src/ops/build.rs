//! Construction pass: validates records left to right and links them.

use std::collections::HashMap;

use safe_bump::Idx;
use tracing::{debug, trace};

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::node::Node;
use crate::record::{ParentRef, Record};
use crate::store::NodeStore;

/// Index produced by [`link_records`].
pub struct Linked<R: Record> {
    /// Identifier → node.
    pub index: HashMap<R::Id, Idx<Node<R>>>,
    /// Nodes in input order.
    pub order: Vec<Idx<Node<R>>>,
    /// The single root.
    pub root: Idx<Node<R>>,
}

/// Where a validated record goes.
enum Placement<R> {
    Root,
    Under { parent: Idx<Node<R>>, parent_depth: usize },
}

/// Validates and links `records` into `store` in a single forward pass.
///
/// Stops at the first invalid record. Parents must precede their children.
pub fn link_records<R, S, I>(
    store: &mut S,
    records: I,
    config: TreeConfig,
) -> Result<Linked<R>, TreeError<R::Id>>
where
    R: Record,
    S: NodeStore<R>,
    I: IntoIterator<Item = R>,
{
    let records = records.into_iter();
    let (hint, _) = records.size_hint();
    let mut index = HashMap::with_capacity(hint);
    let mut order = Vec::with_capacity(hint);
    let mut root = None;
    let mut deepest: usize = 0;

    for (position, record) in records.enumerate() {
        let placement = match place(&*store, &index, root.is_some(), &record, config) {
            Ok(placement) => placement,
            Err(err) => {
                debug!(position, error = %err, "tree construction rejected");
                return Err(err);
            }
        };

        let id = record.id().clone();
        let idx = match placement {
            Placement::Root => {
                let idx = store.alloc_node(Node::root(record));
                root = Some(idx);
                idx
            }
            Placement::Under {
                parent,
                parent_depth,
            } => {
                let idx = store.alloc_node(Node::child(record, parent, parent_depth));
                store.push_child(parent, idx);
                deepest = deepest.max(parent_depth + 1);
                idx
            }
        };

        trace!(%id, position, "record linked");
        index.insert(id, idx);
        order.push(idx);
    }

    let Some(root) = root else {
        debug!("tree construction rejected: no records");
        return Err(TreeError::EmptyTree);
    };

    debug!(
        records = order.len(),
        nodes = store.len(),
        root = %store.get_node(root).record.id(),
        depth = deepest,
        "tree built"
    );

    Ok(Linked { index, order, root })
}

/// Runs every check for one record, in priority order.
fn place<R, S>(
    store: &S,
    index: &HashMap<R::Id, Idx<Node<R>>>,
    has_root: bool,
    record: &R,
    config: TreeConfig,
) -> Result<Placement<R>, TreeError<R::Id>>
where
    R: Record,
    S: NodeStore<R>,
{
    let id = record.id();
    let parent = record.parent();

    // A root whose own id spells the sentinel also points at itself.
    if parent == ParentRef::Item(id) || (parent.is_root() && record.is_sentinel_id()) {
        return Err(TreeError::SelfLink(id.clone()));
    }

    if parent.is_root() && has_root {
        return Err(TreeError::MultipleRoots(id.clone()));
    }

    if index.contains_key(id) {
        return Err(TreeError::DuplicateId(id.clone()));
    }

    let ParentRef::Item(parent_id) = parent else {
        return Ok(Placement::Root);
    };

    let &parent_idx = index
        .get(parent_id)
        .ok_or_else(|| TreeError::UnresolvedParent(parent_id.clone()))?;

    // Cached parent depth plus the new hop is the ancestor chain length.
    let parent_depth = store.get_node(parent_idx).depth;
    if parent_depth + 1 > config.max_depth {
        return Err(TreeError::MaxDepthExceeded {
            id: id.clone(),
            limit: config.max_depth,
        });
    }

    Ok(Placement::Under {
        parent: parent_idx,
        parent_depth,
    })
}
