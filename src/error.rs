//! Error type shared by construction and queries.

use thiserror::Error;

/// Errors raised while building or querying a [`TreeStore`](crate::TreeStore).
///
/// Generic over the record identifier type so callers get their own ids back.
/// Every construction error aborts the whole build; no partial store exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum TreeError<I> {
    /// A record names itself as its parent.
    #[error("item with id {0} has link to himself")]
    SelfLink(I),

    /// A second record claims the root. Carries the id of that second record.
    #[error("cannot be more than one root item")]
    MultipleRoots(I),

    /// Two records share an id.
    #[error("item with id {0} already exists")]
    DuplicateId(I),

    /// A record's parent is not among the records processed before it.
    /// Carries the missing parent id.
    #[error("item with id {0} does not exists")]
    UnresolvedParent(I),

    /// Linking the record would make its ancestor chain longer than `limit`.
    #[error("maximum tree depth exceeded")]
    MaxDepthExceeded {
        /// Record that crossed the limit.
        id: I,
        /// Configured maximum number of ancestor hops.
        limit: usize,
    },

    /// The input held no records, so there is no root.
    #[error("tree has no root item")]
    EmptyTree,

    /// Query by an id the store does not contain.
    #[error("item with id {0} does not exists")]
    NotFound(I),
}

impl<I> TreeError<I> {
    /// Returns the identifier carried by the error, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&I> {
        match self {
            Self::SelfLink(id)
            | Self::MultipleRoots(id)
            | Self::DuplicateId(id)
            | Self::UnresolvedParent(id)
            | Self::MaxDepthExceeded { id, .. }
            | Self::NotFound(id) => Some(id),
            Self::EmptyTree => None,
        }
    }

    /// Returns `true` for errors raised while building a store.
    #[must_use]
    pub const fn is_construction(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }
}
