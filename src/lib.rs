//! Validated single-rooted tree over flat, parent-linked records.
//!
//! A [`TreeStore`] is built once from a list of records, each naming its own
//! id and its parent (another id, or the root sentinel). Construction is a
//! single left-to-right pass that validates the whole input and links every
//! record under its parent; after that the store is read-only and every
//! query is an index lookup.
//!
//! # Key properties
//!
//! - **Single pass**: parents must appear before their children
//! - **Exactly one root**: a second root or an empty input is rejected
//! - **Bounded depth**: no ancestor chain longer than [`MAX_TREE_DEPTH`] hops
//!   (configurable via [`TreeConfig`])
//! - **Verbatim records**: queries return the caller's records untouched,
//!   in input order
//! - **Arena nodes**: parent links are arena indices, never owning pointers
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use tree_store::{Item, ItemId, TreeStore, ROOT};
//!
//! let store = TreeStore::new([
//!     Item::new(1, ROOT),
//!     Item::new(2, 1).with_field("type", "test"),
//!     Item::new(3, 2),
//! ])?;
//!
//! assert_eq!(store.root().id, ItemId::from(1));
//! let parents: Vec<_> = store
//!     .get_all_parents(&ItemId::from(3))?
//!     .into_iter()
//!     .map(|item| item.id.clone())
//!     .collect();
//! assert_eq!(parents, [ItemId::from(2), ItemId::from(1)]);
//! # Ok::<(), tree_store::TreeError<ItemId>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod iter;
pub mod node;
pub mod record;
pub mod store;

mod arena;
mod ops;
mod tree;

#[cfg(test)]
mod tests;

pub use arena::NodeArena;
pub use config::TreeConfig;
pub use error::TreeError;
pub use record::{Item, ItemId, ParentRef, Record};
pub use tree::{NodeRef, TreeStore};

/// Maximum number of ancestor hops a record may have by default.
pub const MAX_TREE_DEPTH: usize = 900;

/// Parent value that marks the root in JSON-shaped records.
pub const ROOT: &str = "root";
