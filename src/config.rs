//! Construction settings.

use serde::{Deserialize, Serialize};

use crate::MAX_TREE_DEPTH;

/// Settings applied while building a [`TreeStore`](crate::TreeStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Maximum number of ancestor hops any record may have.
    pub max_depth: usize,
}

impl TreeConfig {
    /// Returns a config with the given depth limit.
    #[must_use]
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_TREE_DEPTH,
        }
    }
}
