//! Record abstraction and the built-in JSON-shaped [`Item`].

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::ROOT;

/// Parent reference of a record: the root sentinel or another record's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentRef<I> {
    /// The record is the tree root.
    Root,
    /// The record hangs under the record with this id.
    Item(I),
}

impl<I> ParentRef<I> {
    /// Returns `true` for the root sentinel.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Borrows the referenced id.
    #[must_use]
    pub const fn as_ref(&self) -> ParentRef<&I> {
        match self {
            Self::Root => ParentRef::Root,
            Self::Item(id) => ParentRef::Item(id),
        }
    }

    /// Returns the referenced id, or `None` for the root sentinel.
    #[must_use]
    pub fn item(self) -> Option<I> {
        match self {
            Self::Root => None,
            Self::Item(id) => Some(id),
        }
    }
}

/// A value that can be stored in a [`TreeStore`](crate::TreeStore).
///
/// The store only ever reads the id and the parent reference; everything
/// else the record carries is payload returned verbatim by queries.
pub trait Record {
    /// Identifier type, unique within one store.
    type Id: Eq + Hash + Clone + fmt::Display + fmt::Debug;

    /// Returns the record's identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the record's parent reference.
    fn parent(&self) -> ParentRef<&Self::Id>;

    /// Returns `true` if the record's id is the same value the record type
    /// uses as its root sentinel. Such a record cannot be the root, because
    /// its parent would be itself.
    fn is_sentinel_id(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Item — JSON-shaped record
// ---------------------------------------------------------------------------

/// Identifier of an [`Item`]: an integer or a string.
///
/// JSON integers up to `i64::MAX` become [`Int`](Self::Int), larger unsigned
/// ones [`UInt`](Self::UInt). Floats, booleans, arrays and objects are not
/// valid ids and fail to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Integer identifier.
    Int(i64),
    /// Unsigned identifier above `i64::MAX`.
    UInt(u64),
    /// String identifier.
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// Values that fit `i64` are stored as [`ItemId::Int`], matching JSON input.
impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::UInt(n), Self::Int)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// The string id `"root"` is the root sentinel.
impl From<ItemId> for ParentRef<ItemId> {
    fn from(id: ItemId) -> Self {
        match id {
            ItemId::Str(s) if s == ROOT => Self::Root,
            other => Self::Item(other),
        }
    }
}

impl Serialize for ParentRef<ItemId> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Root => serializer.serialize_str(ROOT),
            Self::Item(id) => id.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ParentRef<ItemId> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ItemId::deserialize(deserializer).map(Self::from)
    }
}

/// Record shaped like `{"id": 2, "parent": 1, "type": "test"}`.
///
/// Fields other than `id` and `parent` are kept in [`fields`](Self::fields)
/// and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Parent reference; `"root"` in JSON marks the root.
    pub parent: ParentRef<ItemId>,
    /// Opaque payload.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Item {
    /// Creates an item without payload. A parent of `"root"` makes it the root.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, parent: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            parent: ParentRef::from(parent.into()),
            fields: Map::new(),
        }
    }

    /// Creates a root item without payload.
    #[must_use]
    pub fn root(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            parent: ParentRef::Root,
            fields: Map::new(),
        }
    }

    /// Adds a payload field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl Record for Item {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn parent(&self) -> ParentRef<&ItemId> {
        self.parent.as_ref()
    }

    fn is_sentinel_id(&self) -> bool {
        matches!(&self.id, ItemId::Str(s) if s == ROOT)
    }
}
