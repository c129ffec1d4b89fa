use alloc::boxed::Box;

use thiserror::Error;

use crate::Reflect;

/// A key-value collection.
///
/// Entries travel through the codec as [`KeyValue`](crate::ops::KeyValue)
/// records, so a map is encoded as a collection of nested objects.
pub trait Map: Reflect {
    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over `(key, value)` pairs, in the map's own order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;

    /// Removes every entry.
    fn clear(&mut self);

    /// Returns a default-constructed entry record for this map.
    fn new_entry(&self) -> Box<dyn Reflect>;

    /// Inserts an entry record built by [`new_entry`](Map::new_entry).
    ///
    /// An existing key is never overwritten.
    fn insert_entry(&mut self, entry: Box<dyn Reflect>) -> Result<(), MapInsertError>;
}

/// An error returned by [`Map::insert_entry`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MapInsertError {
    #[error("the key is already present")]
    DuplicateKey,
    #[error("the entry is not a `{expected}`")]
    EntryType { expected: &'static str },
}
