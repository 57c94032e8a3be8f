use super::error::SkipListError;
use super::list::{DeleteOutcome, InsertOutcome};

/// Trait defining the core operations of a shared ordered key-value store.
///
/// Implemented by handles that can be called through `&self` from several
/// threads; the fallible signatures account for lock or worker failure, not
/// for missing keys (those are ordinary outcomes).
pub trait OrderedStore<K, V> {
    /// Inserts a key-value pair; duplicates leave the store unchanged
    fn insert(&self, key: K, value: V) -> Result<InsertOutcome, SkipListError>;
    /// Looks up a value by key
    fn search(&self, key: &K) -> Result<Option<V>, SkipListError>;
    /// Removes a key-value pair
    fn delete(&self, key: &K) -> Result<DeleteOutcome, SkipListError>;
    /// Returns the number of entries in the store
    fn len(&self) -> Result<usize, SkipListError>;
    /// Returns true if the store is empty
    fn is_empty(&self) -> Result<bool, SkipListError> {
        Ok(self.len()? == 0)
    }
}
