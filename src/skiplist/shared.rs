use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, RwLock};

use super::error::SkipListError;
use super::list::{DeleteOutcome, InsertOutcome, SkipList};
use super::snapshot::LoadStats;
use super::traits::OrderedStore;

/// A skip list behind a reader-writer lock, shareable across threads.
///
/// Inserts and deletes take the write lock, so mutations are fully
/// serialized; searches take the read lock, so a reader can never observe a
/// node that is only partially spliced in. This is deliberately stronger
/// than a writer-only mutex with unguarded readers: that weaker scheme lets
/// a search race an in-flight splice.
///
/// Cloning the handle shares the same underlying list.
#[derive(Debug)]
pub struct SharedSkipList<K, V> {
    inner: Arc<RwLock<SkipList<K, V>>>,
}

impl<K, V> Clone for SharedSkipList<K, V> {
    fn clone(&self) -> Self {
        SharedSkipList {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Ord, V> SharedSkipList<K, V> {
    /// Creates an empty shared list whose nodes never exceed `max_level`.
    pub fn new(max_level: usize) -> Self {
        Self::from_list(SkipList::new(max_level))
    }

    /// Wraps an already-populated list.
    pub fn from_list(list: SkipList<K, V>) -> Self {
        SharedSkipList {
            inner: Arc::new(RwLock::new(list)),
        }
    }

    /// Highest level currently linking at least one node.
    pub fn level(&self) -> Result<usize, SkipListError> {
        let guard = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(guard.level())
    }

    /// Returns true if `key` is stored in the list.
    pub fn contains_key(&self, key: &K) -> Result<bool, SkipListError> {
        let guard = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(guard.contains_key(key))
    }
}

impl<K: Ord, V> Default for SharedSkipList<K, V> {
    fn default() -> Self {
        Self::from_list(SkipList::default())
    }
}

impl<K: Ord, V: Clone> OrderedStore<K, V> for SharedSkipList<K, V> {
    fn insert(&self, key: K, value: V) -> Result<InsertOutcome, SkipListError> {
        let mut guard = self.inner.write().map_err(|_| SkipListError::LockError)?;
        Ok(guard.insert(key, value))
    }

    fn search(&self, key: &K) -> Result<Option<V>, SkipListError> {
        let guard = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(guard.search(key).cloned())
    }

    fn delete(&self, key: &K) -> Result<DeleteOutcome, SkipListError> {
        let mut guard = self.inner.write().map_err(|_| SkipListError::LockError)?;
        Ok(guard.delete(key))
    }

    fn len(&self) -> Result<usize, SkipListError> {
        let guard = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(guard.len())
    }
}

impl<K, V> SharedSkipList<K, V>
where
    K: Ord + Display + FromStr,
    V: Display + FromStr,
{
    /// Dumps the list to the file at `path`. Holds the read lock for the
    /// whole dump, excluding writers from observing or producing a torn
    /// snapshot.
    pub fn dump_to_path<P: AsRef<Path>>(&self, path: P) -> Result<usize, SkipListError> {
        let guard = self.inner.read().map_err(|_| SkipListError::LockError)?;
        Ok(guard.dump_to_path(path)?)
    }

    /// Loads records from the file at `path`, holding the write lock for the
    /// whole load. Loading is additive; see `SkipList::load`.
    pub fn load_from_path<P: AsRef<Path>>(&self, path: P) -> Result<LoadStats, SkipListError> {
        let mut guard = self.inner.write().map_err(|_| SkipListError::LockError)?;
        Ok(guard.load_from_path(path)?)
    }
}
