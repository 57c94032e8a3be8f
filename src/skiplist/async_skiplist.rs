use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::error::SkipListError;
use super::list::{DeleteOutcome, InsertOutcome, SkipList};
use super::snapshot::LoadStats;

// Messages that can be sent to the worker task
enum SkipListMessage<K, V> {
    Insert(K, V, oneshot::Sender<InsertOutcome>),
    Search(K, oneshot::Sender<Option<V>>),
    Delete(K, oneshot::Sender<DeleteOutcome>),
    Len(oneshot::Sender<usize>),
    Level(oneshot::Sender<usize>),
    Dump(PathBuf, oneshot::Sender<io::Result<usize>>),
    Load(PathBuf, oneshot::Sender<io::Result<LoadStats>>),
    Shutdown,
}

/// An async front end to a skip list, backed by a Tokio worker task.
///
/// The worker owns the list outright, so operations are serialized by the
/// task's mailbox instead of a lock: each call sends a message carrying a
/// oneshot reply channel and awaits the answer. A failed send or reply means
/// the worker is gone and surfaces as [`SkipListError::ChannelClosed`].
pub struct AsyncSkipList<K, V> {
    sender: mpsc::Sender<SkipListMessage<K, V>>,
    worker_task: Option<JoinHandle<()>>,
}

impl<K, V> AsyncSkipList<K, V>
where
    K: Ord + Display + FromStr + Clone + Send + 'static,
    V: Display + FromStr + Clone + Send + 'static,
{
    /// Spawns the worker task around an empty list capped at `max_level`.
    /// Must be called from within a Tokio runtime.
    pub fn new(max_level: usize) -> Self {
        Self::from_list(SkipList::new(max_level))
    }

    /// Spawns the worker task around an existing list.
    /// Must be called from within a Tokio runtime.
    pub fn from_list(mut list: SkipList<K, V>) -> Self {
        let (sender, mut receiver) = mpsc::channel::<SkipListMessage<K, V>>(100);

        let worker_task = tokio::spawn(async move {
            while let Some(message) = receiver.recv().await {
                match message {
                    SkipListMessage::Insert(key, value, reply) => {
                        let _ = reply.send(list.insert(key, value));
                    }
                    SkipListMessage::Search(key, reply) => {
                        let _ = reply.send(list.search(&key).cloned());
                    }
                    SkipListMessage::Delete(key, reply) => {
                        let _ = reply.send(list.delete(&key));
                    }
                    SkipListMessage::Len(reply) => {
                        let _ = reply.send(list.len());
                    }
                    SkipListMessage::Level(reply) => {
                        let _ = reply.send(list.level());
                    }
                    SkipListMessage::Dump(path, reply) => {
                        let _ = reply.send(list.dump_to_path(path));
                    }
                    SkipListMessage::Load(path, reply) => {
                        let _ = reply.send(list.load_from_path(path));
                    }
                    SkipListMessage::Shutdown => {
                        break;
                    }
                }
            }
        });

        AsyncSkipList {
            sender,
            worker_task: Some(worker_task),
        }
    }

    async fn request<R>(
        &self,
        message: SkipListMessage<K, V>,
        reply: oneshot::Receiver<R>,
    ) -> Result<R, SkipListError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| SkipListError::ChannelClosed)?;
        reply.await.map_err(|_| SkipListError::ChannelClosed)
    }

    /// Inserts a key-value pair; duplicates leave the list unchanged.
    pub async fn insert(&self, key: K, value: V) -> Result<InsertOutcome, SkipListError> {
        let (tx, rx) = oneshot::channel();
        self.request(SkipListMessage::Insert(key, value, tx), rx).await
    }

    /// Looks up a value by key.
    pub async fn search(&self, key: &K) -> Result<Option<V>, SkipListError> {
        let (tx, rx) = oneshot::channel();
        self.request(SkipListMessage::Search(key.clone(), tx), rx).await
    }

    /// Removes a key-value pair.
    pub async fn delete(&self, key: &K) -> Result<DeleteOutcome, SkipListError> {
        let (tx, rx) = oneshot::channel();
        self.request(SkipListMessage::Delete(key.clone(), tx), rx).await
    }

    /// Number of entries in the list.
    pub async fn len(&self) -> Result<usize, SkipListError> {
        let (tx, rx) = oneshot::channel();
        self.request(SkipListMessage::Len(tx), rx).await
    }

    /// Returns true if the list holds no entries.
    pub async fn is_empty(&self) -> Result<bool, SkipListError> {
        Ok(self.len().await? == 0)
    }

    /// Highest level currently linking at least one node.
    pub async fn level(&self) -> Result<usize, SkipListError> {
        let (tx, rx) = oneshot::channel();
        self.request(SkipListMessage::Level(tx), rx).await
    }

    /// Dumps the list to the file at `path`.
    pub async fn dump_to_path(&self, path: impl Into<PathBuf>) -> Result<usize, SkipListError> {
        let (tx, rx) = oneshot::channel();
        let written = self
            .request(SkipListMessage::Dump(path.into(), tx), rx)
            .await??;
        Ok(written)
    }

    /// Loads records from the file at `path`. Loading is additive; see
    /// `SkipList::load`.
    pub async fn load_from_path(&self, path: impl Into<PathBuf>) -> Result<LoadStats, SkipListError> {
        let (tx, rx) = oneshot::channel();
        let stats = self
            .request(SkipListMessage::Load(path.into(), tx), rx)
            .await??;
        Ok(stats)
    }

    /// Asks the worker task to exit after draining its mailbox.
    pub async fn shutdown(&self) -> Result<(), SkipListError> {
        self.sender
            .send(SkipListMessage::Shutdown)
            .await
            .map_err(|_| SkipListError::ChannelClosed)
    }
}

impl<K, V> Drop for AsyncSkipList<K, V> {
    fn drop(&mut self) {
        // The worker cannot be awaited in drop; abort it instead.
        if let Some(handle) = self.worker_task.take() {
            handle.abort();
        }
    }
}
