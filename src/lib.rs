// Re-export types from the skiplist module
pub mod skiplist;

pub use skiplist::{
    AsyncSkipList, DEFAULT_MAX_LEVEL, DELIMITER, DeleteOutcome, InsertOutcome, LevelGenerator,
    LoadStats, OrderedStore, SharedSkipList, SkipList, SkipListError,
};
