mod async_skiplist;
mod error;
mod level;
mod list;
mod node;
mod shared;
mod snapshot;
mod traits;

pub use async_skiplist::AsyncSkipList;
pub use error::SkipListError;
pub use level::LevelGenerator;
pub use list::{DEFAULT_MAX_LEVEL, DeleteOutcome, InsertOutcome, Iter, SkipList};
pub use shared::SharedSkipList;
pub use snapshot::{DELIMITER, LoadStats};
pub use traits::OrderedStore;
