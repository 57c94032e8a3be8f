use std::error::Error;
use std::fmt::{self, Debug};
use std::io;

/// Errors that can occur while operating on a shared or async skip list.
///
/// Note that a duplicate insert or a missing key is not an error — those are
/// ordinary outcomes reported through `InsertOutcome` and `DeleteOutcome`.
#[derive(Debug)]
pub enum SkipListError {
    /// An error occurred during snapshot I/O
    IoError(io::Error),
    /// An error occurred while acquiring a lock
    LockError,
    /// The worker task backing an async handle is gone
    ChannelClosed,
}

impl fmt::Display for SkipListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipListError::IoError(e) => write!(f, "I/O error: {}", e),
            SkipListError::LockError => write!(f, "Failed to acquire lock"),
            SkipListError::ChannelClosed => write!(f, "Skip list worker is not running"),
        }
    }
}

impl Error for SkipListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SkipListError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SkipListError {
    fn from(error: io::Error) -> Self {
        SkipListError::IoError(error)
    }
}
