//! Local key/value persistence for the last submission.
//!
//! The form only ever needs `load(key)` and `save(key, value)` with string
//! values, the same contract as browser local storage. [`FileStorage`] keeps
//! all keys in one JSON object on disk.

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStorage;
#[cfg(test)]
pub use memory::MemoryStorage;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to {op} {}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage file {} is not a JSON object of strings", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize storage contents")]
    Serialize(#[source] serde_json::Error),
}

pub trait Storage {
    /// `Ok(None)` when nothing has been saved under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any previous value for `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}
