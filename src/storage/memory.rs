use super::{Storage, StorageError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-process storage. Clones share the same map so a test can keep a handle
/// after moving one into the controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn unavailable(op: &'static str) -> StorageError {
        StorageError::Io {
            op,
            path: "memory".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "storage disabled"),
        }
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(Self::unavailable("read"));
        }
        Ok(self.get(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(Self::unavailable("write"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
