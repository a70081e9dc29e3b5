//! In-process storage medium.

use std::cell::RefCell;
use std::collections::HashMap;

use super::Storage;
use crate::error::McProResult;

/// Storage that lives only as long as the process. Used in tests and for
/// throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, raw: &str) -> McProResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> McProResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
