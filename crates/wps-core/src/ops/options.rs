use std::cell::RefCell;
use std::collections::BTreeMap;

use serde_json::Value;

use crate::errors::Result;

/// Key-based persistence for option records
///
/// Values are JSON documents. Implementations apply no schema: decoding and
/// validation happen in the stores built on top of this trait.
pub trait OptionStore {
    /// Read an option, `None` when it was never written
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` or `Serialization` error when the backend
    /// cannot produce the stored value.
    fn get_option(&self, key: &str) -> Result<Option<Value>>;

    /// Write an option, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error when the backend rejects the write.
    fn update_option(&self, key: &str, value: &Value) -> Result<()>;

    /// Remove an option; removing a missing option is not an error
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error when the backend rejects the delete.
    fn delete_option(&self, key: &str) -> Result<()>;
}

/// In-memory option storage
///
/// Not thread-safe (RefCell); request-scoped single-threaded use only.
#[derive(Debug, Default)]
pub struct MemoryOptionStore {
    values: RefCell<BTreeMap<String, Value>>,
}

impl MemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently stored, sorted
    pub fn keys(&self) -> Vec<String> {
        self.values.borrow().keys().cloned().collect()
    }
}

impl OptionStore for MemoryOptionStore {
    fn get_option(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn update_option(&self, key: &str, value: &Value) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    fn delete_option(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
