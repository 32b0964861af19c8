//! Session-scoped flag storage.
//!
//! Session flags live only for the current browser tab session. The shell keeps exactly one of
//! them (help overlay dismissal), but the contract is keyed so adapters stay generic.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for boolean flags that survive reloads within one session only.
pub trait SessionFlagStore {
    /// Reads a flag, returning `None` when it was never written this session.
    fn load_flag(&self, key: &str) -> Option<bool>;

    /// Writes a flag for the remainder of the session.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn save_flag(&self, key: &str, value: bool) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory session flag store used off-browser and in tests.
pub struct MemorySessionStore {
    inner: Rc<RefCell<HashMap<String, bool>>>,
}

impl SessionFlagStore for MemorySessionStore {
    fn load_flag(&self, key: &str) -> Option<bool> {
        self.inner.borrow().get(key).copied()
    }

    fn save_flag(&self, key: &str, value: bool) -> Result<(), String> {
        self.inner.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

thread_local! {
    static GLOBAL_SESSION_STORE: MemorySessionStore = MemorySessionStore::default();
}

/// Returns the process-local session store instance.
pub fn session_store() -> MemorySessionStore {
    GLOBAL_SESSION_STORE.with(|store| store.clone())
}
