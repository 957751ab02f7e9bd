//! Collection-level cache seam.
//!
//! # Responsibility
//! - Define the invalidation-only cache contract used by mutation
//!   services.
//! - Provide the in-process implementation used by the app and by tests.
//!
//! # Invariants
//! - Cache keys are per collection (`projects`, `tasks`), never per
//!   entity; any mutation invalidates the whole collection.
//! - Invalidation is advisory: callers swallow failures and report the
//!   mutation as successful regardless.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

/// Cache key for the full projects collection.
pub const PROJECTS_CACHE_KEY: &str = "projects";
/// Cache key for the full tasks collection.
pub const TASKS_CACHE_KEY: &str = "tasks";

/// Failure reported by a cache backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    Backend(String),
}

impl Display for CacheError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(message) => write!(f, "cache backend failure: {message}"),
        }
    }
}

impl Error for CacheError {}

/// Invalidation-target contract for mutation services.
///
/// Reads never go through this seam; the only operation the core needs is
/// deleting a collection key after a successful persistence mutation.
pub trait Cache {
    fn delete(&self, key: &str) -> Result<(), CacheError>;
}

/// Shared in-process key/value cache.
///
/// Clones share one underlying map, so a test can keep a handle and
/// observe invalidations performed by a service that owns another clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a serialized collection under `key`.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
        entries.insert(key.into(), value.into());
    }

    /// Returns the cached value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
        entries.get(key).cloned()
    }
}

impl Cache for MemoryCache {
    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().unwrap_or_else(|err| err.into_inner());
        entries.remove(key);
        Ok(())
    }
}
