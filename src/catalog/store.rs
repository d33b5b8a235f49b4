use super::definition::CatalogEntry;
use super::source::EntrySource;
use crate::error::ValidationError;
use ahash::AHashMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct StoreInner {
    entries: AHashMap<String, CatalogEntry>,
    // Insertion order, for listing.
    order: Vec<String>,
}

impl StoreInner {
    fn insert(&mut self, entry: CatalogEntry) -> Result<(), ValidationError> {
        let name = entry.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(ValidationError::DuplicateName(name));
        }
        debug!(name = %name, kind = entry.kind(), "catalog insert");
        self.order.push(name.clone());
        self.entries.insert(name, entry);
        Ok(())
    }
}

/// The in-memory registry of every admitted entry, keyed by unique name.
///
/// All access goes through a single lock: inserts take it exclusively and every
/// read-side traversal holds it shared for its whole duration. Entries are never
/// updated or removed once admitted.
#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: RwLock<StoreInner>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, rejecting it if the name is already taken.
    pub fn insert(&self, entry: CatalogEntry) -> Result<(), ValidationError> {
        self.inner.write().insert(entry)
    }

    /// Looks up an entry by exact name and returns a copy of it.
    pub fn lookup(&self, name: &str) -> Option<CatalogEntry> {
        self.inner.read().entries.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry names in the order they were admitted.
    pub fn names(&self) -> Vec<String> {
        self.inner.read().order.clone()
    }

    /// Takes a shared, consistent view of the catalog for multi-step reads.
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            guard: self.inner.read(),
        }
    }

    /// Takes exclusive access so a check-then-insert sequence is atomic.
    pub fn writer(&self) -> CatalogWriter<'_> {
        CatalogWriter {
            guard: self.inner.write(),
        }
    }
}

/// A read-locked view of the catalog.
pub struct CatalogView<'a> {
    guard: RwLockReadGuard<'a, StoreInner>,
}

impl EntrySource for CatalogView<'_> {
    fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.guard.entries.get(name)
    }
}

/// A write-locked handle on the catalog.
pub struct CatalogWriter<'a> {
    guard: RwLockWriteGuard<'a, StoreInner>,
}

impl CatalogWriter<'_> {
    pub fn insert(&mut self, entry: CatalogEntry) -> Result<(), ValidationError> {
        self.guard.insert(entry)
    }
}

impl EntrySource for CatalogWriter<'_> {
    fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.guard.entries.get(name)
    }
}
