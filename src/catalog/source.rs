use super::definition::CatalogEntry;
use ahash::AHashMap;

/// Read access to a set of catalog entries keyed by name.
///
/// The validator and the resolver only ever read entries through this trait, so they
/// run unchanged against a locked [`CatalogView`](super::CatalogView), a
/// [`CatalogWriter`](super::CatalogWriter) or a plain map built in a test.
pub trait EntrySource {
    fn entry(&self, name: &str) -> Option<&CatalogEntry>;

    fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }
}

impl EntrySource for AHashMap<String, CatalogEntry> {
    fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.get(name)
    }
}

impl<T: EntrySource + ?Sized> EntrySource for &T {
    fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        (**self).entry(name)
    }
}
