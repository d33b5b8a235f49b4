use crate::catalog::CatalogStore;
use crate::data::{CatalogFile, EntryRequest};
use crate::error::CookbookError;
use crate::normalize::parse_handwriting;
use crate::resolver::{RecipeSummary, Resolver};
use crate::validator::{DuplicateCheck, Validator};
use tracing::{info, warn};

/// The transport-agnostic front door to a catalog.
///
/// A `Cookbook` owns its [`CatalogStore`] and exposes the operations a request layer
/// needs: normalizing a name, creating an entry, and summarizing a recipe. Entry names
/// and query names are normalized before the validator, the store or the resolver
/// see them.
#[derive(Debug, Default)]
pub struct Cookbook {
    store: CatalogStore,
    validator: Validator,
}

pub struct CookbookBuilder {
    validator: Validator,
}

impl CookbookBuilder {
    pub fn new() -> Self {
        Self {
            validator: Validator::new(),
        }
    }

    /// Selects how strictly duplicate required items are detected.
    pub fn duplicate_check(mut self, mode: DuplicateCheck) -> Self {
        self.validator = self.validator.with_duplicate_check(mode);
        self
    }

    pub fn build(self) -> Cookbook {
        Cookbook {
            store: CatalogStore::new(),
            validator: self.validator,
        }
    }
}

impl Default for CookbookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CookbookBuilder {
        CookbookBuilder::new()
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Normalizes a raw name, failing if nothing usable is left.
    pub fn parse_name(&self, raw: &str) -> Result<String, CookbookError> {
        parse_handwriting(raw).ok_or_else(|| CookbookError::InvalidName(raw.to_string()))
    }

    /// Normalizes, validates and admits a new entry.
    ///
    /// The uniqueness check and the insert happen under one write lock, so two
    /// concurrent creations of the same name can never both succeed.
    pub fn create_entry(&self, request: EntryRequest) -> Result<(), CookbookError> {
        let request = self.normalize_request(request).inspect_err(|e| {
            warn!("rejected entry: {}", e);
        })?;

        let mut writer = self.store.writer();
        let entry = self.validator.validate(&request, &writer)?;
        writer.insert(entry)?;

        info!(name = %request.name, kind = %request.kind, "admitted entry");
        Ok(())
    }

    /// Normalizes `raw_name` and resolves the recipe it names.
    pub fn summarize(&self, raw_name: &str) -> Result<RecipeSummary, CookbookError> {
        let name = self.parse_name(raw_name)?;
        let view = self.store.view();
        Resolver::new(&view).resolve(&name).map_err(|e| {
            warn!(recipe = %name, "summary failed: {}", e);
            CookbookError::from(e)
        })
    }

    /// Admits every entry of `file` in order, stopping at the first rejection.
    /// Returns the number of entries admitted.
    pub fn seed(&self, file: CatalogFile) -> Result<usize, CookbookError> {
        let mut admitted = 0;
        for request in file.entries {
            self.create_entry(request)?;
            admitted += 1;
        }
        Ok(admitted)
    }

    /// Only the entry's own name is normalized. Required-item names are kept as given
    /// and must already match the canonical names they refer to.
    fn normalize_request(&self, mut request: EntryRequest) -> Result<EntryRequest, CookbookError> {
        request.name = self.parse_name(&request.name)?;
        Ok(request)
    }
}
