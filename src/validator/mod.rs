use crate::catalog::{CatalogEntry, EntrySource, Ingredient, Recipe, RequiredItem};
use crate::data::{EntryRequest, RequiredItemRequest};
use crate::error::ValidationError;
use tracing::warn;

mod duplicates;

pub use duplicates::DuplicateCheck;

const RECIPE: &str = "recipe";
const INGREDIENT: &str = "ingredient";
const COOK_TIME: &str = "cookTime";
const REQUIRED_ITEMS: &str = "requiredItems";

/// Checks a candidate entry against the catalog's structural invariants.
///
/// Validation is a pure predicate over the candidate and the entries already admitted;
/// the caller performs the insert only after it succeeds. On success the candidate
/// comes back as a typed [`CatalogEntry`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    duplicate_check: DuplicateCheck,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicate_check(mut self, duplicate_check: DuplicateCheck) -> Self {
        self.duplicate_check = duplicate_check;
        self
    }

    pub fn duplicate_check(&self) -> DuplicateCheck {
        self.duplicate_check
    }

    /// Validates `candidate` against `existing`. The candidate's own name is expected
    /// to be normalized already; required-item names are compared verbatim.
    pub fn validate<S>(
        &self,
        candidate: &EntryRequest,
        existing: &S,
    ) -> Result<CatalogEntry, ValidationError>
    where
        S: EntrySource + ?Sized,
    {
        let result = self.check(candidate, existing);
        if let Err(e) = &result {
            warn!(name = %candidate.name, kind = %candidate.kind, "rejected entry: {}", e);
        }
        result
    }

    fn check<S>(&self, candidate: &EntryRequest, existing: &S) -> Result<CatalogEntry, ValidationError>
    where
        S: EntrySource + ?Sized,
    {
        if candidate.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if existing.contains(&candidate.name) {
            return Err(ValidationError::DuplicateName(candidate.name.clone()));
        }

        match candidate.kind.as_str() {
            RECIPE => self.check_recipe(candidate).map(CatalogEntry::Recipe),
            INGREDIENT => Self::check_ingredient(candidate).map(CatalogEntry::Ingredient),
            other => Err(ValidationError::UnknownType(other.to_string())),
        }
    }

    fn check_recipe(&self, candidate: &EntryRequest) -> Result<Recipe, ValidationError> {
        if candidate.cook_time.is_some() {
            return Err(ValidationError::UnexpectedField {
                kind: RECIPE,
                field: COOK_TIME,
            });
        }
        let items = candidate
            .required_items
            .as_ref()
            .and_then(Option::as_ref)
            .ok_or(ValidationError::MissingField {
                kind: RECIPE,
                field: REQUIRED_ITEMS,
            })?;

        if let Some(item) = self
            .duplicate_check
            .find(items.iter().map(|item| item.name.as_str()))
        {
            return Err(ValidationError::DuplicateRequiredItem {
                recipe: candidate.name.clone(),
                item: item.to_string(),
            });
        }

        let required_items = items
            .iter()
            .map(|item| Self::check_required_item(&candidate.name, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Recipe::new(candidate.name.clone(), required_items))
    }

    fn check_required_item(
        recipe: &str,
        item: &RequiredItemRequest,
    ) -> Result<RequiredItem, ValidationError> {
        match u64::try_from(item.quantity) {
            Ok(quantity) if quantity > 0 => Ok(RequiredItem::new(item.name.clone(), quantity)),
            _ => Err(ValidationError::NonPositiveQuantity {
                recipe: recipe.to_string(),
                item: item.name.clone(),
                quantity: item.quantity,
            }),
        }
    }

    fn check_ingredient(candidate: &EntryRequest) -> Result<Ingredient, ValidationError> {
        if candidate.required_items.is_some() {
            return Err(ValidationError::UnexpectedField {
                kind: INGREDIENT,
                field: REQUIRED_ITEMS,
            });
        }
        let cook_time = candidate.cook_time.flatten().ok_or(ValidationError::MissingField {
            kind: INGREDIENT,
            field: COOK_TIME,
        })?;
        let cook_time = u64::try_from(cook_time).map_err(|_| ValidationError::NegativeCookTime {
            name: candidate.name.clone(),
            cook_time,
        })?;

        Ok(Ingredient::new(candidate.name.clone(), cook_time))
    }
}
