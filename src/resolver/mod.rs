use crate::catalog::{CatalogEntry, EntrySource};
use crate::error::ResolveError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

mod aggregate;
mod expand;

pub use aggregate::aggregate;
pub use expand::Occurrence;

use expand::Expander;

/// A base ingredient and its total quantity for one unit of the resolved recipe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: u64,
}

/// The flattened manifest of a recipe: every base ingredient it needs and the total
/// cook time for one unit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientQuantity>,
}

/// Resolves recipes against a set of catalog entries.
///
/// The resolver never mutates its source. Each call builds an independent manifest,
/// so one resolver can serve any number of queries against the same view.
pub struct Resolver<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> Resolver<'a, S>
where
    S: EntrySource + ?Sized,
{
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Expands the recipe `name` into its raw leaf occurrences, each scaled by
    /// `multiplier` and by every quantity on its path.
    ///
    /// The occurrences come back in depth-first, left-to-right order and are not merged:
    /// an ingredient reached along two paths appears twice.
    pub fn expand(&self, name: &str, multiplier: u64) -> Result<Vec<Occurrence>, ResolveError> {
        let recipe = match self.source.entry(name) {
            Some(CatalogEntry::Recipe(recipe)) => recipe,
            Some(CatalogEntry::Ingredient(_)) | None => {
                return Err(ResolveError::RecipeNotFound(name.to_string()));
            }
        };
        Expander::new(self.source).expand(recipe, multiplier)
    }

    /// Resolves one unit of the recipe `name`.
    ///
    /// Fails without a partial result if the name is not a recipe, if any entry in its
    /// transitive closure is missing, or if the recipe requires itself.
    pub fn resolve(&self, name: &str) -> Result<RecipeSummary, ResolveError> {
        let occurrences = self.expand(name, 1)?;
        debug!(recipe = %name, occurrences = occurrences.len(), "expanded recipe");

        let (ingredients, cook_time) = aggregate(&occurrences)?;
        info!(
            recipe = %name,
            ingredients = ingredients.len(),
            cook_time,
            "resolved recipe"
        );

        Ok(RecipeSummary {
            name: name.to_string(),
            cook_time,
            ingredients,
        })
    }
}

/// Shorthand for `Resolver::new(source).resolve(name)`.
pub fn resolve<S>(name: &str, source: &S) -> Result<RecipeSummary, ResolveError>
where
    S: EntrySource + ?Sized,
{
    Resolver::new(source).resolve(name)
}
