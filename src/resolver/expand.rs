use crate::catalog::{CatalogEntry, EntrySource, Recipe};
use crate::error::ResolveError;
use tracing::trace;

/// One base ingredient reached along one path of the recipe tree, already scaled by
/// the product of every quantity on that path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub name: String,
    pub quantity: u64,
    pub cook_time: u64,
}

/// Depth-first walk over a recipe's required items.
///
/// `path` holds the recipes currently being expanded, root first. A recipe that shows
/// up again while it is still on the path is a cycle; one reached twice along separate
/// branches is not.
pub(super) struct Expander<'a, S: ?Sized> {
    source: &'a S,
    path: Vec<&'a str>,
    occurrences: Vec<Occurrence>,
}

impl<'a, S> Expander<'a, S>
where
    S: EntrySource + ?Sized,
{
    pub(super) fn new(source: &'a S) -> Self {
        Self {
            source,
            path: Vec::new(),
            occurrences: Vec::new(),
        }
    }

    /// Consumes the expander and returns every leaf occurrence in traversal order.
    pub(super) fn expand(
        mut self,
        recipe: &'a Recipe,
        multiplier: u64,
    ) -> Result<Vec<Occurrence>, ResolveError> {
        self.expand_recipe(recipe, multiplier)?;
        Ok(self.occurrences)
    }

    fn expand_recipe(&mut self, recipe: &'a Recipe, multiplier: u64) -> Result<(), ResolveError> {
        if let Some(start) = self.path.iter().position(|name| *name == recipe.name) {
            let mut cycle: Vec<String> = self.path[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(recipe.name.clone());
            return Err(ResolveError::CyclicReference { cycle });
        }

        trace!(recipe = %recipe.name, multiplier, depth = self.path.len(), "expanding");
        self.path.push(&recipe.name);

        for item in &recipe.required_items {
            let entry =
                self.source
                    .entry(&item.name)
                    .ok_or_else(|| ResolveError::MissingReference {
                        missing: item.name.clone(),
                        required_by: recipe.name.clone(),
                    })?;
            let quantity =
                item.quantity
                    .checked_mul(multiplier)
                    .ok_or_else(|| ResolveError::QuantityOverflow {
                        item: item.name.clone(),
                    })?;

            match entry {
                CatalogEntry::Ingredient(ingredient) => self.occurrences.push(Occurrence {
                    name: ingredient.name.clone(),
                    quantity,
                    cook_time: ingredient.cook_time,
                }),
                CatalogEntry::Recipe(sub_recipe) => self.expand_recipe(sub_recipe, quantity)?,
            }
        }

        self.path.pop();
        Ok(())
    }
}
