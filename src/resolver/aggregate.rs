use super::IngredientQuantity;
use super::expand::Occurrence;
use crate::error::ResolveError;
use ahash::AHashMap;

/// Merges raw occurrences into one entry per ingredient name and totals the cook time.
///
/// Output order follows each name's first appearance in `occurrences`. The cook time
/// is `sum(cook_time * quantity)` over every occurrence.
pub fn aggregate(occurrences: &[Occurrence]) -> Result<(Vec<IngredientQuantity>, u64), ResolveError> {
    let mut cook_time: u64 = 0;
    let mut ingredients: Vec<IngredientQuantity> = Vec::new();
    let mut positions: AHashMap<&str, usize> = AHashMap::new();

    for occurrence in occurrences {
        let overflow = || ResolveError::QuantityOverflow {
            item: occurrence.name.clone(),
        };

        cook_time = occurrence
            .cook_time
            .checked_mul(occurrence.quantity)
            .and_then(|time| cook_time.checked_add(time))
            .ok_or_else(overflow)?;

        match positions.get(occurrence.name.as_str()) {
            Some(&index) => {
                let merged = &mut ingredients[index];
                merged.quantity = merged
                    .quantity
                    .checked_add(occurrence.quantity)
                    .ok_or_else(overflow)?;
            }
            None => {
                positions.insert(occurrence.name.as_str(), ingredients.len());
                ingredients.push(IngredientQuantity {
                    name: occurrence.name.clone(),
                    quantity: occurrence.quantity,
                });
            }
        }
    }

    Ok((ingredients, cook_time))
}
