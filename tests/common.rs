//! Common test utilities for building catalogs.
use kondate::prelude::*;

/// Builds a cookbook holding the pancake catalog.
///
/// Egg (5), Flour (2), Batter = Egg x2 + Flour x1, Pancake = Batter x3
#[allow(dead_code)]
pub fn create_pancake_cookbook() -> Cookbook {
    let cookbook = Cookbook::new();
    for request in pancake_entries() {
        cookbook
            .create_entry(request)
            .expect("Failed to admit pancake entry");
    }
    cookbook
}

/// The raw entries of the pancake catalog, names in their canonical form.
#[allow(dead_code)]
pub fn pancake_entries() -> Vec<EntryRequest> {
    vec![
        EntryRequest::ingredient("Egg", 5),
        EntryRequest::ingredient("Flour", 2),
        EntryRequest::recipe("Batter", vec![("Egg", 2), ("Flour", 1)]),
        EntryRequest::recipe("Pancake", vec![("Batter", 3)]),
    ]
}

/// Builds a plain map of typed entries, bypassing validation.
#[allow(dead_code)]
pub fn entry_map(entries: Vec<CatalogEntry>) -> ahash::AHashMap<String, CatalogEntry> {
    entries
        .into_iter()
        .map(|entry| (entry.name().to_string(), entry))
        .collect()
}

#[allow(dead_code)]
pub fn ingredient(name: &str, cook_time: u64) -> CatalogEntry {
    Ingredient::new(name, cook_time).into()
}

#[allow(dead_code)]
pub fn recipe(name: &str, items: &[(&str, u64)]) -> CatalogEntry {
    Recipe::new(
        name,
        items
            .iter()
            .map(|(item, quantity)| RequiredItem::new(*item, *quantity))
            .collect(),
    )
    .into()
}

/// Flattens a summary into `(name, quantity)` pairs for compact assertions.
#[allow(dead_code)]
pub fn quantities(summary: &RecipeSummary) -> Vec<(&str, u64)> {
    summary
        .ingredients
        .iter()
        .map(|i| (i.name.as_str(), i.quantity))
        .collect()
}
