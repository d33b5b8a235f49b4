use serde::Serialize;

/// A single admitted catalog entry. The variant fixes which fields exist, so an
/// ingredient can never carry required items and a recipe never carries a cook time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogEntry {
    Recipe(Recipe),
    Ingredient(Ingredient),
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Recipe(recipe) => &recipe.name,
            CatalogEntry::Ingredient(ingredient) => &ingredient.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CatalogEntry::Recipe(_) => "recipe",
            CatalogEntry::Ingredient(_) => "ingredient",
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            CatalogEntry::Recipe(recipe) => Some(recipe),
            CatalogEntry::Ingredient(_) => None,
        }
    }
}

/// A base ingredient with an intrinsic cook time for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub cook_time: u64,
}

/// A recipe built from other catalog entries, referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub required_items: Vec<RequiredItem>,
}

/// One `(name, quantity)` requirement of a recipe. The name may not be in the
/// catalog yet; dangling references only fail at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, cook_time: u64) -> Self {
        Self {
            name: name.into(),
            cook_time,
        }
    }
}

impl Recipe {
    pub fn new(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Self {
        Self {
            name: name.into(),
            required_items,
        }
    }
}

impl RequiredItem {
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl From<Recipe> for CatalogEntry {
    fn from(recipe: Recipe) -> Self {
        CatalogEntry::Recipe(recipe)
    }
}

impl From<Ingredient> for CatalogEntry {
    fn from(ingredient: Ingredient) -> Self {
        CatalogEntry::Ingredient(ingredient)
    }
}
