use thiserror::Error;

/// Errors raised while admitting a candidate entry into the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Entry name is empty after normalization")]
    EmptyName,

    #[error("An entry named '{0}' already exists in the catalog")]
    DuplicateName(String),

    #[error("Recipe '{recipe}' lists required item '{item}' more than once")]
    DuplicateRequiredItem { recipe: String, item: String },

    #[error("A {kind} entry must not declare the '{field}' field")]
    UnexpectedField { kind: &'static str, field: &'static str },

    #[error("A {kind} entry must declare the '{field}' field")]
    MissingField { kind: &'static str, field: &'static str },

    #[error("Ingredient '{name}' has a negative cook time: {cook_time}")]
    NegativeCookTime { name: String, cook_time: i64 },

    #[error("Recipe '{recipe}' requires item '{item}' with non-positive quantity {quantity}")]
    NonPositiveQuantity {
        recipe: String,
        item: String,
        quantity: i64,
    },

    #[error("Unknown entry type: '{0}'")]
    UnknownType(String),
}

/// Errors raised while resolving a recipe into its base-ingredient manifest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No recipe named '{0}' exists in the catalog")]
    RecipeNotFound(String),

    #[error("Entry '{missing}' is not in the catalog, but recipe '{required_by}' requires it")]
    MissingReference {
        missing: String,
        required_by: String,
    },

    #[error("Recipe requires itself through: {}", .cycle.join(" -> "))]
    CyclicReference { cycle: Vec<String> },

    #[error("Scaled quantity or cook time of '{item}' overflows")]
    QuantityOverflow { item: String },
}

impl ResolveError {
    /// True for every failure caused by an absent or mistyped entry.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ResolveError::RecipeNotFound(_) | ResolveError::MissingReference { .. }
        )
    }
}

/// Errors surfaced by the [`Cookbook`](crate::cookbook::Cookbook) facade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CookbookError {
    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors raised while loading catalog data from disk or JSON text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
