//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kondate crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kondate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let cookbook = Cookbook::new();
//! cookbook.seed(CatalogFile::from_file("path/to/catalog.json")?)?;
//!
//! let summary = cookbook.summarize("pancake")?;
//! println!("{} takes {} to cook", summary.name, summary.cook_time);
//! # Ok(())
//! # }
//! ```

// Catalog model and storage
pub use crate::catalog::{
    CatalogEntry, CatalogStore, EntrySource, Ingredient, Recipe, RequiredItem,
};

// Entry points
pub use crate::cookbook::{Cookbook, CookbookBuilder};
pub use crate::normalize::parse_handwriting;
pub use crate::resolver::{IngredientQuantity, RecipeSummary, Resolver, resolve};
pub use crate::validator::{DuplicateCheck, Validator};

// Raw input shapes
pub use crate::data::{CatalogFile, EntryRequest, RequiredItemRequest};

// Error types
pub use crate::error::{CookbookError, LoadError, ResolveError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
