//! # Kondate - Recipe Catalog and Resolution Engine
//!
//! **Kondate** keeps an in-memory catalog of ingredients and recipes and answers one
//! question about it: what base ingredients, and how much cook time, does one unit of a
//! recipe need once every nested recipe is flattened out?
//!
//! ## Core Workflow
//!
//! 1.  **Create Entries**: Submit raw [`EntryRequest`](data::EntryRequest)s to a
//!     [`Cookbook`](cookbook::Cookbook). Names are normalized, the candidate is checked by
//!     the [`Validator`](validator::Validator) and admitted into the
//!     [`CatalogStore`](catalog::CatalogStore).
//! 2.  **Resolve**: Ask the cookbook for a summary of a recipe. The
//!     [`Resolver`](resolver::Resolver) walks the recipe tree depth-first, scaling each
//!     base ingredient by the product of the quantities on its path, then merges the
//!     occurrences by name and totals the cook time.
//!
//! Recipes may reference entries that do not exist yet. Such a dangling reference, or a
//! recipe that requires itself, only fails when it is resolved.
//!
//! ## Quick Start
//!
//! ```rust
//! use kondate::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let cookbook = Cookbook::new();
//!
//!     cookbook.create_entry(EntryRequest::ingredient("egg", 5))?;
//!     cookbook.create_entry(EntryRequest::ingredient("flour", 2))?;
//!     cookbook.create_entry(EntryRequest::recipe("batter", vec![("Egg", 2), ("Flour", 1)]))?;
//!     cookbook.create_entry(EntryRequest::recipe("pancake", vec![("Batter", 3)]))?;
//!
//!     let summary = cookbook.summarize("PANCAKE")?;
//!     assert_eq!(summary.cook_time, 36);
//!     assert_eq!(summary.ingredients[0], IngredientQuantity { name: "Egg".into(), quantity: 6 });
//!     assert_eq!(summary.ingredients[1], IngredientQuantity { name: "Flour".into(), quantity: 3 });
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod cookbook;
pub mod data;
pub mod error;
pub mod normalize;
pub mod prelude;
pub mod resolver;
pub mod validator;

#[cfg(feature = "server")]
pub mod server;
