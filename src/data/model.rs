use crate::error::LoadError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;

/// A raw, not yet validated entry as supplied by a caller.
///
/// The outer `Option` of each type-specific field records whether the key was present
/// at all, the inner one its value. A key given as `null` is `Some(None)`: it still
/// counts as declared, so the validator rejects it on the wrong entry type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "declared",
        skip_serializing_if = "Option::is_none"
    )]
    pub cook_time: Option<Option<i64>>,
    #[serde(
        default,
        deserialize_with = "declared",
        skip_serializing_if = "Option::is_none"
    )]
    pub required_items: Option<Option<Vec<RequiredItemRequest>>>,
}

/// Only runs when the key is present, so a `null` value becomes `Some(None)`.
fn declared<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequiredItemRequest {
    pub name: String,
    pub quantity: i64,
}

impl EntryRequest {
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            kind: "ingredient".to_string(),
            name: name.into(),
            cook_time: Some(Some(cook_time)),
            required_items: None,
        }
    }

    pub fn recipe<N: Into<String>>(name: impl Into<String>, items: Vec<(N, i64)>) -> Self {
        Self {
            kind: "recipe".to_string(),
            name: name.into(),
            cook_time: None,
            required_items: Some(Some(
                items
                    .into_iter()
                    .map(|(name, quantity)| RequiredItemRequest {
                        name: name.into(),
                        quantity,
                    })
                    .collect(),
            )),
        }
    }
}

/// A batch of entry requests, used to seed a catalog from a JSON array on disk.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(transparent)]
pub struct CatalogFile {
    pub entries: Vec<EntryRequest>,
}

impl CatalogFile {
    /// Load catalog entries from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse catalog entries from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}
