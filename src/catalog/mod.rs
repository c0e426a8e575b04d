//! Region identifiers and the region content catalog.
//!
//! The catalog is the engine's view of the external content table: a map
//! from lowercase region ids to display records (title, description
//! markup, image reference), JSON-shaped the way map data files ship it:
//!
//! ```json
//! { "fr": { "name": "France", "description": "…", "image": "flags/fr.png" } }
//! ```
//!
//! Lookups never fail — unknown ids resolve to placeholder content.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::MappaError;

/// Stable identifier of a selectable region.
///
/// Region elements expose lowercase ids; the constructor normalizes case
/// so host-provided ids and catalog keys always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// Identifier from any-cased input, normalized to lowercase.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_lowercase())
    }

    /// The normalized identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One catalog record, as stored in the JSON table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name of the region.
    pub name: String,
    /// Description as markup (may contain inline formatting tags).
    pub description: String,
    /// Reference to the region's image asset, if any.
    #[serde(default)]
    pub image: Option<String>,
}

/// Content resolved for a focused region, ready for presentation.
///
/// Always fully populated: unknown regions get the upper-cased identifier
/// as a title and a generic placeholder description.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionInfo {
    /// Panel heading.
    pub title: String,
    /// Body markup.
    pub description_markup: String,
    /// Image asset reference, if the region has one.
    pub image_ref: Option<String>,
}

/// Placeholder description for regions without catalog entries.
const PLACEHOLDER_DESCRIPTION: &str = "No information available yet.";

/// The region content table.
///
/// Backed by an `FxHashMap`; keys are normalized [`RegionId`]s.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    entries: FxHashMap<RegionId, CatalogEntry>,
}

impl RegionCatalog {
    /// Empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON table form.
    ///
    /// Keys are normalized to lowercase on the way in.
    ///
    /// # Errors
    ///
    /// Returns [`MappaError::CatalogParse`] when the JSON does not match
    /// the table shape.
    pub fn from_json_str(json: &str) -> Result<Self, MappaError> {
        let raw: FxHashMap<String, CatalogEntry> = serde_json::from_str(json)
            .map_err(|e| MappaError::CatalogParse(e.to_string()))?;

        let entries = raw
            .into_iter()
            .map(|(id, entry)| (RegionId::new(&id), entry))
            .collect();
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`MappaError::Io`] when the file cannot be read, or
    /// [`MappaError::CatalogParse`] when its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, MappaError> {
        let content = std::fs::read_to_string(path).map_err(MappaError::Io)?;
        Self::from_json_str(&content)
    }

    /// Insert or replace one entry.
    pub fn insert(&mut self, id: RegionId, entry: CatalogEntry) {
        let _ = self.entries.insert(id, entry);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a region id to presentable content.
    ///
    /// Unknown ids degrade to the upper-cased identifier and a placeholder
    /// description — this path never fails the interaction.
    #[must_use]
    pub fn resolve(&self, id: &RegionId) -> SelectionInfo {
        self.entries.get(id).map_or_else(
            || {
                log::debug!("no catalog entry for region '{id}'");
                SelectionInfo {
                    title: id.as_str().to_uppercase(),
                    description_markup: PLACEHOLDER_DESCRIPTION.to_owned(),
                    image_ref: None,
                }
            },
            |entry| SelectionInfo {
                title: entry.name.clone(),
                description_markup: entry.description.clone(),
                image_ref: entry.image.clone(),
            },
        )
    }
}
