use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

use crate::core::strain::KnownStrain;
use crate::matching::normalize::clean;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate strain name in catalog: {0}")]
    DuplicateStrain(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub strains: Vec<KnownStrain>,
}

/// The strain catalog with its lookup indexes.
///
/// Canonical names are unique by exact (unnormalized) string equality. The
/// alias index maps normalized alias spellings to canonical names; keys are
/// normalized here, at table-build time, so the matching core can treat the
/// invariant as given. The catalog is never mutated during classification.
#[derive(Debug, Default)]
pub struct StrainCatalog {
    /// All known strains, in catalog order
    strains: Vec<KnownStrain>,

    /// Exact canonical names, for the first classifier rule
    name_set: HashSet<String>,

    /// Index: normalized alias -> canonical name
    alias_to_canonical: HashMap<String, String>,
}

impl StrainCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/strains.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                expected = CATALOG_VERSION,
                found = %data.version,
                "catalog version mismatch"
            );
        }

        let mut catalog = Self::new();
        for strain in data.strains {
            catalog.add_strain(strain)?;
        }

        Ok(catalog)
    }

    /// Add a strain to the catalog.
    ///
    /// Alias keys are normalized on insert. An alias whose normalized form
    /// collides with an earlier entry keeps the earlier mapping.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateStrain`] if the canonical name is
    /// already present.
    pub fn add_strain(&mut self, strain: KnownStrain) -> Result<(), CatalogError> {
        if !self.name_set.insert(strain.name.clone()) {
            return Err(CatalogError::DuplicateStrain(strain.name));
        }

        for alias in &strain.aliases {
            let key = clean(alias);
            if key.is_empty() {
                tracing::warn!(alias = %alias, strain = %strain.name, "alias normalizes to empty, skipped");
                continue;
            }
            match self.alias_to_canonical.entry(key) {
                std::collections::hash_map::Entry::Occupied(existing) => {
                    tracing::warn!(
                        alias = %alias,
                        strain = %strain.name,
                        already_mapped_to = %existing.get(),
                        "alias collision, keeping earlier mapping"
                    );
                }
                std::collections::hash_map::Entry::Vacant(slot) => {
                    slot.insert(strain.name.clone());
                }
            }
        }

        self.strains.push(strain);
        Ok(())
    }

    /// Is this exact string a canonical name?
    pub fn contains_name(&self, name: &str) -> bool {
        self.name_set.contains(name)
    }

    /// Look up a label in the alias table.
    ///
    /// The lookup key is the label as given; alias keys are normalized, so
    /// only a label that already matches a normalized spelling resolves.
    pub fn resolve_alias(&self, label: &str) -> Option<&str> {
        self.alias_to_canonical.get(label).map(String::as_str)
    }

    /// Get a strain by its exact canonical name
    pub fn get(&self, name: &str) -> Option<&KnownStrain> {
        self.strains.iter().find(|s| s.name == name)
    }

    /// All strains in catalog order
    pub fn strains(&self) -> &[KnownStrain] {
        &self.strains
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            strains: self.strains.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of strains in catalog
    pub fn len(&self) -> usize {
        self.strains.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.strains.is_empty()
    }

    /// Number of alias entries in the index
    pub fn alias_count(&self) -> usize {
        self.alias_to_canonical.len()
    }
}
