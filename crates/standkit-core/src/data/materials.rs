//! Certified materials database
//!
//! This module provides:
//! - Certified material entries (certification label, appearance, unit rates)
//! - An immutable built-in library with keyed lookup
//! - Custom library construction for externally sourced catalogs
//!
//! The library is injected into consumers (BOM aggregator, scene store)
//! rather than exposed as a global singleton. Entries are read-only to the
//! core; weight, carbon, and price rates are all per BOM unit (see the
//! designer crate's unit-basis convention).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CatalogError;

/// A certified material catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertifiedMaterial {
    /// Stable catalog id (e.g. "mat-fsc-birch").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Certification label (FSC, PEFC, Cradle to Cradle, ...).
    pub certification: String,
    /// Representative hex color for rendering.
    pub color: String,
    /// Price per BOM unit, in currency units.
    pub price_per_unit: f64,
    /// Mass per BOM unit, in kilograms.
    pub density: f64,
    /// Carbon footprint per BOM unit, in kgCO2e.
    pub carbon_per_unit: f64,
}

/// An immutable, keyed collection of certified materials.
#[derive(Debug, Clone, Default)]
pub struct CertifiedMaterialLibrary {
    entries: HashMap<String, CertifiedMaterial>,
}

impl CertifiedMaterialLibrary {
    /// Builds a library from externally sourced entries.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidEntry` on duplicate ids or
    /// non-finite unit rates.
    pub fn from_entries(
        entries: impl IntoIterator<Item = CertifiedMaterial>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for entry in entries {
            if !entry.price_per_unit.is_finite()
                || !entry.density.is_finite()
                || !entry.carbon_per_unit.is_finite()
            {
                return Err(CatalogError::InvalidEntry {
                    entry_id: entry.id.clone(),
                    reason: "non-finite unit rate".to_string(),
                });
            }
            if map.contains_key(&entry.id) {
                return Err(CatalogError::InvalidEntry {
                    entry_id: entry.id.clone(),
                    reason: "duplicate material id".to_string(),
                });
            }
            map.insert(entry.id.clone(), entry);
        }
        Ok(Self { entries: map })
    }

    /// The built-in certified materials library.
    pub fn standard() -> Self {
        let entries = vec![
            CertifiedMaterial {
                id: "mat-fsc-birch".to_string(),
                name: "FSC Birch Plywood".to_string(),
                certification: "FSC".to_string(),
                color: "#d8c49a".to_string(),
                price_per_unit: 38.0,
                density: 8.4,
                carbon_per_unit: 2.1,
            },
            CertifiedMaterial {
                id: "mat-recycled-alu".to_string(),
                name: "Recycled Aluminium Panel".to_string(),
                certification: "Cradle to Cradle".to_string(),
                color: "#b8bcc2".to_string(),
                price_per_unit: 62.0,
                density: 5.4,
                carbon_per_unit: 3.6,
            },
            CertifiedMaterial {
                id: "mat-bamboo".to_string(),
                name: "Laminated Bamboo".to_string(),
                certification: "FSC".to_string(),
                color: "#cdae77".to_string(),
                price_per_unit: 45.0,
                density: 7.0,
                carbon_per_unit: 1.4,
            },
            CertifiedMaterial {
                id: "mat-pet-felt".to_string(),
                name: "Recycled PET Felt".to_string(),
                certification: "GRS".to_string(),
                color: "#7d8a97".to_string(),
                price_per_unit: 29.0,
                density: 2.2,
                carbon_per_unit: 0.9,
            },
            CertifiedMaterial {
                id: "mat-eco-carpet".to_string(),
                name: "Eco Carpet Tile".to_string(),
                certification: "Cradle to Cradle".to_string(),
                color: "#4a5560".to_string(),
                price_per_unit: 18.0,
                density: 3.1,
                carbon_per_unit: 1.1,
            },
            CertifiedMaterial {
                id: "mat-pefc-spruce".to_string(),
                name: "PEFC Spruce Beam".to_string(),
                certification: "PEFC".to_string(),
                color: "#e0cfae".to_string(),
                price_per_unit: 33.0,
                density: 9.6,
                carbon_per_unit: 1.8,
            },
            CertifiedMaterial {
                id: "mat-low-carbon-steel".to_string(),
                name: "Low-Carbon Steel Frame".to_string(),
                certification: "EPD".to_string(),
                color: "#6b6f76".to_string(),
                price_per_unit: 54.0,
                density: 14.2,
                carbon_per_unit: 5.2,
            },
            CertifiedMaterial {
                id: "mat-bio-acrylic".to_string(),
                name: "Bio-based Acrylic Sheet".to_string(),
                certification: "ISCC PLUS".to_string(),
                color: "#eef2f5".to_string(),
                price_per_unit: 41.0,
                density: 4.3,
                carbon_per_unit: 2.7,
            },
        ];
        Self::from_entries(entries).expect("built-in materials are valid")
    }

    /// Parses an externally sourced catalog from a JSON array of entries.
    ///
    /// # Errors
    ///
    /// `CatalogError::InvalidEntry` on malformed JSON or invalid entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CertifiedMaterial> =
            serde_json::from_str(json).map_err(|err| CatalogError::InvalidEntry {
                entry_id: "<materials catalog>".to_string(),
                reason: err.to_string(),
            })?;
        Self::from_entries(entries)
    }

    /// Looks up a material by id.
    pub fn get(&self, id: &str) -> Option<&CertifiedMaterial> {
        self.entries.get(id)
    }

    /// Looks up a material by id, reporting a catalog error when absent.
    pub fn resolve(&self, id: &str) -> Result<&CertifiedMaterial, CatalogError> {
        self.entries
            .get(id)
            .ok_or_else(|| CatalogError::UnknownMaterial {
                material_id: id.to_string(),
            })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the library holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &CertifiedMaterial> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_library_resolves_known_ids() {
        let lib = CertifiedMaterialLibrary::standard();
        assert!(lib.get("mat-fsc-birch").is_some());
        assert!(lib.get("mat-eco-carpet").is_some());
        assert!(lib.get("mat-unobtainium").is_none());
    }

    #[test]
    fn resolve_reports_unknown_material() {
        let lib = CertifiedMaterialLibrary::standard();
        let err = lib.resolve("mat-unobtainium").unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownMaterial {
                material_id: "mat-unobtainium".to_string()
            }
        );
    }

    #[test]
    fn rejects_non_finite_rates() {
        let bad = CertifiedMaterial {
            id: "mat-bad".to_string(),
            name: "Bad".to_string(),
            certification: String::new(),
            color: "#000000".to_string(),
            price_per_unit: f64::NAN,
            density: 1.0,
            carbon_per_unit: 1.0,
        };
        assert!(CertifiedMaterialLibrary::from_entries([bad]).is_err());
    }
}
