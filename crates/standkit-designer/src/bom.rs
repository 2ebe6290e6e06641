//! # BOM / Eco Aggregator
//!
//! Derives the itemized and total weight (kg), carbon footprint (kgCO2e),
//! and price of a configuration from its placed modules and the certified
//! materials catalog. Pure and read-only: the same configuration and
//! catalog always produce the same breakdown, regardless of module order.
//!
//! ## Unit basis convention
//!
//! Certified-material rates are per BOM unit. What a "unit" measures is a
//! fixed per-category convention (see `UnitBasis::for_category`):
//!
//! - `Wall`: vertical surface area, width x height in m²
//! - `Flooring` and `Structure`: covered area, width x depth in m²
//! - everything else: unit count, 1.0 per instance
//!
//! Scale factors apply to the measured dimensions before the basis is
//! computed. Modules without a resolvable certified material fall back to
//! their declared weight and base price and contribute zero certified
//! carbon.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use standkit_core::{
    CertifiedMaterialLibrary, ModuleCategory, PlacedModule, StandConfiguration,
};

/// How a module's BOM quantity is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitBasis {
    /// Vertical surface area (width x height), in m².
    FaceArea,
    /// Covered floor area (width x depth), in m².
    FootprintArea,
    /// One unit per instance.
    Count,
}

impl UnitBasis {
    /// The fixed per-category unit convention.
    pub fn for_category(category: ModuleCategory) -> Self {
        match category {
            ModuleCategory::Wall => UnitBasis::FaceArea,
            ModuleCategory::Flooring | ModuleCategory::Structure => UnitBasis::FootprintArea,
            ModuleCategory::Furniture
            | ModuleCategory::Lighting
            | ModuleCategory::Multimedia
            | ModuleCategory::Plv
            | ModuleCategory::Decoration => UnitBasis::Count,
        }
    }

    /// The BOM quantity of a placed instance under this basis.
    pub fn quantity(&self, placed: &PlacedModule) -> f64 {
        let dims = placed.effective_dimensions();
        match self {
            UnitBasis::FaceArea => dims.face_area(),
            UnitBasis::FootprintArea => dims.footprint_area(),
            UnitBasis::Count => 1.0,
        }
    }
}

/// The BOM line for one placed instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    /// The placed instance.
    pub instance_id: Uuid,
    /// The catalog module id.
    pub module_id: String,
    /// Display name.
    pub label: String,
    /// The certified material backing the line, when resolved.
    pub material_id: Option<String>,
    /// Measured quantity under the category's unit basis.
    pub quantity: f64,
    /// The basis the quantity was measured under.
    pub basis: UnitBasis,
    /// Line weight in kilograms.
    pub weight_kg: f64,
    /// Line carbon footprint in kgCO2e.
    pub carbon_kg: f64,
    /// Line price in currency units.
    pub price: f64,
}

/// Aggregate totals across all placed modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BomTotals {
    pub weight_kg: f64,
    pub carbon_kg: f64,
    pub price: f64,
}

/// The itemized and aggregated bill of materials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BomSummary {
    /// One line per placed instance, sorted by instance id.
    pub items: Vec<BomItem>,
    /// Sums across all lines.
    pub totals: BomTotals,
}

/// Computes the bill of materials for a configuration.
///
/// Items are sorted by instance id before summation, so totals are
/// independent of module insertion order (shuffling the placed-module
/// list never changes the result).
pub fn aggregate(
    configuration: &StandConfiguration,
    materials: &CertifiedMaterialLibrary,
) -> BomSummary {
    let mut items: Vec<BomItem> = configuration
        .modules
        .iter()
        .map(|placed| line_item(placed, materials))
        .collect();
    items.sort_by_key(|item| item.instance_id);

    let mut totals = BomTotals::default();
    for item in &items {
        totals.weight_kg += item.weight_kg;
        totals.carbon_kg += item.carbon_kg;
        totals.price += item.price;
    }
    debug!(
        items = items.len(),
        weight_kg = totals.weight_kg,
        carbon_kg = totals.carbon_kg,
        price = totals.price,
        "bill of materials aggregated"
    );
    BomSummary { items, totals }
}

fn line_item(placed: &PlacedModule, materials: &CertifiedMaterialLibrary) -> BomItem {
    let basis = UnitBasis::for_category(placed.module.category);
    let quantity = basis.quantity(placed);

    let resolved = placed
        .material
        .material_id
        .as_deref()
        .and_then(|id| materials.get(id));

    match resolved {
        Some(material) => BomItem {
            instance_id: placed.instance_id,
            module_id: placed.module.id.clone(),
            label: placed.module.name.clone(),
            material_id: Some(material.id.clone()),
            quantity,
            basis,
            weight_kg: material.density * quantity,
            carbon_kg: material.carbon_per_unit * quantity,
            price: material.price_per_unit * quantity + placed.module.base_price,
        },
        None => {
            // Unresolvable material reference: declared module values,
            // zero certified carbon.
            BomItem {
                instance_id: placed.instance_id,
                module_id: placed.module.id.clone(),
                label: placed.module.name.clone(),
                material_id: None,
                quantity,
                basis,
                weight_kg: placed.module.weight_kg,
                carbon_kg: 0.0,
                price: placed.module.base_price,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standkit_core::{ModuleLibrary, Vec3};

    fn configuration_with(ids: &[&str]) -> StandConfiguration {
        let catalog = ModuleLibrary::standard();
        let mut config = StandConfiguration::new("BOM test", 6.0, 4.0);
        for id in ids {
            let placed = PlacedModule::from_base(catalog.get(id).unwrap(), Vec3::ZERO);
            config.modules.push(placed);
        }
        config
    }

    #[test]
    fn wall_lines_use_face_area() {
        let materials = CertifiedMaterialLibrary::standard();
        let config = configuration_with(&["wall-001"]);
        let summary = aggregate(&config, &materials);

        let item = &summary.items[0];
        assert_eq!(item.basis, UnitBasis::FaceArea);
        // 2.0 m wide x 2.5 m high
        assert!((item.quantity - 5.0).abs() < 1e-9);

        let birch = materials.get("mat-fsc-birch").unwrap();
        assert!((item.weight_kg - birch.density * 5.0).abs() < 1e-9);
        assert!((item.price - (birch.price_per_unit * 5.0 + 120.0)).abs() < 1e-9);
    }

    #[test]
    fn count_basis_ignores_dimensions() {
        let materials = CertifiedMaterialLibrary::standard();
        let config = configuration_with(&["furniture-002"]);
        let summary = aggregate(&config, &materials);
        assert_eq!(summary.items[0].basis, UnitBasis::Count);
        assert!((summary.items[0].quantity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unresolved_material_falls_back_to_declared_values() {
        let materials = CertifiedMaterialLibrary::standard();
        let mut config = configuration_with(&["furniture-002"]);
        config.modules[0].material.material_id = Some("mat-unobtainium".to_string());
        let summary = aggregate(&config, &materials);

        let item = &summary.items[0];
        assert_eq!(item.material_id, None);
        assert!((item.weight_kg - 18.0).abs() < 1e-9);
        assert!((item.carbon_kg).abs() < 1e-12);
        assert!((item.price - 160.0).abs() < 1e-9);
    }

    #[test]
    fn totals_are_order_independent() {
        let materials = CertifiedMaterialLibrary::standard();
        let mut config = configuration_with(&["wall-001", "furniture-001", "level-001"]);
        let forward = aggregate(&config, &materials);
        config.modules.reverse();
        let backward = aggregate(&config, &materials);
        assert_eq!(forward, backward);
    }

    #[test]
    fn scaling_scales_area_based_lines() {
        let materials = CertifiedMaterialLibrary::standard();
        let mut config = configuration_with(&["wall-001"]);
        config.modules[0].scale = Vec3::new(2.0, 1.0, 1.0);
        let summary = aggregate(&config, &materials);
        // Width doubled: 4.0 x 2.5 face.
        assert!((summary.items[0].quantity - 10.0).abs() < 1e-9);
    }
}
