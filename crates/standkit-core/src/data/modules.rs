//! Built-in module catalog
//!
//! A static library of prefabricated stand modules, grouped by category and
//! keyed by stable category-prefixed ids ("wall-001", "level-002", ...).
//! Like the materials database, the library is immutable reference data
//! injected into consumers rather than an ambient global.

use std::collections::HashMap;
use std::f64::consts::PI;

use crate::error::CatalogError;
use crate::model::{
    ArcConfig, BezierConfig, CircularConfig, CurveConfig, Customizable, Dimensions, LevelConfig,
    MaterialAppearance, ModuleBase, ModuleCategory, ModuleVariant, SizeBounds, SizePreset,
    SnapPoint, SnapPointKind, SplineConfig, StairConfig, StairSide, Vec3,
};

/// An immutable, keyed collection of module definitions.
#[derive(Debug, Clone, Default)]
pub struct ModuleLibrary {
    entries: HashMap<String, ModuleBase>,
}

impl ModuleLibrary {
    /// Builds a library from externally sourced definitions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidEntry` on duplicate ids or
    /// non-positive nominal dimensions.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ModuleBase>,
    ) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for entry in entries {
            if !entry.dimensions.is_positive() {
                return Err(CatalogError::InvalidEntry {
                    entry_id: entry.id.clone(),
                    reason: format!("non-positive dimensions {}", entry.dimensions),
                });
            }
            if map.contains_key(&entry.id) {
                return Err(CatalogError::InvalidEntry {
                    entry_id: entry.id.clone(),
                    reason: "duplicate module id".to_string(),
                });
            }
            map.insert(entry.id.clone(), entry);
        }
        Ok(Self { entries: map })
    }

    /// Parses an externally sourced catalog from a JSON array of entries.
    ///
    /// # Errors
    ///
    /// `CatalogError::InvalidEntry` on malformed JSON or invalid entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ModuleBase> =
            serde_json::from_str(json).map_err(|err| CatalogError::InvalidEntry {
                entry_id: "<module catalog>".to_string(),
                reason: err.to_string(),
            })?;
        Self::from_entries(entries)
    }

    /// Looks up a module by id.
    pub fn get(&self, id: &str) -> Option<&ModuleBase> {
        self.entries.get(id)
    }

    /// Looks up a module by id, reporting a catalog error when absent.
    pub fn resolve(&self, id: &str) -> Result<&ModuleBase, CatalogError> {
        self.entries.get(id).ok_or_else(|| CatalogError::UnknownModule {
            module_id: id.to_string(),
        })
    }

    /// All modules of one category, sorted by id for stable display.
    pub fn by_category(&self, category: ModuleCategory) -> Vec<&ModuleBase> {
        let mut modules: Vec<&ModuleBase> = self
            .entries
            .values()
            .filter(|m| m.category == category)
            .collect();
        modules.sort_by(|a, b| a.id.cmp(&b.id));
        modules
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
    pub fn iter(&self) -> impl Iterator<Item = &ModuleBase> {
        self.entries.values()
    }

    /// The built-in module catalog.
    pub fn standard() -> Self {
        let mut entries = Vec::new();

        // Walls
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-fsc-birch", "#f4f1ea"),
            base_price: 120.0,
            weight_kg: 24.0,
            customizable: Customizable {
                dimensions: true,
                material: true,
                color: true,
            },
            size_bounds: Some(SizeBounds {
                min: Dimensions::new(0.5, 2.0, 0.1),
                max: Dimensions::new(6.0, 4.0, 0.2),
            }),
            size_presets: vec![
                SizePreset {
                    label: "Standard".to_string(),
                    dimensions: Dimensions::new(2.0, 2.5, 0.1),
                },
                SizePreset {
                    label: "Double".to_string(),
                    dimensions: Dimensions::new(4.0, 2.5, 0.1),
                },
            ],
            snap_points: vec![
                SnapPoint::new(Vec3::new(-1.0, 0.0, 0.0), SnapPointKind::WallEnd),
                SnapPoint::new(Vec3::new(1.0, 0.0, 0.0), SnapPointKind::WallEnd),
            ],
            ..ModuleBase::new(
                "wall-001",
                "Straight Wall Panel",
                ModuleCategory::Wall,
                Dimensions::new(2.0, 2.5, 0.1),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-fsc-birch", "#f4f1ea"),
            base_price: 210.0,
            weight_kg: 32.0,
            customizable: Customizable {
                color: true,
                material: true,
                ..Customizable::default()
            },
            curve: Some(CurveConfig::Arc(ArcConfig {
                radius: 3.0,
                start_angle: 0.0,
                end_angle: PI,
                ..ArcConfig::default()
            })),
            ..ModuleBase::new(
                "wall-002",
                "Arc Wall",
                ModuleCategory::Wall,
                Dimensions::new(6.0, 2.5, 0.1),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-pet-felt", "#8da3b8"),
            base_price: 260.0,
            weight_kg: 28.0,
            customizable: Customizable {
                color: true,
                ..Customizable::default()
            },
            curve: Some(CurveConfig::Bezier(BezierConfig {
                control_points: vec![
                    Vec3::new(-2.0, 0.0, 0.0),
                    Vec3::new(-0.7, 0.0, 1.6),
                    Vec3::new(0.7, 0.0, -1.6),
                    Vec3::new(2.0, 0.0, 0.0),
                ],
                extrude_height: 2.5,
                extrude_depth: 0.1,
                segments: 64,
            })),
            ..ModuleBase::new(
                "wall-003",
                "Bezier Wave Wall",
                ModuleCategory::Wall,
                Dimensions::new(4.0, 2.5, 0.1),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-bio-acrylic", "#eef2f5"),
            base_price: 340.0,
            weight_kg: 45.0,
            curve: Some(CurveConfig::Circular(CircularConfig {
                radius: 1.5,
                extrude_height: 2.5,
                extrude_depth: 0.1,
                segments: 64,
            })),
            ..ModuleBase::new(
                "wall-004",
                "Circular Enclosure",
                ModuleCategory::Wall,
                Dimensions::new(3.0, 2.5, 3.0),
            )
        });

        // Structure / levels
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-pefc-spruce", "#e0cfae"),
            base_price: 850.0,
            weight_kg: 260.0,
            stackable: true,
            level: Some(LevelConfig {
                height: 1.0,
                has_railing: true,
                has_stairs: true,
                stair_side: StairSide::Front,
                load_capacity_kg: 400.0,
            }),
            snap_points: vec![SnapPoint::new(
                Vec3::new(0.0, 1.0, 0.0),
                SnapPointKind::Surface,
            )],
            ..ModuleBase::new(
                "level-001",
                "Platform 3x3",
                ModuleCategory::Structure,
                Dimensions::new(3.0, 1.0, 3.0),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-pefc-spruce", "#d7c29a"),
            base_price: 420.0,
            weight_kg: 95.0,
            stair: Some(StairConfig {
                step_count: 6,
                step_height: 0.167,
                step_depth: 0.25,
                has_handrail: true,
            }),
            ..ModuleBase::new(
                "level-002",
                "Straight Stair",
                ModuleCategory::Structure,
                Dimensions::new(1.0, 1.0, 1.5),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-low-carbon-steel", "#6b6f76"),
            base_price: 1900.0,
            weight_kg: 540.0,
            stackable: true,
            level: Some(LevelConfig {
                height: 2.2,
                has_railing: true,
                has_stairs: true,
                stair_side: StairSide::Left,
                load_capacity_kg: 800.0,
            }),
            snap_points: vec![SnapPoint::new(
                Vec3::new(0.0, 2.2, 0.0),
                SnapPointKind::Surface,
            )],
            ..ModuleBase::new(
                "level-003",
                "Mezzanine 4x3",
                ModuleCategory::Structure,
                Dimensions::new(4.0, 2.2, 3.0),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-pefc-spruce", "#e0cfae"),
            base_price: 380.0,
            weight_kg: 120.0,
            level: Some(LevelConfig {
                height: 0.4,
                has_railing: false,
                has_stairs: false,
                stair_side: StairSide::Front,
                load_capacity_kg: 300.0,
            }),
            ..ModuleBase::new(
                "level-004",
                "Access Ramp",
                ModuleCategory::Structure,
                Dimensions::new(1.2, 0.4, 2.4),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-bamboo", "#cdae77"),
            base_price: 290.0,
            weight_kg: 60.0,
            stackable: true,
            fixed_aspect_ratio: Some(1.0),
            level: Some(LevelConfig {
                height: 0.3,
                has_railing: false,
                has_stairs: false,
                stair_side: StairSide::Front,
                load_capacity_kg: 250.0,
            }),
            snap_points: vec![SnapPoint::new(
                Vec3::new(0.0, 0.3, 0.0),
                SnapPointKind::Surface,
            )],
            ..ModuleBase::new(
                "level-005",
                "Podium 1x1",
                ModuleCategory::Structure,
                Dimensions::new(1.0, 0.3, 1.0),
            )
        });

        // Furniture
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-bamboo", "#cdae77"),
            base_price: 480.0,
            weight_kg: 55.0,
            customizable: Customizable {
                color: true,
                material: true,
                ..Customizable::default()
            },
            variants: vec![
                ModuleVariant {
                    id: "furniture-001-oak".to_string(),
                    label: "Oak Front".to_string(),
                    material: MaterialAppearance::certified("mat-fsc-birch", "#b8905c"),
                    price_delta: 60.0,
                },
                ModuleVariant {
                    id: "furniture-001-felt".to_string(),
                    label: "Felt Front".to_string(),
                    material: MaterialAppearance::certified("mat-pet-felt", "#7d8a97"),
                    price_delta: 35.0,
                },
            ],
            snap_points: vec![SnapPoint::new(
                Vec3::new(0.0, 1.05, 0.0),
                SnapPointKind::Surface,
            )],
            ..ModuleBase::new(
                "furniture-001",
                "Reception Counter",
                ModuleCategory::Furniture,
                Dimensions::new(1.8, 1.05, 0.6),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-fsc-birch", "#d8c49a"),
            base_price: 160.0,
            weight_kg: 18.0,
            ..ModuleBase::new(
                "furniture-002",
                "Bistro Table",
                ModuleCategory::Furniture,
                Dimensions::new(0.7, 1.1, 0.7),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-pet-felt", "#7d8a97"),
            base_price: 95.0,
            weight_kg: 7.5,
            ..ModuleBase::new(
                "furniture-003",
                "Stool",
                ModuleCategory::Furniture,
                Dimensions::new(0.4, 0.75, 0.4),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-fsc-birch", "#caa368"),
            base_price: 240.0,
            weight_kg: 34.0,
            customizable: Customizable {
                dimensions: true,
                color: true,
                ..Customizable::default()
            },
            ..ModuleBase::new(
                "furniture-004",
                "Shelving Unit",
                ModuleCategory::Furniture,
                Dimensions::new(0.9, 1.8, 0.35),
            )
        });

        // Lighting
        entries.push(ModuleBase {
            default_material: MaterialAppearance {
                material_id: None,
                color: "#2b2d31".to_string(),
                metalness: 0.7,
                roughness: 0.3,
            },
            base_price: 75.0,
            weight_kg: 1.8,
            ..ModuleBase::new(
                "lighting-001",
                "Track Spot",
                ModuleCategory::Lighting,
                Dimensions::new(0.12, 0.2, 0.12),
            )
        });
        entries.push(ModuleBase {
            default_material: MaterialAppearance {
                material_id: None,
                color: "#f5f0df".to_string(),
                metalness: 0.0,
                roughness: 0.5,
            },
            base_price: 190.0,
            weight_kg: 4.2,
            curve: Some(CurveConfig::Spline(SplineConfig {
                control_points: vec![
                    Vec3::new(-1.0, 2.2, 0.0),
                    Vec3::new(-0.3, 2.6, 0.4),
                    Vec3::new(0.4, 2.3, -0.3),
                    Vec3::new(1.0, 2.7, 0.1),
                ],
                tube_radius: 0.03,
                tubular_segments: 64,
                radial_segments: 16,
                closed: false,
            })),
            ..ModuleBase::new(
                "lighting-002",
                "LED Ribbon",
                ModuleCategory::Lighting,
                Dimensions::new(2.0, 0.5, 0.8),
            )
        });

        // Multimedia
        entries.push(ModuleBase {
            default_material: MaterialAppearance {
                material_id: None,
                color: "#101114".to_string(),
                metalness: 0.4,
                roughness: 0.2,
            },
            base_price: 650.0,
            weight_kg: 22.0,
            ..ModuleBase::new(
                "multimedia-001",
                "55\" Display",
                ModuleCategory::Multimedia,
                Dimensions::new(1.25, 0.75, 0.08),
            )
        });

        // PLV
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-bio-acrylic", "#ffffff"),
            base_price: 130.0,
            weight_kg: 9.0,
            customizable: Customizable {
                color: true,
                ..Customizable::default()
            },
            ..ModuleBase::new(
                "plv-001",
                "Brand Totem",
                ModuleCategory::Plv,
                Dimensions::new(0.5, 2.2, 0.5),
            )
        });

        // Decoration
        entries.push(ModuleBase {
            default_material: MaterialAppearance {
                material_id: None,
                color: "#3e7d4f".to_string(),
                metalness: 0.0,
                roughness: 0.9,
            },
            base_price: 85.0,
            weight_kg: 12.0,
            ..ModuleBase::new(
                "decoration-001",
                "Planter",
                ModuleCategory::Decoration,
                Dimensions::new(0.6, 1.4, 0.6),
            )
        });

        // Flooring
        entries.push(ModuleBase {
            default_material: MaterialAppearance::certified("mat-eco-carpet", "#4a5560"),
            base_price: 12.0,
            weight_kg: 4.0,
            customizable: Customizable {
                dimensions: true,
                material: true,
                color: true,
            },
            ..ModuleBase::new(
                "flooring-001",
                "Carpet Tile Field",
                ModuleCategory::Flooring,
                Dimensions::new(1.0, 0.01, 1.0),
            )
        });

        Self::from_entries(entries).expect("built-in catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_resolves_level_modules() {
        let lib = ModuleLibrary::standard();
        let platform = lib.resolve("level-001").unwrap();
        assert_eq!(platform.category, ModuleCategory::Structure);
        assert!(platform.stackable);
        assert_eq!(platform.level.as_ref().unwrap().height, 1.0);

        let stair = lib.resolve("level-002").unwrap();
        assert_eq!(stair.dimensions.depth, 1.5);
        assert!(stair.stair.is_some());
    }

    #[test]
    fn by_category_is_sorted_by_id() {
        let lib = ModuleLibrary::standard();
        let walls = lib.by_category(ModuleCategory::Wall);
        assert!(walls.len() >= 4);
        let ids: Vec<&str> = walls.iter().map(|m| m.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn unknown_module_is_a_catalog_error() {
        let lib = ModuleLibrary::standard();
        assert!(lib.resolve("wall-999").is_err());
    }

    #[test]
    fn external_catalog_loads_from_json() {
        let json = r##"[
            {
                "id": "wall-100",
                "name": "Imported Arc Wall",
                "category": "wall",
                "dimensions": { "width": 4.0, "height": 2.5, "depth": 0.1 },
                "default_material": { "color": "#ffffff" },
                "base_price": 180.0,
                "weight_kg": 30.0,
                "curve": { "type": "arc", "radius": 2.0 }
            }
        ]"##;
        let lib = ModuleLibrary::from_json(json).unwrap();
        let wall = lib.get("wall-100").unwrap();
        assert_eq!(wall.category, ModuleCategory::Wall);
        match wall.curve.as_ref().unwrap() {
            CurveConfig::Arc(arc) => {
                assert_eq!(arc.radius, 2.0);
                // Omitted parameters take the documented defaults.
                assert_eq!(arc.segments, 64);
                assert_eq!(arc.extrude_height, 2.5);
            }
            other => panic!("unexpected curve config {:?}", other),
        }
    }

    #[test]
    fn malformed_catalog_json_is_an_error() {
        assert!(ModuleLibrary::from_json("{ not json").is_err());
    }
}
