//! Catalog module definitions.
//!
//! A `ModuleBase` is an immutable catalog entry created at catalog-load
//! time. Placed instances clone their base and carry their own transform and
//! material (see `placement`).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::curve::CurveConfig;
use super::geometry::{Dimensions, Vec3};
use super::level::{LevelConfig, StairConfig};

/// Module categories for catalog organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    /// Load-bearing and multi-level pieces (platforms, stairs, ramps).
    Structure,
    /// Straight and curved wall panels.
    Wall,
    /// Counters, tables, seating, shelving.
    Furniture,
    /// Spots, track lights, LED fixtures.
    Lighting,
    /// Screens, video walls, interactive kiosks.
    Multimedia,
    /// Point-of-sale displays and signage.
    Plv,
    /// Plants, banners, ornaments.
    Decoration,
    /// Floor coverings and raised floors.
    Flooring,
}

impl ModuleCategory {
    /// All categories, in catalog display order.
    pub const ALL: [ModuleCategory; 8] = [
        ModuleCategory::Structure,
        ModuleCategory::Wall,
        ModuleCategory::Furniture,
        ModuleCategory::Lighting,
        ModuleCategory::Multimedia,
        ModuleCategory::Plv,
        ModuleCategory::Decoration,
        ModuleCategory::Flooring,
    ];
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "Structure"),
            Self::Wall => write!(f, "Wall"),
            Self::Furniture => write!(f, "Furniture"),
            Self::Lighting => write!(f, "Lighting"),
            Self::Multimedia => write!(f, "Multimedia"),
            Self::Plv => write!(f, "PLV"),
            Self::Decoration => write!(f, "Decoration"),
            Self::Flooring => write!(f, "Flooring"),
        }
    }
}

/// Surface appearance of a module or floor.
///
/// `material_id` references a certified-material catalog entry when set;
/// `color` is a hex color applied on top of it. Color changes preserve the
/// metalness/roughness response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAppearance {
    /// Certified material reference, if any.
    #[serde(default)]
    pub material_id: Option<String>,
    /// Hex color, e.g. "#d9d9d9".
    pub color: String,
    /// PBR metalness in [0, 1].
    #[serde(default)]
    pub metalness: f64,
    /// PBR roughness in [0, 1].
    #[serde(default = "default_roughness")]
    pub roughness: f64,
}

fn default_roughness() -> f64 {
    0.8
}

impl Default for MaterialAppearance {
    fn default() -> Self {
        Self {
            material_id: None,
            color: "#d9d9d9".to_string(),
            metalness: 0.1,
            roughness: default_roughness(),
        }
    }
}

impl MaterialAppearance {
    /// Appearance backed by a certified material entry.
    pub fn certified(material_id: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            material_id: Some(material_id.into()),
            color: color.into(),
            ..Self::default()
        }
    }
}

/// Which aspects of a module the exhibitor may customize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Customizable {
    #[serde(default)]
    pub dimensions: bool,
    #[serde(default)]
    pub material: bool,
    #[serde(default)]
    pub color: bool,
}

/// A named preset size for a customizable module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizePreset {
    pub label: String,
    pub dimensions: Dimensions,
}

/// Minimum and maximum extents for dimension customization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min: Dimensions,
    pub max: Dimensions,
}

/// A named variant of a module: a full material plus a price delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleVariant {
    pub id: String,
    pub label: String,
    pub material: MaterialAppearance,
    #[serde(default)]
    pub price_delta: f64,
}

/// Tag describing what a snap point anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapPointKind {
    /// A walkable or placeable top surface.
    Surface,
    /// A generic edge anchor.
    Edge,
    /// The end of a wall run, for chaining wall panels.
    WallEnd,
    /// An edge a stair module may attach to.
    StairAttachment,
}

/// A named anchor position relative to a module's origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
    /// Offset from the module position, in meters.
    pub offset: Vec3,
    /// What the point anchors.
    pub kind: SnapPointKind,
}

impl SnapPoint {
    /// Creates a snap point from an offset and kind.
    pub fn new(offset: Vec3, kind: SnapPointKind) -> Self {
        Self { offset, kind }
    }
}

/// An immutable catalog module definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleBase {
    /// Stable catalog id, category-prefixed (e.g. "wall-001").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: ModuleCategory,
    /// Nominal extents in meters.
    pub dimensions: Dimensions,
    /// Default surface appearance.
    pub default_material: MaterialAppearance,
    /// Base price in currency units, independent of material.
    pub base_price: f64,
    /// Which aspects the exhibitor may change.
    #[serde(default)]
    pub customizable: Customizable,
    /// Preset sizes offered by the catalog.
    #[serde(default)]
    pub size_presets: Vec<SizePreset>,
    /// Width/depth ratio to preserve while resizing, if any.
    #[serde(default)]
    pub fixed_aspect_ratio: Option<f64>,
    /// Resize limits, if any.
    #[serde(default)]
    pub size_bounds: Option<SizeBounds>,
    /// Named material/price variants.
    #[serde(default)]
    pub variants: Vec<ModuleVariant>,
    /// Curve configuration for non-box geometry.
    #[serde(default)]
    pub curve: Option<CurveConfig>,
    /// Multi-level structural metadata.
    #[serde(default)]
    pub level: Option<LevelConfig>,
    /// Stair step metadata.
    #[serde(default)]
    pub stair: Option<StairConfig>,
    /// Shipping weight in kilograms.
    pub weight_kg: f64,
    /// Whether other modules may rest on top of this one.
    #[serde(default)]
    pub stackable: bool,
    /// Relative snap points for assisted placement.
    #[serde(default)]
    pub snap_points: Vec<SnapPoint>,
}

impl ModuleBase {
    /// Creates a minimal module definition; remaining fields take their
    /// defaults and are usually filled with struct-update syntax.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ModuleCategory,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            dimensions,
            default_material: MaterialAppearance::default(),
            base_price: 0.0,
            customizable: Customizable::default(),
            size_presets: Vec::new(),
            fixed_aspect_ratio: None,
            size_bounds: None,
            variants: Vec::new(),
            curve: None,
            level: None,
            stair: None,
            weight_kg: 0.0,
            stackable: false,
            snap_points: Vec::new(),
        }
    }
}
