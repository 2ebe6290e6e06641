//! Data model for stand configurations.
//!
//! The model splits into catalog definitions (`ModuleBase` and its
//! sub-configurations, immutable once loaded), placed instances
//! (`PlacedModule`, owned by the scene store), and the configuration
//! aggregate (`StandConfiguration`).

pub mod configuration;
pub mod curve;
pub mod geometry;
pub mod level;
pub mod module;
pub mod placement;

pub use configuration::StandConfiguration;
pub use curve::{ArcConfig, BezierConfig, CircularConfig, CurveConfig, CurveKind, SplineConfig};
pub use geometry::{Axis, Dimensions, FloorPlan, PartialVec3, Vec3};
pub use level::{LevelConfig, StairConfig, StairSide};
pub use module::{
    Customizable, MaterialAppearance, ModuleBase, ModuleCategory, ModuleVariant, SizeBounds,
    SizePreset, SnapPoint, SnapPointKind,
};
pub use placement::PlacedModule;
