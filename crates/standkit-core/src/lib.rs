//! # StandKit Core
//!
//! Core types, catalogs, and collaborator traits for StandKit.
//! Provides the data model for stand configurations, the built-in module
//! and certified-material catalogs, the error taxonomy, unit helpers, and
//! the event bus that connects the scene store to derived computation.

pub mod collab;
pub mod data;
pub mod error;
pub mod event_bus;
pub mod model;
pub mod units;

pub use collab::{AssetResolver, ConfigurationRepository, LayoutGenerator, LayoutRequest};

pub use data::{CertifiedMaterial, CertifiedMaterialLibrary, ModuleLibrary};

pub use error::{
    AssetError, CatalogError, Error, GenerationError, GeometryError, Result, SceneError,
};

pub use event_bus::{
    CatalogEvent, DesignEvent, ErrorEvent, EventBus, EventBusConfig, EventCategory, EventFilter,
    GenerationEvent, SceneEvent, SubscriptionId,
};

pub use model::{
    ArcConfig, Axis, BezierConfig, CircularConfig, CurveConfig, CurveKind, Customizable,
    Dimensions, FloorPlan, LevelConfig, MaterialAppearance, ModuleBase, ModuleCategory,
    ModuleVariant, PartialVec3, PlacedModule, SizeBounds, SizePreset, SnapPoint, SnapPointKind,
    SplineConfig, StairConfig, StairSide, StandConfiguration, Vec3,
};

pub use units::MeasurementSystem;
