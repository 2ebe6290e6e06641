//! # StandKit Designer
//!
//! The placement, constraint, and costing engine behind the stand
//! configurator. It combines procedural module geometry, advisory spatial
//! checks, multi-level support rules, and derived cost/eco reporting into
//! one editing core.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Geometry kernel**: box meshes plus curved geometry (arc, bezier,
//!   circular, spline tube) from declarative curve configurations
//! - **Mesh export**: whole-scene assembly and binary STL output
//!
//! ### Placement
//! - **Collision & snap engine**: footprint overlap, stacking
//!   eligibility, grid snapping, snap-point discovery
//! - **Level subsystem**: platform anchors, stair placement, support
//!   containment checks
//!
//! ### Editing
//! - **Scene store**: the single source of truth for one configuration,
//!   with atomic operations, selection, clipboard, and undo/redo history
//! - **Commands**: reversible mutations grouped into one history model
//!
//! ### Derived Outputs
//! - **BOM aggregator**: itemized weight / carbon / price breakdown
//!   against the certified materials catalog
//! - **Layout generation**: catalog-validated acceptance of AI-generated
//!   candidates, with a local template generator as the fallback
//!
//! ## Architecture
//!
//! ```text
//! SceneStore (configuration + history)
//!   ├── Commands (reversible mutations)
//!   ├── Collision engine (advisory reports)
//!   └── Level subsystem (support rules)
//!
//! Geometry kernel (curve configs -> meshes)
//!   └── Mesh export (STL)
//!
//! BOM aggregator (configuration + materials -> totals)
//! Layout generation (prompt -> validated configuration)
//! ```
//!
//! All catalogs are injected; mutation failures that stem from user input
//! (unknown ids, locked instances) are silent no-ops, while collaborator
//! failures surface as explicit errors.

pub mod bom;
pub mod collision;
pub mod commands;
pub mod geometry;
pub mod layout;
pub mod levels;
pub mod mesh_export;
pub mod scene;
pub mod serialization;

pub use bom::{aggregate, BomItem, BomSummary, BomTotals, UnitBasis};
pub use collision::{
    can_stack, check_placement, distance, find_nearest_snap_point, overlaps, snap_to_grid,
    OverlapPair, PlacementReport, SnapHit, DEFAULT_MARGIN, DEFAULT_SNAP_THRESHOLD,
};
pub use commands::{ModulePatch, SceneCommand};
pub use geometry::{
    build_box_mesh, build_curved_mesh, build_module_mesh, fallback_mesh, MeshBuffer, MeshBuild,
};
pub use layout::{apply_generated_layout, validate_candidate, TemplateLayoutGenerator};
pub use levels::{
    can_place_on_platform, platform_snap_points, stair_placement, PlatformAnchor,
    SUPPORT_TOLERANCE,
};
pub use mesh_export::{export_configuration_stl, export_stl, scene_mesh};
pub use scene::{SceneStore, DUPLICATE_OFFSET};
pub use serialization::{DesignFile, DesignMetadata, PlacedModuleData};
