//! Placed module instances.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geometry::{Dimensions, Vec3};
use super::module::{MaterialAppearance, ModuleBase};

/// A concrete occurrence of a catalog module within a configuration.
///
/// Instances are owned exclusively by the scene store: they are created by
/// add/duplicate operations, mutated in place by move/rotate/scale/recolor,
/// and destroyed by remove. A locked instance rejects all mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedModule {
    /// Instance id, unique within a configuration.
    pub instance_id: Uuid,
    /// The catalog definition this instance was cloned from.
    pub module: ModuleBase,
    /// Absolute position in meters; y is vertical.
    pub position: Vec3,
    /// Rotation in radians per axis.
    pub rotation: Vec3,
    /// Per-axis scale factor.
    pub scale: Vec3,
    /// Resolved surface appearance; starts as the module default.
    pub material: MaterialAppearance,
    /// Selection flag.
    #[serde(default)]
    pub selected: bool,
    /// Locked instances reject mutation.
    #[serde(default)]
    pub locked: bool,
}

impl PlacedModule {
    /// Instantiates a catalog module at a position with default transform
    /// and material, under a fresh instance id.
    pub fn from_base(base: &ModuleBase, position: Vec3) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            module: base.clone(),
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::new(1.0, 1.0, 1.0),
            material: base.default_material.clone(),
            selected: false,
            locked: false,
        }
    }

    /// Clones this instance under a fresh id, offset to avoid perfect
    /// overlap with the source.
    pub fn duplicated(&self, offset: Vec3) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            position: self.position + offset,
            selected: false,
            ..self.clone()
        }
    }

    /// Nominal dimensions with the instance scale applied.
    pub fn effective_dimensions(&self) -> Dimensions {
        self.module.dimensions.scaled(self.scale)
    }

    /// Horizontal footprint (width, depth) with scale applied, in meters.
    pub fn footprint(&self) -> (f64, f64) {
        let dims = self.effective_dimensions();
        (dims.width, dims.depth)
    }
}
