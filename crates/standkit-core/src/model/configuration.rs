//! The stand configuration aggregate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SceneError;

use super::geometry::FloorPlan;
use super::module::MaterialAppearance;
use super::placement::PlacedModule;

/// A named, versionable stand design: footprint, placed modules, and floor
/// appearance.
///
/// Module order is insertion order. It is irrelevant to correctness and only
/// kept for deterministic rendering and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandConfiguration {
    /// Display name of the design.
    pub name: String,
    /// Footprint dimensions in meters.
    pub floor_plan: FloorPlan,
    /// Placed module instances, in insertion order.
    #[serde(default)]
    pub modules: Vec<PlacedModule>,
    /// Floor appearance.
    #[serde(default)]
    pub floor_material: MaterialAppearance,
    /// Optional style tags ("minimalist", "industrial", ...).
    #[serde(default)]
    pub style_tags: Vec<String>,
    /// Optional industry tag.
    #[serde(default)]
    pub industry: Option<String>,
    /// Cached aggregate price, if one has been computed.
    #[serde(default)]
    pub cached_total_price: Option<f64>,
}

impl StandConfiguration {
    /// Creates an empty configuration with the given name and footprint.
    pub fn new(name: impl Into<String>, width: f64, depth: f64) -> Self {
        Self {
            name: name.into(),
            floor_plan: FloorPlan::new(width, depth),
            modules: Vec::new(),
            floor_material: MaterialAppearance::default(),
            style_tags: Vec::new(),
            industry: None,
            cached_total_price: None,
        }
    }

    /// Checks the configuration invariants: a positive footprint and unique
    /// instance ids.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.floor_plan.is_positive() {
            return Err(SceneError::InvalidFootprint {
                width: self.floor_plan.width,
                depth: self.floor_plan.depth,
            });
        }
        let mut seen = HashSet::with_capacity(self.modules.len());
        for placed in &self.modules {
            if !seen.insert(placed.instance_id) {
                return Err(SceneError::DuplicateInstanceId {
                    instance_id: placed.instance_id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Looks up a placed module by instance id.
    pub fn find(&self, instance_id: Uuid) -> Option<&PlacedModule> {
        self.modules
            .iter()
            .find(|m| m.instance_id == instance_id)
    }

    /// Looks up a placed module by instance id, mutably.
    pub fn find_mut(&mut self, instance_id: Uuid) -> Option<&mut PlacedModule> {
        self.modules
            .iter_mut()
            .find(|m| m.instance_id == instance_id)
    }

    /// True if the configuration contains the instance id.
    pub fn contains(&self, instance_id: Uuid) -> bool {
        self.find(instance_id).is_some()
    }

    /// Number of placed modules.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

impl Default for StandConfiguration {
    fn default() -> Self {
        Self::new("Untitled", FloorPlan::default().width, FloorPlan::default().depth)
    }
}
