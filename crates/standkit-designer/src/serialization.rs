//! Serialization and deserialization for stand design files.
//!
//! Implements save/load for .skd (StandKit design) files using JSON with
//! complete configuration preservation. The payload stores module
//! references by catalog id plus per-instance overrides; loading
//! rehydrates instances against the injected catalog, so a file can never
//! smuggle unknown modules into the scene.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use standkit_core::{
    FloorPlan, MaterialAppearance, ModuleLibrary, PlacedModule, SceneError, StandConfiguration,
    Vec3,
};

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub floor_plan: FloorPlan,
    #[serde(default)]
    pub floor_material: MaterialAppearance,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub industry: Option<String>,
    pub modules: Vec<PlacedModuleData>,
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Serialized placed-module data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedModuleData {
    pub instance_id: Uuid,
    pub module_id: String,
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "default_scale")]
    pub scale: Vec3,
    /// Material override; `None` keeps the catalog default.
    #[serde(default)]
    pub material: Option<MaterialAppearance>,
    #[serde(default)]
    pub locked: bool,
}

fn default_scale() -> Vec3 {
    Vec3::new(1.0, 1.0, 1.0)
}

impl DesignFile {
    /// Captures a configuration into a file payload.
    pub fn from_configuration(configuration: &StandConfiguration) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: configuration.name.clone(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            floor_plan: configuration.floor_plan,
            floor_material: configuration.floor_material.clone(),
            style_tags: configuration.style_tags.clone(),
            industry: configuration.industry.clone(),
            modules: configuration
                .modules
                .iter()
                .map(PlacedModuleData::from_placed)
                .collect(),
        }
    }

    /// Rehydrates the payload into a configuration against a catalog.
    ///
    /// # Errors
    ///
    /// `SceneError::UnresolvedModule` for module references missing from
    /// the catalog; the usual configuration invariants are checked too.
    pub fn to_configuration(
        &self,
        catalog: &ModuleLibrary,
    ) -> std::result::Result<StandConfiguration, standkit_core::Error> {
        let mut configuration = StandConfiguration::new(
            self.metadata.name.clone(),
            self.floor_plan.width,
            self.floor_plan.depth,
        );
        configuration.floor_material = self.floor_material.clone();
        configuration.style_tags = self.style_tags.clone();
        configuration.industry = self.industry.clone();

        for data in &self.modules {
            let base = catalog.get(&data.module_id).ok_or_else(|| {
                SceneError::UnresolvedModule {
                    instance_id: data.instance_id.to_string(),
                    module_id: data.module_id.clone(),
                }
            })?;
            configuration.modules.push(data.to_placed(base.clone()));
        }

        configuration.validate()?;
        Ok(configuration)
    }

    /// Save design to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;

        std::fs::write(path.as_ref(), json).context("Failed to write design file")?;

        Ok(())
    }

    /// Load design from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read design file")?;

        let mut design: DesignFile =
            serde_json::from_str(&content).context("Failed to parse design file")?;

        design.metadata.modified = Utc::now();

        Ok(design)
    }
}

impl PlacedModuleData {
    /// Flattens a placed instance into its serialized form.
    pub fn from_placed(placed: &PlacedModule) -> Self {
        let material = if placed.material == placed.module.default_material {
            None
        } else {
            Some(placed.material.clone())
        };
        Self {
            instance_id: placed.instance_id,
            module_id: placed.module.id.clone(),
            position: placed.position,
            rotation: placed.rotation,
            scale: placed.scale,
            material,
            locked: placed.locked,
        }
    }

    fn to_placed(&self, base: standkit_core::ModuleBase) -> PlacedModule {
        let material = self
            .material
            .clone()
            .unwrap_or_else(|| base.default_material.clone());
        PlacedModule {
            instance_id: self.instance_id,
            module: base,
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            material,
            selected: false,
            locked: self.locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_module_reference_fails_rehydration() {
        let catalog = ModuleLibrary::standard();
        let file = DesignFile {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: "test".to_string(),
                created: Utc::now(),
                modified: Utc::now(),
                author: String::new(),
                description: String::new(),
            },
            floor_plan: FloorPlan::new(6.0, 4.0),
            floor_material: MaterialAppearance::default(),
            style_tags: Vec::new(),
            industry: None,
            modules: vec![PlacedModuleData {
                instance_id: Uuid::new_v4(),
                module_id: "wall-999".to_string(),
                position: Vec3::ZERO,
                rotation: Vec3::ZERO,
                scale: default_scale(),
                material: None,
                locked: false,
            }],
        };

        let err = file.to_configuration(&catalog).unwrap_err();
        assert!(err.is_scene_error());
    }

    #[test]
    fn default_material_is_not_written_as_override() {
        let catalog = ModuleLibrary::standard();
        let placed =
            PlacedModule::from_base(catalog.get("wall-001").unwrap(), Vec3::new(1.0, 0.0, 2.0));
        let data = PlacedModuleData::from_placed(&placed);
        assert!(data.material.is_none());
    }
}
