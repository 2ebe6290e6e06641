//! Collaborator seams.
//!
//! The configurator core treats layout generation, asset resolution, and
//! configuration persistence as external collaborators behind async traits.
//! Their failures are explicit (`Result`), and the scene store's in-memory
//! state never depends on their completion order.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{FloorPlan, ModuleBase, StandConfiguration};

/// Parameters accompanying a layout generation prompt.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LayoutRequest {
    /// Free-text description of the desired stand.
    pub prompt: String,
    /// Target footprint, when known.
    #[serde(default)]
    pub floor_plan: Option<FloorPlan>,
    /// Budget ceiling in currency units.
    #[serde(default)]
    pub budget: Option<f64>,
    /// Exhibitor industry ("tech", "food", ...).
    #[serde(default)]
    pub industry: Option<String>,
    /// Desired style ("minimalist", "industrial", ...).
    #[serde(default)]
    pub style: Option<String>,
    /// Structured requirement tags ("reception", "screen", "storage", ...).
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl LayoutRequest {
    /// Creates a request from a bare prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }
}

/// Produces candidate stand configurations from a prompt.
///
/// Implementations may call an external AI service or synthesize layouts
/// locally. Returned candidates are *not* trusted: the designer validates
/// module references against the catalog before accepting one into the
/// scene store.
#[async_trait]
pub trait LayoutGenerator: Send + Sync {
    /// Generates one or more candidate configurations.
    async fn generate(&self, request: &LayoutRequest) -> Result<Vec<StandConfiguration>>;
}

/// Resolves module models and material textures to fetchable URLs.
///
/// The core only ever needs the string URL; fetching and caching are the
/// collaborator's concern. Failures degrade to placeholder geometry.
#[async_trait]
pub trait AssetResolver: Send + Sync {
    /// URL of the 3D model for a catalog module.
    async fn model_url(&self, module: &ModuleBase) -> Result<String>;

    /// URL of the texture for a certified material.
    async fn texture_url(&self, material_id: &str) -> Result<String>;
}

/// Persists stand configurations per booth.
///
/// The scene store exposes load/export; everything about the storage
/// format and location lives behind this trait.
#[async_trait]
pub trait ConfigurationRepository: Send + Sync {
    /// Persists a configuration for a booth.
    async fn save(&self, booth_id: &str, configuration: &StandConfiguration) -> Result<()>;

    /// Loads the configuration stored for a booth.
    async fn load(&self, booth_id: &str) -> Result<StandConfiguration>;
}
