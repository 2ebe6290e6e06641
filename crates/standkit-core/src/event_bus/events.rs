//! Event type definitions for the event bus.
//!
//! Scene mutations, catalog problems, and collaborator outcomes are all
//! published as events so derived computation (BOM totals, scene meshes)
//! knows when to recompute. Events are cloneable and serializable for
//! logging/replay.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Root event enum for all configurator events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DesignEvent {
    /// Scene store mutations
    Scene(SceneEvent),
    /// Catalog lookups and validation
    Catalog(CatalogEvent),
    /// Layout generation collaborator outcomes
    Generation(GenerationEvent),
    /// Error and diagnostic events
    Error(ErrorEvent),
}

impl DesignEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            DesignEvent::Scene(_) => EventCategory::Scene,
            DesignEvent::Catalog(_) => EventCategory::Catalog,
            DesignEvent::Generation(_) => EventCategory::Generation,
            DesignEvent::Error(_) => EventCategory::Error,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            DesignEvent::Scene(e) => e.description(),
            DesignEvent::Catalog(e) => e.description(),
            DesignEvent::Generation(e) => e.description(),
            DesignEvent::Error(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Scene store mutation events.
    Scene,
    /// Catalog events.
    Catalog,
    /// Layout generation events.
    Generation,
    /// Error and diagnostic events.
    Error,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Scene => write!(f, "Scene"),
            EventCategory::Catalog => write!(f, "Catalog"),
            EventCategory::Generation => write!(f, "Generation"),
            EventCategory::Error => write!(f, "Error"),
        }
    }
}

/// Scene store mutation events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SceneEvent {
    /// A module instance was added
    ModuleAdded {
        /// The new instance id.
        instance_id: Uuid,
        /// The catalog module id.
        module_id: String,
    },
    /// A module instance was removed
    ModuleRemoved {
        /// The removed instance id.
        instance_id: Uuid,
    },
    /// A module's position, rotation, or scale changed
    ModuleTransformed {
        /// The affected instance id.
        instance_id: Uuid,
    },
    /// A module's color or material changed
    ModuleRestyled {
        /// The affected instance id.
        instance_id: Uuid,
    },
    /// The primary selection changed
    SelectionChanged {
        /// The newly selected instance, if any.
        instance_id: Option<Uuid>,
    },
    /// The floor appearance changed
    FloorChanged,
    /// A whole configuration replaced the scene
    ConfigurationReplaced {
        /// Name of the configuration now in the scene.
        name: String,
        /// Number of placed modules it carries.
        module_count: usize,
    },
}

impl SceneEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            SceneEvent::ModuleAdded { module_id, .. } => {
                format!("Module added: {}", module_id)
            }
            SceneEvent::ModuleRemoved { instance_id } => {
                format!("Module removed: {}", instance_id)
            }
            SceneEvent::ModuleTransformed { instance_id } => {
                format!("Module transformed: {}", instance_id)
            }
            SceneEvent::ModuleRestyled { instance_id } => {
                format!("Module restyled: {}", instance_id)
            }
            SceneEvent::SelectionChanged { instance_id } => match instance_id {
                Some(id) => format!("Selected: {}", id),
                None => "Selection cleared".to_string(),
            },
            SceneEvent::FloorChanged => "Floor changed".to_string(),
            SceneEvent::ConfigurationReplaced { name, module_count } => {
                format!("Configuration replaced: {} ({} modules)", name, module_count)
            }
        }
    }
}

/// Catalog events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CatalogEvent {
    /// A placed module referenced a module id missing from the catalog
    UnresolvedModule {
        /// The unknown module id.
        module_id: String,
    },
    /// A BOM lookup fell back to declared module values
    MaterialFallback {
        /// The unknown material id.
        material_id: String,
    },
}

impl CatalogEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            CatalogEvent::UnresolvedModule { module_id } => {
                format!("Unresolved module: {}", module_id)
            }
            CatalogEvent::MaterialFallback { material_id } => {
                format!("Material fallback: {}", material_id)
            }
        }
    }
}

/// Layout generation collaborator events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GenerationEvent {
    /// A generation request was issued
    Requested {
        /// The textual prompt.
        prompt: String,
    },
    /// Generation produced candidate configurations
    Completed {
        /// Number of accepted candidates.
        candidates: usize,
    },
    /// Generation failed; the scene was left untouched
    Failed {
        /// A human-readable failure reason.
        reason: String,
    },
}

impl GenerationEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            GenerationEvent::Requested { prompt } => format!("Generation requested: {}", prompt),
            GenerationEvent::Completed { candidates } => {
                format!("Generation completed: {} candidates", candidates)
            }
            GenerationEvent::Failed { reason } => format!("Generation failed: {}", reason),
        }
    }
}

/// Error and diagnostic events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ErrorEvent {
    /// A recovered condition worth surfacing (e.g. geometry fallback)
    Warning {
        /// The warning message.
        message: String,
    },
    /// An explicit collaborator failure
    Failure {
        /// The failure message.
        message: String,
    },
}

impl ErrorEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            ErrorEvent::Warning { message } => format!("Warning: {}", message),
            ErrorEvent::Failure { message } => format!("Failure: {}", message),
        }
    }
}
