//! Error handling for StandKit
//!
//! Provides error types for all layers of the configurator core:
//! - Geometry errors (malformed curve configurations)
//! - Catalog errors (unknown module/material references)
//! - Scene errors (invalid configurations)
//! - Generation errors (layout generation collaborator)
//! - Asset errors (model/texture resolution collaborator)
//!
//! All error types use `thiserror` for ergonomic error handling.
//!
//! Note that two conditions from the editing model are deliberately *not*
//! errors: mutating an unknown or locked instance id is a silent no-op, and
//! a detected overlap between placed modules is advisory data, never a
//! rejected mutation.

use thiserror::Error;

/// Geometry configuration error type
///
/// Represents malformed or insufficient curve parameters. These are always
/// recovered locally: the geometry kernel substitutes a fallback solid and
/// reports the error as a warning rather than propagating it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Not enough control points for the requested curve
    #[error("{curve} curve needs at least {required} control points, got {actual}")]
    TooFewControlPoints {
        /// The curve kind being built.
        curve: String,
        /// The minimum number of control points required.
        required: usize,
        /// The number of control points supplied.
        actual: usize,
    },

    /// A length parameter that must be positive was not
    #[error("{parameter} must be positive, got {value}")]
    NonPositiveParameter {
        /// The parameter name.
        parameter: String,
        /// The offending value.
        value: f64,
    },

    /// Start and end angles describe an empty sweep
    #[error("arc sweep from {start_angle} to {end_angle} is degenerate")]
    DegenerateSweep {
        /// The start angle in radians.
        start_angle: f64,
        /// The end angle in radians.
        end_angle: f64,
    },

    /// The sampled path collapsed to a point
    #[error("curve path is degenerate: {reason}")]
    DegeneratePath {
        /// Why the path could not be swept.
        reason: String,
    },
}

/// Catalog error type
///
/// Represents failed lookups against the injected module or certified
/// material catalogs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Module id not present in the module library
    #[error("Unknown module id: {module_id}")]
    UnknownModule {
        /// The module id that was not found.
        module_id: String,
    },

    /// Certified material id not present in the materials library
    #[error("Unknown certified material: {material_id}")]
    UnknownMaterial {
        /// The material id that was not found.
        material_id: String,
    },

    /// A catalog entry carries invalid data
    #[error("Invalid catalog entry {entry_id}: {reason}")]
    InvalidEntry {
        /// The id of the invalid entry.
        entry_id: String,
        /// Why the entry is invalid.
        reason: String,
    },
}

/// Scene error type
///
/// Represents configurations that violate the stand invariants. Raised when
/// loading or validating a whole configuration, never by single-instance
/// mutations (those degrade to no-ops instead).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Footprint dimensions must be positive
    #[error("Stand footprint {width}x{depth} m is not positive")]
    InvalidFootprint {
        /// Footprint width in meters.
        width: f64,
        /// Footprint depth in meters.
        depth: f64,
    },

    /// Two placed modules share an instance id
    #[error("Duplicate instance id {instance_id} in configuration")]
    DuplicateInstanceId {
        /// The duplicated id, rendered as a string.
        instance_id: String,
    },

    /// A placed module references a module id missing from the catalog
    #[error("Placed module {instance_id} references unknown module {module_id}")]
    UnresolvedModule {
        /// The placed instance id, rendered as a string.
        instance_id: String,
        /// The unknown module id.
        module_id: String,
    },
}

/// Layout generation error type
///
/// Represents failures of the layout generation collaborator (AI or
/// template based). The scene is left untouched when generation fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The generator produced no candidate configurations
    #[error("Layout generation returned no candidates")]
    NoCandidates,

    /// A candidate failed catalog validation
    #[error("Candidate layout rejected: {reason}")]
    InvalidCandidate {
        /// Why the candidate was rejected.
        reason: String,
    },

    /// The external generation service failed
    #[error("Layout generation failed: {reason}")]
    ServiceFailure {
        /// A human-readable failure reason.
        reason: String,
    },

    /// The request parameters are unusable
    #[error("Invalid layout request: {reason}")]
    InvalidRequest {
        /// Why the request is invalid.
        reason: String,
    },
}

/// Asset resolution error type
///
/// Represents failures of the external asset-location collaborator.
/// Callers degrade to placeholder geometry rather than blocking editing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// No 3D model registered for the module
    #[error("No model asset for module {module_id}")]
    ModelNotFound {
        /// The module id without a model asset.
        module_id: String,
    },

    /// No texture registered for the material
    #[error("No texture asset for material {material_id}")]
    TextureNotFound {
        /// The material id without a texture asset.
        material_id: String,
    },

    /// The asset service could not be reached
    #[error("Asset resolution failed: {reason}")]
    ResolutionFailed {
        /// A human-readable failure reason.
        reason: String,
    },
}

/// Main error type for StandKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry configuration error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Catalog lookup error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Scene configuration error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Layout generation error
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Asset resolution error
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry configuration error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is a catalog lookup error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }

    /// Check if this is a scene configuration error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }

    /// Check if this error came from an external collaborator
    pub fn is_collaborator_error(&self) -> bool {
        matches!(self, Error::Generation(_) | Error::Asset(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
