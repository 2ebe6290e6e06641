//! Structural metadata for multi-level modules.
//!
//! `LevelConfig` and `StairConfig` are declarative, read-only inputs to the
//! level subsystem's placement helpers. Load capacities are advisory values
//! from the catalog, not verified by simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The platform edge a stair attaches to.
///
/// Front/back offset the stair along Z, left/right along X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StairSide {
    Front,
    Back,
    Left,
    Right,
}

impl Default for StairSide {
    fn default() -> Self {
        Self::Front
    }
}

impl fmt::Display for StairSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StairSide::Front => write!(f, "front"),
            StairSide::Back => write!(f, "back"),
            StairSide::Left => write!(f, "left"),
            StairSide::Right => write!(f, "right"),
        }
    }
}

/// Structural metadata for a platform, mezzanine, podium, or ramp module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Walking-surface height above the module origin, in meters.
    pub height: f64,
    /// Whether the edges carry a railing.
    #[serde(default)]
    pub has_railing: bool,
    /// Whether a stair module should accompany this platform.
    #[serde(default)]
    pub has_stairs: bool,
    /// Preferred stair attachment edge.
    #[serde(default)]
    pub stair_side: StairSide,
    /// Advisory load capacity in kilograms.
    #[serde(default)]
    pub load_capacity_kg: f64,
}

/// Step geometry for a stair module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairConfig {
    /// Number of steps.
    pub step_count: u32,
    /// Rise per step, in meters.
    pub step_height: f64,
    /// Run per step, in meters.
    pub step_depth: f64,
    /// Whether the stair carries a handrail.
    #[serde(default)]
    pub has_handrail: bool,
}

impl StairConfig {
    /// Total rise of the stair, in meters.
    pub fn total_rise(&self) -> f64 {
        f64::from(self.step_count) * self.step_height
    }

    /// Total run of the stair, in meters.
    pub fn total_run(&self) -> f64 {
        f64::from(self.step_count) * self.step_depth
    }
}
