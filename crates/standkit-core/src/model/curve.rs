//! Declarative curve configurations for non-box module geometry.
//!
//! A curve configuration is attached to a `ModuleBase` and consumed once per
//! geometry build. The variants carry only the parameters relevant to their
//! curve kind; missing values fall back to the documented defaults.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use super::geometry::Vec3;

/// Default curve radius in meters.
fn default_radius() -> f64 {
    3.0
}

/// Default wall height for extruded curves, in meters.
fn default_extrude_height() -> f64 {
    2.5
}

/// Default wall thickness for extruded curves, in meters.
fn default_extrude_depth() -> f64 {
    0.1
}

/// Default curve sampling resolution.
fn default_segments() -> usize {
    64
}

fn default_start_angle() -> f64 {
    0.0
}

fn default_end_angle() -> f64 {
    PI
}

fn default_arc_radial_segments() -> usize {
    8
}

fn default_tube_radius() -> f64 {
    0.05
}

fn default_tubular_segments() -> usize {
    64
}

fn default_spline_radial_segments() -> usize {
    16
}

/// Arc wall or arc tube parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcConfig {
    /// Arc radius in meters.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Start angle in radians.
    #[serde(default = "default_start_angle")]
    pub start_angle: f64,
    /// End angle in radians.
    #[serde(default = "default_end_angle")]
    pub end_angle: f64,
    /// Wall height when extruded, in meters.
    #[serde(default = "default_extrude_height")]
    pub extrude_height: f64,
    /// Wall thickness when extruded, in meters.
    #[serde(default = "default_extrude_depth")]
    pub extrude_depth: f64,
    /// Number of samples along the arc.
    #[serde(default = "default_segments")]
    pub segments: usize,
    /// When set, the arc is swept as an open tube of this radius
    /// instead of an extruded wall.
    #[serde(default)]
    pub tube_radius: Option<f64>,
    /// Cross-section segment count for the tube form.
    #[serde(default = "default_arc_radial_segments")]
    pub radial_segments: usize,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            start_angle: default_start_angle(),
            end_angle: default_end_angle(),
            extrude_height: default_extrude_height(),
            extrude_depth: default_extrude_depth(),
            segments: default_segments(),
            tube_radius: None,
            radial_segments: default_arc_radial_segments(),
        }
    }
}

/// Bezier wall parameters. Control points are projected onto the
/// horizontal plane; 3 points give a quadratic curve, 4 a cubic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierConfig {
    /// Control points (at least 3).
    pub control_points: Vec<Vec3>,
    /// Wall height, in meters.
    #[serde(default = "default_extrude_height")]
    pub extrude_height: f64,
    /// Wall thickness, in meters.
    #[serde(default = "default_extrude_depth")]
    pub extrude_depth: f64,
    /// Number of samples along the curve.
    #[serde(default = "default_segments")]
    pub segments: usize,
}

/// Closed circular wall (annulus shell) parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularConfig {
    /// Outer radius in meters; the inner radius is `radius - extrude_depth`.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Shell height, in meters.
    #[serde(default = "default_extrude_height")]
    pub extrude_height: f64,
    /// Shell thickness, in meters.
    #[serde(default = "default_extrude_depth")]
    pub extrude_depth: f64,
    /// Number of samples around the circle.
    #[serde(default = "default_segments")]
    pub segments: usize,
}

impl Default for CircularConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            extrude_height: default_extrude_height(),
            extrude_depth: default_extrude_depth(),
            segments: default_segments(),
        }
    }
}

/// Smooth interpolating tube parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineConfig {
    /// Interpolation points (at least 2), in 3D.
    pub control_points: Vec<Vec3>,
    /// Tube radius in meters.
    #[serde(default = "default_tube_radius")]
    pub tube_radius: f64,
    /// Number of samples along the tube.
    #[serde(default = "default_tubular_segments")]
    pub tubular_segments: usize,
    /// Cross-section segment count.
    #[serde(default = "default_spline_radial_segments")]
    pub radial_segments: usize,
    /// Loops the tube back to its start when set.
    #[serde(default)]
    pub closed: bool,
}

/// Declarative description of a module's non-box geometry,
/// discriminated by curve kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CurveConfig {
    /// Circular arc, extruded wall or swept tube.
    Arc(ArcConfig),
    /// Quadratic or cubic bezier wall.
    Bezier(BezierConfig),
    /// Closed circular shell.
    Circular(CircularConfig),
    /// Interpolating spline tube.
    Spline(SplineConfig),
}

/// The curve kind, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Arc,
    Bezier,
    Circular,
    Spline,
}

impl CurveConfig {
    /// Returns the kind tag of this configuration.
    pub fn kind(&self) -> CurveKind {
        match self {
            CurveConfig::Arc(_) => CurveKind::Arc,
            CurveConfig::Bezier(_) => CurveKind::Bezier,
            CurveConfig::Circular(_) => CurveKind::Circular,
            CurveConfig::Spline(_) => CurveKind::Spline,
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Arc => write!(f, "arc"),
            CurveKind::Bezier => write!(f, "bezier"),
            CurveKind::Circular => write!(f, "circular"),
            CurveKind::Spline => write!(f, "spline"),
        }
    }
}
