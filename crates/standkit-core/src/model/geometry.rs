//! Shared geometric value types.
//!
//! All coordinates are meters. Y is the vertical axis; the stand floor is
//! the X/Z plane.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A position or offset in stand space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The origin / zero offset.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector from components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// A partially specified offset; omitted axes default to zero.
///
/// Used by move operations so callers can shift a single axis without
/// restating the others.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialVec3 {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub z: Option<f64>,
}

impl PartialVec3 {
    /// Resolves the partial offset against zero.
    pub fn resolve(&self) -> Vec3 {
        Vec3::new(
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.z.unwrap_or(0.0),
        )
    }
}

impl From<Vec3> for PartialVec3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }
}

/// Nominal extents of a module, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along X.
    pub width: f64,
    /// Extent along Y (vertical).
    pub height: f64,
    /// Extent along Z.
    pub depth: f64,
}

impl Dimensions {
    /// Creates dimensions from width, height, and depth.
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Applies a per-axis scale factor.
    pub fn scaled(&self, scale: Vec3) -> Dimensions {
        Dimensions::new(
            self.width * scale.x,
            self.height * scale.y,
            self.depth * scale.z,
        )
    }

    /// Horizontal footprint area (width x depth), in square meters.
    pub fn footprint_area(&self) -> f64 {
        self.width * self.depth
    }

    /// Vertical face area (width x height), in square meters.
    pub fn face_area(&self) -> f64 {
        self.width * self.height
    }

    /// True if every extent is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.depth > 0.0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}x{:.2}x{:.2} m",
            self.width, self.height, self.depth
        )
    }
}

/// The rectangular floor plan of a stand, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub width: f64,
    pub depth: f64,
}

impl FloorPlan {
    /// Creates a floor plan from width and depth.
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    /// True if both extents are strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.depth > 0.0
    }

    /// Floor area in square meters.
    pub fn area(&self) -> f64 {
        self.width * self.depth
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            width: 6.0,
            depth: 4.0,
        }
    }
}

/// A rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
