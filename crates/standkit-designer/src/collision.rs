//! # Collision & Snap Engine
//!
//! Advisory spatial checks for interactive placement: footprint overlap,
//! stacking eligibility, grid snapping, and snap-point discovery.
//!
//! All checks are data, not gates. The scene store never refuses a
//! mutation because of a detected overlap; the UI decides what to do with
//! the report. Overlap between stacked modules at different heights is
//! intentionally surfaced too (see `overlaps`).

use smallvec::SmallVec;
use uuid::Uuid;

use standkit_core::{
    Dimensions, ModuleCategory, PlacedModule, SnapPointKind, StandConfiguration, Vec3,
};

use crate::levels::{can_place_on_platform, SUPPORT_TOLERANCE};

/// Default overlap tolerance, in meters.
pub const DEFAULT_MARGIN: f64 = 0.01;

/// Default snap-point search radius, in meters.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 0.5;

/// True iff the horizontal (x, z) projections of two axis-aligned
/// footprints intersect by more than `margin` on both axes.
///
/// Only width and depth take part; vertical separation is handled by the
/// level subsystem, so two modules at different heights still report an
/// overlap here. That matches the flat-floor-plan editing model, though it
/// arguably under-reports legitimate stacking — callers that stack use
/// `can_stack`/`can_place_on_platform` to qualify the report.
pub fn overlaps(
    pos_a: Vec3,
    dims_a: &Dimensions,
    pos_b: Vec3,
    dims_b: &Dimensions,
    margin: f64,
) -> bool {
    let dx = (pos_a.x - pos_b.x).abs();
    let dz = (pos_a.z - pos_b.z).abs();
    let limit_x = (dims_a.width + dims_b.width) / 2.0 - margin;
    let limit_z = (dims_a.depth + dims_b.depth) / 2.0 - margin;
    dx < limit_x && dz < limit_z
}

/// True iff `candidate` may rest on `target`: the target is stackable and
/// the candidate's footprint fits within the target's in both dimensions.
pub fn can_stack(candidate: &PlacedModule, target: &PlacedModule) -> bool {
    if !target.module.stackable {
        return false;
    }
    let (cw, cd) = candidate.footprint();
    let (tw, td) = target.footprint();
    cw <= tw && cd <= td
}

/// Rounds x and z to the nearest multiple of `grid_size` when enabled;
/// y is left untouched. Identity when disabled or for a non-positive grid.
pub fn snap_to_grid(position: Vec3, grid_size: f64, enabled: bool) -> Vec3 {
    if !enabled || grid_size <= 0.0 {
        return position;
    }
    Vec3::new(
        (position.x / grid_size).round() * grid_size,
        position.y,
        (position.z / grid_size).round() * grid_size,
    )
}

/// Planar Euclidean distance between two positions (x, z only).
pub fn distance(pos_a: Vec3, pos_b: Vec3) -> f64 {
    (pos_a.x - pos_b.x).hypot(pos_a.z - pos_b.z)
}

/// A snap point resolved to stand coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapHit {
    /// Absolute snap position.
    pub position: Vec3,
    /// What the point anchors.
    pub kind: SnapPointKind,
    /// The module instance declaring the point.
    pub owner: Uuid,
    /// Planar distance from the query position.
    pub distance: f64,
}

/// Finds the closest declared snap point within `threshold` of `position`.
///
/// Every module's relative snap points are converted to absolute positions
/// (module position + offset). On an exact distance tie the
/// first-encountered point wins, which is deterministic for a fixed module
/// order.
pub fn find_nearest_snap_point(
    position: Vec3,
    modules: &[PlacedModule],
    threshold: f64,
) -> Option<SnapHit> {
    let mut best: Option<SnapHit> = None;
    for placed in modules {
        for snap in &placed.module.snap_points {
            let absolute = placed.position + snap.offset;
            let dist = distance(position, absolute);
            if dist > threshold {
                continue;
            }
            let closer = match &best {
                Some(hit) => dist < hit.distance,
                None => true,
            };
            if closer {
                best = Some(SnapHit {
                    position: absolute,
                    kind: snap.kind,
                    owner: placed.instance_id,
                    distance: dist,
                });
            }
        }
    }
    best
}

/// An advisory overlap between two placed instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapPair {
    pub first: Uuid,
    pub second: Uuid,
}

/// Advisory placement findings for a whole configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementReport {
    /// Instance pairs whose footprints overlap beyond the margin.
    pub overlaps: Vec<OverlapPair>,
    /// Instances whose footprint leaves the stand floor plan.
    pub out_of_bounds: SmallVec<[Uuid; 4]>,
    /// Above-floor instances resting on no platform or stackable surface.
    pub unsupported: SmallVec<[Uuid; 4]>,
}

impl PlacementReport {
    /// True if nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty() && self.out_of_bounds.is_empty() && self.unsupported.is_empty()
    }
}

/// Scans a configuration for overlapping pairs, out-of-bounds modules,
/// and above-floor modules with nothing under them.
///
/// The stand floor plan is centered on the origin. Findings are advisory;
/// nothing here mutates the configuration.
pub fn check_placement(configuration: &StandConfiguration, margin: f64) -> PlacementReport {
    let mut report = PlacementReport::default();
    let modules = &configuration.modules;

    for (i, a) in modules.iter().enumerate() {
        let dims_a = a.effective_dimensions();

        for b in &modules[i + 1..] {
            let dims_b = b.effective_dimensions();
            if overlaps(a.position, &dims_a, b.position, &dims_b, margin) {
                report.overlaps.push(OverlapPair {
                    first: a.instance_id,
                    second: b.instance_id,
                });
            }
        }

        let (w, d) = a.footprint();
        let half_plan_w = configuration.floor_plan.width / 2.0;
        let half_plan_d = configuration.floor_plan.depth / 2.0;
        if a.position.x - w / 2.0 < -half_plan_w - margin
            || a.position.x + w / 2.0 > half_plan_w + margin
            || a.position.z - d / 2.0 < -half_plan_d - margin
            || a.position.z + d / 2.0 > half_plan_d + margin
        {
            report.out_of_bounds.push(a.instance_id);
        }

        // Suspended lighting hangs from the rig, not from a platform.
        if a.position.y > SUPPORT_TOLERANCE && a.module.category != ModuleCategory::Lighting {
            let supported = modules.iter().any(|b| {
                b.instance_id != a.instance_id
                    && (b.module.stackable || b.module.level.is_some())
                    && can_place_on_platform(
                        a.position,
                        &dims_a,
                        b.position,
                        &b.effective_dimensions(),
                    )
            });
            if !supported {
                report.unsupported.push(a.instance_id);
            }
        }
    }
    report
}
