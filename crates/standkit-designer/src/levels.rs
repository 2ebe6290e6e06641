//! # Level / Support Subsystem
//!
//! Placement rules for multi-level structures: platforms, mezzanines,
//! podiums, stairs, and ramps. Modules resting above the floor are only
//! considered supported when both the height and the horizontal footprint
//! check out; height alone never implies support.

use smallvec::SmallVec;

use standkit_core::{Dimensions, SnapPointKind, StairSide, Vec3};

/// Vertical tolerance for "resting on the platform top", in meters.
pub const SUPPORT_TOLERANCE: f64 = 0.1;

/// A named anchor on a platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformAnchor {
    /// Absolute anchor position.
    pub position: Vec3,
    /// What the anchor is for.
    pub kind: SnapPointKind,
    /// The edge this anchor sits on, for stair attachment anchors.
    pub side: Option<StairSide>,
}

/// The fixed anchor set of a platform: one point on the top surface for
/// placing objects above it, and one stair-attachment point per edge.
pub fn platform_snap_points(
    position: Vec3,
    dims: &Dimensions,
) -> SmallVec<[PlatformAnchor; 5]> {
    let top_y = position.y + dims.height;
    let half_w = dims.width / 2.0;
    let half_d = dims.depth / 2.0;

    let mut anchors = SmallVec::new();
    anchors.push(PlatformAnchor {
        position: Vec3::new(position.x, top_y, position.z),
        kind: SnapPointKind::Surface,
        side: None,
    });
    for (side, dx, dz) in [
        (StairSide::Front, 0.0, half_d),
        (StairSide::Back, 0.0, -half_d),
        (StairSide::Left, -half_w, 0.0),
        (StairSide::Right, half_w, 0.0),
    ] {
        anchors.push(PlatformAnchor {
            position: Vec3::new(position.x + dx, position.y, position.z + dz),
            kind: SnapPointKind::StairAttachment,
            side: Some(side),
        });
    }
    anchors
}

/// Computes a stair position attached to a platform edge.
///
/// The stair is pushed outward from the chosen edge by half the platform
/// extent plus half the stair's own depth, staying aligned with the
/// platform on the other horizontal axis and sitting on the floor.
pub fn stair_placement(
    platform_pos: Vec3,
    platform_dims: &Dimensions,
    stair_dims: &Dimensions,
    side: StairSide,
) -> Vec3 {
    let half_platform_w = platform_dims.width / 2.0;
    let half_platform_d = platform_dims.depth / 2.0;
    let half_stair_d = stair_dims.depth / 2.0;

    match side {
        StairSide::Front => Vec3::new(
            platform_pos.x,
            0.0,
            platform_pos.z + half_platform_d + half_stair_d,
        ),
        StairSide::Back => Vec3::new(
            platform_pos.x,
            0.0,
            platform_pos.z - half_platform_d - half_stair_d,
        ),
        StairSide::Left => Vec3::new(
            platform_pos.x - half_platform_w - half_stair_d,
            0.0,
            platform_pos.z,
        ),
        StairSide::Right => Vec3::new(
            platform_pos.x + half_platform_w + half_stair_d,
            0.0,
            platform_pos.z,
        ),
    }
}

/// True iff a module rests on a platform's top surface.
///
/// Requires both: the module's y within `SUPPORT_TOLERANCE` of the
/// platform top, and the module's horizontal footprint fully contained in
/// the platform's footprint (all four edges inside, not merely
/// overlapping).
pub fn can_place_on_platform(
    module_pos: Vec3,
    module_dims: &Dimensions,
    platform_pos: Vec3,
    platform_dims: &Dimensions,
) -> bool {
    let platform_top = platform_pos.y + platform_dims.height;
    if (module_pos.y - platform_top).abs() > SUPPORT_TOLERANCE {
        return false;
    }

    let half_mw = module_dims.width / 2.0;
    let half_md = module_dims.depth / 2.0;
    let half_pw = platform_dims.width / 2.0;
    let half_pd = platform_dims.depth / 2.0;

    module_pos.x - half_mw >= platform_pos.x - half_pw
        && module_pos.x + half_mw <= platform_pos.x + half_pw
        && module_pos.z - half_md >= platform_pos.z - half_pd
        && module_pos.z + half_md <= platform_pos.z + half_pd
}
