//! Level subsystem integration tests: platforms, stairs, and support.

use standkit_core::{ModuleLibrary, SnapPointKind, StairSide, Vec3};
use standkit_designer::{
    can_place_on_platform, platform_snap_points, stair_placement, SUPPORT_TOLERANCE,
};

#[test]
fn catalog_platform_and_stair_compose_at_the_front_edge() {
    // A 3x3 platform (level-001, height 1.0) at the origin with a stair
    // (level-002) attached on the front side lands at
    // x = 0, z = 1.5 + 0.75 = 2.25, y = 0.
    let catalog = ModuleLibrary::standard();
    let platform = catalog.get("level-001").unwrap();
    let stair = catalog.get("level-002").unwrap();

    let pos = stair_placement(
        Vec3::ZERO,
        &platform.dimensions,
        &stair.dimensions,
        StairSide::Front,
    );
    assert_eq!(pos, Vec3::new(0.0, 0.0, 2.25));
}

#[test]
fn every_side_offsets_along_its_axis() {
    let catalog = ModuleLibrary::standard();
    let platform = catalog.get("level-001").unwrap();
    let stair = catalog.get("level-002").unwrap();
    let origin = Vec3::new(2.0, 0.0, -1.0);

    let back = stair_placement(origin, &platform.dimensions, &stair.dimensions, StairSide::Back);
    assert_eq!(back, Vec3::new(2.0, 0.0, -1.0 - 2.25));

    let right = stair_placement(origin, &platform.dimensions, &stair.dimensions, StairSide::Right);
    assert_eq!(right, Vec3::new(2.0 + 1.5 + 0.75, 0.0, -1.0));
}

#[test]
fn platform_anchors_follow_the_platform_position() {
    let catalog = ModuleLibrary::standard();
    let platform = catalog.get("level-003").unwrap();
    let position = Vec3::new(1.0, 0.0, 1.0);

    let anchors = platform_snap_points(position, &platform.dimensions);
    assert_eq!(anchors.len(), 5);
    // Mezzanine top surface sits at its structural height.
    assert_eq!(anchors[0].position, Vec3::new(1.0, 2.2, 1.0));
    assert_eq!(anchors[0].kind, SnapPointKind::Surface);

    let front = anchors
        .iter()
        .find(|a| a.side == Some(StairSide::Front))
        .unwrap();
    assert_eq!(front.position, Vec3::new(1.0, 0.0, 1.0 + 1.5));
}

#[test]
fn support_check_rejects_height_mismatch_regardless_of_footprint() {
    let catalog = ModuleLibrary::standard();
    let platform = catalog.get("level-001").unwrap();
    let stool = catalog.get("furniture-003").unwrap();

    // Platform top at y = 1.0; module floating at y = 1.2 is unsupported
    // even dead-center on the platform.
    assert!(!can_place_on_platform(
        Vec3::new(0.0, 1.2, 0.0),
        &stool.dimensions,
        Vec3::ZERO,
        &platform.dimensions,
    ));
}

#[test]
fn support_check_rejects_partial_overhang() {
    let catalog = ModuleLibrary::standard();
    let platform = catalog.get("level-001").unwrap();
    let table = catalog.get("furniture-002").unwrap();

    // Table centered 1.4 m out: half the footprint hangs off the 1.5 m
    // half-width. Overlap is not containment.
    assert!(!can_place_on_platform(
        Vec3::new(1.4, 1.0, 0.0),
        &table.dimensions,
        Vec3::ZERO,
        &platform.dimensions,
    ));

    assert!(can_place_on_platform(
        Vec3::new(1.0, 1.0, 0.0),
        &table.dimensions,
        Vec3::ZERO,
        &platform.dimensions,
    ));
}

#[test]
fn support_tolerance_bounds_the_resting_band() {
    let catalog = ModuleLibrary::standard();
    let platform = catalog.get("level-001").unwrap();
    let stool = catalog.get("furniture-003").unwrap();

    for dy in [-SUPPORT_TOLERANCE, 0.0, SUPPORT_TOLERANCE] {
        assert!(can_place_on_platform(
            Vec3::new(0.0, 1.0 + dy, 0.0),
            &stool.dimensions,
            Vec3::ZERO,
            &platform.dimensions,
        ));
    }
}
