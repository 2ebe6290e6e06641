//! Collision and snap engine integration tests against catalog modules.

use standkit_core::{Dimensions, ModuleLibrary, PlacedModule, StandConfiguration, Vec3};
use standkit_designer::{
    can_stack, check_placement, distance, find_nearest_snap_point, overlaps, snap_to_grid,
    DEFAULT_MARGIN,
};

fn placed(catalog: &ModuleLibrary, id: &str, position: Vec3) -> PlacedModule {
    let mut placed = PlacedModule::from_base(catalog.get(id).unwrap(), Vec3::ZERO);
    placed.position = position;
    placed
}

#[test]
fn two_half_metre_modules_at_point_four_overlap() {
    // 0.5 x 0.5 m footprints at (0,0,0) and (0.4,0,0) sit closer than
    // their combined half-widths, so a 0.01 m margin still reports a hit.
    let dims = Dimensions::new(0.5, 0.75, 0.5);
    assert!(overlaps(
        Vec3::ZERO,
        &dims,
        Vec3::new(0.4, 0.0, 0.0),
        &dims,
        0.01,
    ));
}

#[test]
fn disjoint_footprints_never_overlap() {
    let dims = Dimensions::new(0.5, 0.75, 0.5);
    assert!(!overlaps(
        Vec3::ZERO,
        &dims,
        Vec3::new(0.51, 0.0, 0.0),
        &dims,
        0.0,
    ));
}

#[test]
fn placement_report_flags_overlaps_and_bounds() {
    let catalog = ModuleLibrary::standard();
    let mut config = StandConfiguration::new("report", 6.0, 4.0);
    let a = placed(&catalog, "furniture-001", Vec3::ZERO);
    let b = placed(&catalog, "furniture-001", Vec3::new(0.4, 0.0, 0.0));
    let outside = placed(&catalog, "furniture-002", Vec3::new(10.0, 0.0, 0.0));
    let a_id = a.instance_id;
    let b_id = b.instance_id;
    let outside_id = outside.instance_id;
    config.modules.extend([a, b, outside]);

    let report = check_placement(&config, DEFAULT_MARGIN);
    assert!(!report.is_clean());
    assert_eq!(report.overlaps.len(), 1);
    assert_eq!(report.overlaps[0].first, a_id);
    assert_eq!(report.overlaps[0].second, b_id);
    assert_eq!(report.out_of_bounds.to_vec(), vec![outside_id]);
}

#[test]
fn clean_configuration_reports_nothing() {
    let catalog = ModuleLibrary::standard();
    let mut config = StandConfiguration::new("clean", 8.0, 6.0);
    config.modules.push(placed(&catalog, "furniture-002", Vec3::new(-2.0, 0.0, 0.0)));
    config.modules.push(placed(&catalog, "furniture-002", Vec3::new(2.0, 0.0, 0.0)));

    assert!(check_placement(&config, DEFAULT_MARGIN).is_clean());
}

#[test]
fn floating_modules_are_reported_unsupported() {
    let catalog = ModuleLibrary::standard();
    let mut config = StandConfiguration::new("levels", 8.0, 6.0);
    let platform = placed(&catalog, "level-001", Vec3::new(-2.0, 0.0, 0.0));
    // Stool on the platform top is supported; the same stool floating in
    // the far corner is not. Hung lighting is never flagged.
    let on_platform = placed(&catalog, "furniture-003", Vec3::new(-2.0, 1.0, 0.0));
    let floating = placed(&catalog, "furniture-003", Vec3::new(3.0, 1.5, 2.0));
    let lamp = placed(&catalog, "lighting-001", Vec3::new(0.0, 2.5, 0.0));
    let floating_id = floating.instance_id;
    config.modules.extend([platform, on_platform, floating, lamp]);

    let report = check_placement(&config, DEFAULT_MARGIN);
    assert_eq!(report.unsupported.to_vec(), vec![floating_id]);
}

#[test]
fn podium_stacks_on_platform_but_not_conversely() {
    let catalog = ModuleLibrary::standard();
    let platform = placed(&catalog, "level-001", Vec3::ZERO);
    let podium = placed(&catalog, "level-005", Vec3::new(0.5, 1.0, 0.5));

    assert!(can_stack(&podium, &platform));
    assert!(!can_stack(&platform, &podium));
}

#[test]
fn scaled_candidate_can_outgrow_its_target() {
    let catalog = ModuleLibrary::standard();
    let platform = placed(&catalog, "level-001", Vec3::ZERO);
    let mut podium = placed(&catalog, "level-005", Vec3::ZERO);
    podium.scale = Vec3::new(4.0, 1.0, 4.0);

    assert!(!can_stack(&podium, &platform));
}

#[test]
fn grid_snapping_rounds_to_half_metre_grid() {
    let snapped = snap_to_grid(Vec3::new(2.3, 0.0, -1.8), 0.5, true);
    assert_eq!(snapped, Vec3::new(2.5, 0.0, -2.0));
    // Idempotent.
    assert_eq!(snap_to_grid(snapped, 0.5, true), snapped);
}

#[test]
fn planar_distance_ignores_height() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(3.0, 5.0, 4.0);
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
}

#[test]
fn wall_ends_snap_adjacent_panels() {
    let catalog = ModuleLibrary::standard();
    let wall = placed(&catalog, "wall-001", Vec3::new(0.0, 0.0, -2.0));
    let modules = vec![wall.clone()];

    // Dragging a second panel near the right wall end.
    let hit = find_nearest_snap_point(Vec3::new(1.3, 0.0, -1.9), &modules, 0.5).unwrap();
    assert_eq!(hit.owner, wall.instance_id);
    assert_eq!(hit.position, Vec3::new(1.0, 0.0, -2.0));

    // Beyond the threshold nothing snaps.
    assert!(find_nearest_snap_point(Vec3::new(1.8, 0.0, -1.0), &modules, 0.5).is_none());
}
