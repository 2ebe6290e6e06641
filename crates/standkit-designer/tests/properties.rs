//! Property-based tests for the placement engine and BOM aggregation.

use proptest::prelude::*;

use standkit_core::{
    CertifiedMaterialLibrary, Dimensions, ModuleLibrary, PlacedModule, StandConfiguration, Vec3,
};
use standkit_designer::{aggregate, overlaps, snap_to_grid};

fn position() -> impl Strategy<Value = Vec3> {
    (-10.0..10.0f64, 0.0..3.0f64, -10.0..10.0f64).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn footprint() -> impl Strategy<Value = Dimensions> {
    (0.1..5.0f64, 0.1..3.0f64, 0.1..5.0f64)
        .prop_map(|(w, h, d)| Dimensions::new(w, h, d))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(
        pos_a in position(),
        dims_a in footprint(),
        pos_b in position(),
        dims_b in footprint(),
        margin in 0.0..0.05f64,
    ) {
        prop_assert_eq!(
            overlaps(pos_a, &dims_a, pos_b, &dims_b, margin),
            overlaps(pos_b, &dims_b, pos_a, &dims_a, margin)
        );
    }

    #[test]
    fn identical_plan_positions_always_overlap(
        pos in position(),
        dims_a in footprint(),
        dims_b in footprint(),
        dy in 0.0..3.0f64,
        margin in 0.0..0.05f64,
    ) {
        // Identical (x, z); height differences are out of the check.
        let raised = Vec3::new(pos.x, pos.y + dy, pos.z);
        prop_assert!(overlaps(pos, &dims_a, raised, &dims_b, margin));
    }

    #[test]
    fn disjoint_footprints_never_overlap(
        pos in position(),
        dims_a in footprint(),
        dims_b in footprint(),
        gap in 0.001..2.0f64,
        margin in 0.0..0.05f64,
    ) {
        // Separate along x beyond the combined half-widths.
        let other = Vec3::new(
            pos.x + (dims_a.width + dims_b.width) / 2.0 + gap,
            pos.y,
            pos.z,
        );
        prop_assert!(!overlaps(pos, &dims_a, other, &dims_b, margin));
    }

    #[test]
    fn grid_snapping_is_idempotent(
        pos in position(),
        grid in 0.05..2.0f64,
    ) {
        let once = snap_to_grid(pos, grid, true);
        let twice = snap_to_grid(once, grid, true);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn grid_snapping_preserves_height(
        pos in position(),
        grid in 0.05..2.0f64,
        enabled in any::<bool>(),
    ) {
        let snapped = snap_to_grid(pos, grid, enabled);
        prop_assert_eq!(snapped.y, pos.y);
    }

    #[test]
    fn bom_totals_are_order_independent(
        order in Just((0..12usize).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let catalog = ModuleLibrary::standard();
        let materials = CertifiedMaterialLibrary::standard();
        let ids = [
            "wall-001", "wall-002", "furniture-001", "furniture-002",
            "level-001", "level-002", "lighting-001", "multimedia-001",
            "plv-001", "decoration-001", "flooring-001", "furniture-003",
        ];

        let mut baseline = StandConfiguration::new("props", 12.0, 10.0);
        for (i, id) in ids.iter().enumerate() {
            let mut placed = PlacedModule::from_base(catalog.get(id).unwrap(), Vec3::ZERO);
            placed.position = Vec3::new(i as f64, 0.0, 0.0);
            baseline.modules.push(placed);
        }

        let mut shuffled = baseline.clone();
        shuffled.modules = order
            .iter()
            .map(|&i| baseline.modules[i].clone())
            .collect();

        prop_assert_eq!(
            aggregate(&baseline, &materials),
            aggregate(&shuffled, &materials)
        );
    }

    #[test]
    fn duplication_always_yields_fresh_unique_ids(copies in 1..8usize) {
        use standkit_core::EventBus;
        use standkit_designer::SceneStore;
        use std::sync::Arc;

        let mut store = SceneStore::new(
            Arc::new(ModuleLibrary::standard()),
            Arc::new(EventBus::new()),
        );
        let mut last = store
            .add_from_catalog("furniture-002", Vec3::ZERO)
            .expect("catalog module");

        for _ in 0..copies {
            let before = store.configuration().module_count();
            last = store.duplicate_module(last).expect("duplicate");
            prop_assert_eq!(store.configuration().module_count(), before + 1);
        }

        let mut ids: Vec<_> = store
            .configuration()
            .modules
            .iter()
            .map(|m| m.instance_id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}
