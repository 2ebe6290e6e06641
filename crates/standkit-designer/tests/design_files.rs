//! Design file save/load round-trips.

use std::sync::Arc;

use standkit_core::{Axis, EventBus, ModuleLibrary, PartialVec3, Vec3};
use standkit_designer::{DesignFile, SceneStore};

fn store() -> SceneStore {
    SceneStore::new(
        Arc::new(ModuleLibrary::standard()),
        Arc::new(EventBus::new()),
    )
}

#[test]
fn design_survives_a_file_round_trip() {
    let mut store = store();
    let wall = store
        .add_from_catalog("wall-001", Vec3::new(0.0, 0.0, -2.0))
        .unwrap();
    let counter = store
        .add_from_catalog("furniture-001", Vec3::new(-1.0, 0.0, 1.5))
        .unwrap();
    store.rotate_module(wall, Axis::Y, 90.0);
    store.scale_module(counter, 1.2);
    store.change_module_color(wall, "#aabbcc");
    store.set_locked(counter, true);

    let exported = store.export_configuration();
    let file = DesignFile::from_configuration(&exported);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stand.skd");
    file.save_to_file(&path).unwrap();

    let loaded = DesignFile::load_from_file(&path).unwrap();
    let catalog = ModuleLibrary::standard();
    let rehydrated = loaded.to_configuration(&catalog).unwrap();

    assert_eq!(rehydrated.floor_plan, exported.floor_plan);
    assert_eq!(rehydrated.module_count(), 2);

    let wall_back = rehydrated.find(wall).unwrap();
    assert!((wall_back.rotation.y - 90.0_f64.to_radians()).abs() < 1e-12);
    assert_eq!(wall_back.material.color, "#aabbcc");

    let counter_back = rehydrated.find(counter).unwrap();
    assert_eq!(counter_back.scale, Vec3::new(1.2, 1.2, 1.2));
    assert!(counter_back.locked);
}

#[test]
fn loaded_file_feeds_back_into_a_store() {
    let mut store = store();
    let id = store
        .add_from_catalog("furniture-002", Vec3::new(1.0, 0.0, 0.0))
        .unwrap();
    store.move_module(id, PartialVec3::from(Vec3::new(0.0, 0.0, 1.0)));

    let file = DesignFile::from_configuration(&store.export_configuration());
    let rehydrated = file.to_configuration(store.catalog()).unwrap();

    let mut second = SceneStore::new(
        Arc::new(ModuleLibrary::standard()),
        Arc::new(EventBus::new()),
    );
    second.load_configuration(rehydrated).unwrap();
    assert_eq!(
        second.configuration().find(id).unwrap().position,
        Vec3::new(1.0, 0.0, 1.0)
    );
}

#[test]
fn corrupted_files_error_instead_of_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.skd");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(DesignFile::load_from_file(&path).is_err());
}
