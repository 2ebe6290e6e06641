//! Layout generation collaborator tests.

use std::sync::Arc;

use async_trait::async_trait;
use standkit_core::{
    EventBus, FloorPlan, GenerationError, LayoutGenerator, LayoutRequest, ModuleLibrary,
    PlacedModule, Result, StandConfiguration, Vec3,
};
use standkit_designer::{apply_generated_layout, SceneStore, TemplateLayoutGenerator};

fn store() -> SceneStore {
    SceneStore::new(
        Arc::new(ModuleLibrary::standard()),
        Arc::new(EventBus::new()),
    )
}

/// A generator standing in for a failing external AI service.
struct FailingGenerator;

#[async_trait]
impl LayoutGenerator for FailingGenerator {
    async fn generate(&self, _request: &LayoutRequest) -> Result<Vec<StandConfiguration>> {
        Err(GenerationError::ServiceFailure {
            reason: "model endpoint unreachable".to_string(),
        }
        .into())
    }
}

/// A generator returning a candidate with an off-catalog module.
struct RogueGenerator;

#[async_trait]
impl LayoutGenerator for RogueGenerator {
    async fn generate(&self, _request: &LayoutRequest) -> Result<Vec<StandConfiguration>> {
        let catalog = ModuleLibrary::standard();
        let mut base = catalog.get("wall-001").unwrap().clone();
        base.id = "wall-invented".to_string();
        let mut config = StandConfiguration::new("rogue", 6.0, 4.0);
        config.modules.push(PlacedModule::from_base(&base, Vec3::ZERO));
        Ok(vec![config])
    }
}

#[tokio::test]
async fn template_generator_populates_the_scene() {
    let mut store = store();
    let generator = TemplateLayoutGenerator::new(Arc::new(ModuleLibrary::standard()));
    let request = LayoutRequest {
        prompt: "open tech stand with a big screen".to_string(),
        floor_plan: Some(FloorPlan::new(6.0, 4.0)),
        requirements: vec!["screen".to_string()],
        ..LayoutRequest::default()
    };

    apply_generated_layout(&mut store, &generator, &request)
        .await
        .unwrap();

    assert!(store.configuration().module_count() > 5);
    assert!(store
        .configuration()
        .modules
        .iter()
        .any(|m| m.module.id == "multimedia-001"));
    // Loading a generated layout resets editing history.
    assert!(!store.can_undo());
}

#[tokio::test]
async fn failed_generation_leaves_the_scene_untouched() {
    let mut store = store();
    let before_id = store
        .add_from_catalog("furniture-002", Vec3::ZERO)
        .unwrap();
    let before = store.export_configuration();

    let err = apply_generated_layout(&mut store, &FailingGenerator, &LayoutRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_collaborator_error());
    assert_eq!(store.export_configuration(), before);
    assert!(store.configuration().contains(before_id));
}

#[tokio::test]
async fn off_catalog_candidates_are_rejected() {
    let mut store = store();
    let before = store.export_configuration();

    let err = apply_generated_layout(&mut store, &RogueGenerator, &LayoutRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_collaborator_error());
    assert_eq!(store.export_configuration(), before);
}

#[tokio::test]
async fn generation_outcomes_are_published() {
    let events = Arc::new(EventBus::new());
    let mut receiver = events.receiver();
    let mut store = SceneStore::new(Arc::new(ModuleLibrary::standard()), events);

    let generator = TemplateLayoutGenerator::new(Arc::new(ModuleLibrary::standard()));
    let request = LayoutRequest::from_prompt("minimal stand");
    apply_generated_layout(&mut store, &generator, &request)
        .await
        .unwrap();

    let mut descriptions = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        descriptions.push(event.description());
    }
    assert!(descriptions
        .iter()
        .any(|d| d.contains("Generation requested")));
    assert!(descriptions
        .iter()
        .any(|d| d.contains("Generation completed")));
}
