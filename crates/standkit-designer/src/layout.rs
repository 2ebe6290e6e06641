//! # Layout Generation
//!
//! Adapter around the `LayoutGenerator` collaborator: candidate
//! configurations coming back from an external (AI) service are validated
//! against the module catalog before they may replace the scene, and a
//! local template generator provides the starting layout when no external
//! generation is available.

use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use standkit_core::{
    DesignEvent, GenerationError, GenerationEvent, LayoutGenerator, LayoutRequest, ModuleLibrary,
    PlacedModule, Result, StairSide, StandConfiguration, Vec3,
};

use crate::levels::stair_placement;
use crate::scene::SceneStore;

/// Checks a candidate configuration against the stand invariants and the
/// module catalog.
///
/// # Errors
///
/// `GenerationError::InvalidCandidate` describing the first violation.
pub fn validate_candidate(
    candidate: &StandConfiguration,
    catalog: &ModuleLibrary,
) -> std::result::Result<(), GenerationError> {
    candidate
        .validate()
        .map_err(|err| GenerationError::InvalidCandidate {
            reason: err.to_string(),
        })?;
    for placed in &candidate.modules {
        if catalog.get(&placed.module.id).is_none() {
            return Err(GenerationError::InvalidCandidate {
                reason: format!("unknown module reference {}", placed.module.id),
            });
        }
    }
    Ok(())
}

/// Runs a generation request and loads the first valid candidate into the
/// scene store.
///
/// Generation outcomes are published on the store's event bus. On any
/// failure the scene is left exactly as it was.
pub async fn apply_generated_layout(
    store: &mut SceneStore,
    generator: &dyn LayoutGenerator,
    request: &LayoutRequest,
) -> Result<()> {
    let events = store.events().clone();
    let _ = events.publish(DesignEvent::Generation(GenerationEvent::Requested {
        prompt: request.prompt.clone(),
    }));

    let candidates = match generator.generate(request).await {
        Ok(candidates) => candidates,
        Err(err) => {
            let _ = events.publish(DesignEvent::Generation(GenerationEvent::Failed {
                reason: err.to_string(),
            }));
            return Err(err);
        }
    };

    if candidates.is_empty() {
        let err = GenerationError::NoCandidates;
        let _ = events.publish(DesignEvent::Generation(GenerationEvent::Failed {
            reason: err.to_string(),
        }));
        return Err(err.into());
    }
    let total = candidates.len();

    let mut first_rejection: Option<GenerationError> = None;
    for candidate in candidates {
        match validate_candidate(&candidate, store.catalog()) {
            Ok(()) => {
                info!(name = %candidate.name, modules = candidate.module_count(), "accepting generated layout");
                store.load_configuration(candidate)?;
                let _ = events.publish(DesignEvent::Generation(GenerationEvent::Completed {
                    candidates: total,
                }));
                return Ok(());
            }
            Err(err) => {
                first_rejection.get_or_insert(err);
            }
        }
    }

    let err = first_rejection.unwrap_or(GenerationError::NoCandidates);
    let _ = events.publish(DesignEvent::Generation(GenerationEvent::Failed {
        reason: err.to_string(),
    }));
    Err(err.into())
}

/// Local layout synthesis from the request parameters.
///
/// Produces one starting booth: walls along the back and sides, a
/// reception counter, seating, lighting, and the extras named by the
/// request's requirement tags ("screen", "platform"). This is the
/// fallback when no external AI generation is wired up, and doubles as a
/// deterministic baseline in tests.
pub struct TemplateLayoutGenerator {
    catalog: Arc<ModuleLibrary>,
}

impl TemplateLayoutGenerator {
    /// Creates a generator over the given catalog.
    pub fn new(catalog: Arc<ModuleLibrary>) -> Self {
        Self { catalog }
    }

    fn place(
        &self,
        config: &mut StandConfiguration,
        module_id: &str,
        position: Vec3,
    ) -> std::result::Result<(), GenerationError> {
        let base = self
            .catalog
            .get(module_id)
            .ok_or_else(|| GenerationError::InvalidRequest {
                reason: format!("catalog is missing {}", module_id),
            })?;
        config.modules.push(PlacedModule::from_base(base, position));
        Ok(())
    }

    fn build(&self, request: &LayoutRequest) -> std::result::Result<StandConfiguration, GenerationError> {
        let plan = request.floor_plan.unwrap_or_default();
        if plan.width <= 0.0 || plan.depth <= 0.0 {
            return Err(GenerationError::InvalidRequest {
                reason: format!("non-positive floor plan {}x{}", plan.width, plan.depth),
            });
        }

        let name = if request.prompt.trim().is_empty() {
            "Generated stand".to_string()
        } else {
            request.prompt.trim().chars().take(40).collect()
        };
        let mut config = StandConfiguration::new(name, plan.width, plan.depth);
        config.industry = request.industry.clone();
        if let Some(style) = &request.style {
            config.style_tags.push(style.clone());
        }

        let half_w = plan.width / 2.0;
        let half_d = plan.depth / 2.0;
        let wall_z = -half_d + 0.05;

        // Back wall run of 2 m panels.
        let panel_count = (plan.width / 2.0).floor().max(1.0) as usize;
        let run_width = panel_count as f64 * 2.0;
        for i in 0..panel_count {
            let x = -run_width / 2.0 + 1.0 + i as f64 * 2.0;
            self.place(&mut config, "wall-001", Vec3::new(x, 0.0, wall_z))?;
        }

        // One side wall per flank, rotated onto the Z axis.
        for x in [-half_w + 0.05, half_w - 0.05] {
            self.place(&mut config, "wall-001", Vec3::new(x, 0.0, -half_d + 1.0))?;
            if let Some(placed) = config.modules.last_mut() {
                placed.rotation.y = FRAC_PI_2;
            }
        }

        // Reception near the front edge, seating mid-stand.
        self.place(
            &mut config,
            "furniture-001",
            Vec3::new(-half_w / 2.0, 0.0, half_d - 0.8),
        )?;
        self.place(&mut config, "furniture-002", Vec3::new(half_w / 2.0, 0.0, 0.0))?;
        self.place(
            &mut config,
            "furniture-003",
            Vec3::new(half_w / 2.0 - 0.6, 0.0, 0.3),
        )?;
        self.place(
            &mut config,
            "furniture-003",
            Vec3::new(half_w / 2.0 + 0.6, 0.0, -0.3),
        )?;

        // Overhead lighting row.
        for i in 0..2 {
            let x = (i as f64 - 0.5) * half_w;
            self.place(&mut config, "lighting-001", Vec3::new(x, 2.5, 0.0))?;
        }

        let wants = |tag: &str| {
            request
                .requirements
                .iter()
                .any(|r| r.eq_ignore_ascii_case(tag))
        };

        if wants("screen") {
            self.place(
                &mut config,
                "multimedia-001",
                Vec3::new(0.0, 1.2, wall_z + 0.1),
            )?;
        }

        if wants("platform") && plan.width >= 4.0 && plan.depth >= 4.0 {
            let platform_dims = self
                .catalog
                .get("level-001")
                .ok_or_else(|| GenerationError::InvalidRequest {
                    reason: "catalog is missing level-001".to_string(),
                })?
                .dimensions;
            let stair_dims = self
                .catalog
                .get("level-002")
                .ok_or_else(|| GenerationError::InvalidRequest {
                    reason: "catalog is missing level-002".to_string(),
                })?
                .dimensions;
            let platform_pos = Vec3::new(half_w - 1.6, 0.0, -half_d + 1.6);
            let stair_pos =
                stair_placement(platform_pos, &platform_dims, &stair_dims, StairSide::Front);
            self.place(&mut config, "level-001", platform_pos)?;
            self.place(&mut config, "level-002", stair_pos)?;
        }

        Ok(config)
    }
}

#[async_trait]
impl LayoutGenerator for TemplateLayoutGenerator {
    async fn generate(&self, request: &LayoutRequest) -> Result<Vec<StandConfiguration>> {
        let config = self.build(request)?;
        Ok(vec![config])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standkit_core::FloorPlan;

    #[test]
    fn candidate_with_unknown_module_is_rejected() {
        let catalog = ModuleLibrary::standard();
        let mut candidate = StandConfiguration::new("bad", 6.0, 4.0);
        let mut base = catalog.get("wall-001").unwrap().clone();
        base.id = "wall-999".to_string();
        candidate
            .modules
            .push(PlacedModule::from_base(&base, Vec3::ZERO));

        let err = validate_candidate(&candidate, &catalog).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidCandidate { .. }));
    }

    #[test]
    fn template_layout_keeps_modules_in_bounds() {
        let catalog = Arc::new(ModuleLibrary::standard());
        let generator = TemplateLayoutGenerator::new(catalog.clone());
        let request = LayoutRequest {
            prompt: "minimalist tech booth".to_string(),
            floor_plan: Some(FloorPlan::new(6.0, 4.0)),
            requirements: vec!["screen".to_string()],
            ..LayoutRequest::default()
        };
        let config = generator.build(&request).unwrap();

        assert!(config.module_count() > 5);
        assert!(validate_candidate(&config, &catalog).is_ok());
        for placed in &config.modules {
            assert!(placed.position.x.abs() <= 3.0 + 1.0);
            assert!(placed.position.z.abs() <= 2.0 + 1.0);
        }
    }

    #[test]
    fn platform_requirement_adds_stair_at_platform_edge() {
        let catalog = Arc::new(ModuleLibrary::standard());
        let generator = TemplateLayoutGenerator::new(catalog);
        let request = LayoutRequest {
            prompt: "two level stand".to_string(),
            floor_plan: Some(FloorPlan::new(8.0, 6.0)),
            requirements: vec!["platform".to_string()],
            ..LayoutRequest::default()
        };
        let config = generator.build(&request).unwrap();

        let platform = config
            .modules
            .iter()
            .find(|m| m.module.id == "level-001")
            .expect("platform placed");
        let stair = config
            .modules
            .iter()
            .find(|m| m.module.id == "level-002")
            .expect("stair placed");
        // Front attachment: aligned on x, pushed out along z.
        assert!((stair.position.x - platform.position.x).abs() < 1e-9);
        assert!((stair.position.z - (platform.position.z + 1.5 + 0.75)).abs() < 1e-9);
    }
}
