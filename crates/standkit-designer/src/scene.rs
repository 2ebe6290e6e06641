//! # Scene Store
//!
//! The authoritative in-memory model of one stand configuration. All
//! mutation funnels through here: operations either fully apply and land
//! on the undo stack, or are silent no-ops (unknown instance id, locked
//! instance). Every applied mutation publishes a `SceneEvent` so derived
//! computation (BOM, meshes) can recompute.
//!
//! Editing is single-user and synchronous; no operation ever observes a
//! partially applied prior operation.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use standkit_core::{
    Axis, CertifiedMaterialLibrary, DesignEvent, EventBus, MaterialAppearance, ModuleBase,
    ModuleLibrary, PartialVec3, PlacedModule, Result, SceneEvent, StandConfiguration, Vec3,
};

use crate::commands::{
    AddModule, Composite, ModulePatch, MoveModule, PasteModules, RecolorModule, RemoveModule,
    RotateModule, ScaleModule, SceneCommand, SetFloorMaterial, UpdateModule,
};

/// Undo stack depth.
const HISTORY_LIMIT: usize = 50;

/// Horizontal offset applied to duplicated and pasted instances, in
/// meters, so copies never coincide exactly with their source.
pub const DUPLICATE_OFFSET: f64 = 0.5;

/// The scene store for one stand configuration.
pub struct SceneStore {
    configuration: StandConfiguration,
    catalog: Arc<ModuleLibrary>,
    events: Arc<EventBus>,
    selected_id: Option<Uuid>,
    clipboard: Vec<PlacedModule>,
    undo_stack: Vec<SceneCommand>,
    redo_stack: Vec<SceneCommand>,
    is_modified: bool,
}

impl SceneStore {
    /// Creates a store with an empty default configuration.
    ///
    /// The module catalog and event bus are injected; the store never
    /// reaches for ambient globals.
    pub fn new(catalog: Arc<ModuleLibrary>, events: Arc<EventBus>) -> Self {
        Self {
            configuration: StandConfiguration::default(),
            catalog,
            events,
            selected_id: None,
            clipboard: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            is_modified: false,
        }
    }

    /// The current configuration.
    pub fn configuration(&self) -> &StandConfiguration {
        &self.configuration
    }

    /// The injected module catalog.
    pub fn catalog(&self) -> &ModuleLibrary {
        &self.catalog
    }

    /// The injected event bus.
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// True once any mutation has been applied since the last load.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    // ------------------------------------------------------------------
    // History

    /// Pushes a command, applies it, and clears the redo stack.
    fn push_command(&mut self, mut command: SceneCommand) {
        command.apply(&mut self.configuration);
        self.undo_stack.push(command);
        self.redo_stack.clear();
        if self.undo_stack.len() > HISTORY_LIMIT {
            self.undo_stack.remove(0);
        }
        self.is_modified = true;
    }

    /// Undoes the last mutation, if any.
    pub fn undo(&mut self) {
        if let Some(mut command) = self.undo_stack.pop() {
            debug!(command = command.name(), "undo");
            command.undo(&mut self.configuration);
            self.redo_stack.push(command);
            self.is_modified = true;
        }
    }

    /// Re-applies the last undone mutation, if any.
    pub fn redo(&mut self) {
        if let Some(mut command) = self.redo_stack.pop() {
            debug!(command = command.name(), "redo");
            command.apply(&mut self.configuration);
            self.undo_stack.push(command);
            self.is_modified = true;
        }
    }

    /// True if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// True if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drops both history stacks.
    pub fn clear_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    // ------------------------------------------------------------------
    // Module operations

    /// Instantiates a catalog module at a position.
    ///
    /// The store permits overlapping placement by design; overlap is
    /// surfaced separately through the collision engine as advisory data.
    pub fn add_module(&mut self, base: &ModuleBase, position: Vec3) -> Uuid {
        let placed = PlacedModule::from_base(base, position);
        let instance_id = placed.instance_id;
        let module_id = placed.module.id.clone();
        self.push_command(SceneCommand::AddModule(AddModule {
            instance_id,
            object: Some(placed),
        }));
        self.publish(SceneEvent::ModuleAdded {
            instance_id,
            module_id,
        });
        instance_id
    }

    /// Instantiates a module by catalog id.
    ///
    /// # Errors
    ///
    /// `CatalogError::UnknownModule` when the id is not in the catalog.
    pub fn add_from_catalog(&mut self, module_id: &str, position: Vec3) -> Result<Uuid> {
        let base = self.catalog.resolve(module_id)?.clone();
        Ok(self.add_module(&base, position))
    }

    /// Removes a placed instance. No-op on unknown or locked ids.
    pub fn remove_module(&mut self, instance_id: Uuid) {
        if !self.is_mutable(instance_id) {
            return;
        }
        self.push_command(SceneCommand::RemoveModule(RemoveModule {
            instance_id,
            object: None,
        }));
        if self.selected_id == Some(instance_id) {
            self.selected_id = None;
        }
        self.publish(SceneEvent::ModuleRemoved { instance_id });
    }

    /// Clones an instance under a fresh id, offset to avoid perfect
    /// overlap. Returns the new id, or `None` for unknown sources.
    pub fn duplicate_module(&mut self, instance_id: Uuid) -> Option<Uuid> {
        let source = self.configuration.find(instance_id)?;
        let copy = source.duplicated(Vec3::new(DUPLICATE_OFFSET, 0.0, DUPLICATE_OFFSET));
        let new_id = copy.instance_id;
        let module_id = copy.module.id.clone();
        self.push_command(SceneCommand::AddModule(AddModule {
            instance_id: new_id,
            object: Some(copy),
        }));
        self.publish(SceneEvent::ModuleAdded {
            instance_id: new_id,
            module_id,
        });
        Some(new_id)
    }

    /// Shallow-merges permitted fields onto an instance. No-op on unknown
    /// or locked ids.
    pub fn update_module(&mut self, instance_id: Uuid, patch: ModulePatch) {
        if !self.is_mutable(instance_id) {
            return;
        }
        self.push_command(SceneCommand::UpdateModule(UpdateModule {
            instance_id,
            patch,
            snapshot: None,
        }));
        self.publish(SceneEvent::ModuleTransformed { instance_id });
    }

    /// Locks or unlocks an instance. This is the one mutation a locked
    /// instance accepts, otherwise nothing could ever unlock.
    pub fn set_locked(&mut self, instance_id: Uuid, locked: bool) {
        if !self.configuration.contains(instance_id) {
            return;
        }
        self.push_command(SceneCommand::UpdateModule(UpdateModule {
            instance_id,
            patch: ModulePatch {
                locked: Some(locked),
                ..ModulePatch::default()
            },
            snapshot: None,
        }));
    }

    /// Adds a delta to an instance position; omitted axes stay put.
    /// No-op on unknown or locked ids.
    pub fn move_module(&mut self, instance_id: Uuid, delta: PartialVec3) {
        if !self.is_mutable(instance_id) {
            return;
        }
        self.push_command(SceneCommand::MoveModule(MoveModule {
            instance_id,
            delta: delta.resolve(),
        }));
        self.publish(SceneEvent::ModuleTransformed { instance_id });
    }

    /// Adds a rotation (degrees) on one axis. Rotation accumulates; it is
    /// never reset implicitly. No-op on unknown or locked ids.
    pub fn rotate_module(&mut self, instance_id: Uuid, axis: Axis, angle_degrees: f64) {
        if !self.is_mutable(instance_id) {
            return;
        }
        self.push_command(SceneCommand::RotateModule(RotateModule {
            instance_id,
            axis,
            angle_radians: angle_degrees.to_radians(),
        }));
        self.publish(SceneEvent::ModuleTransformed { instance_id });
    }

    /// Sets a uniform scale factor. Non-uniform scaling is not exposed at
    /// this layer. No-op on unknown or locked ids.
    pub fn scale_module(&mut self, instance_id: Uuid, factor: f64) {
        if !self.is_mutable(instance_id) {
            return;
        }
        let Some(placed) = self.configuration.find(instance_id) else {
            return;
        };
        self.push_command(SceneCommand::ScaleModule(ScaleModule {
            instance_id,
            old_scale: placed.scale,
            new_scale: Vec3::new(factor, factor, factor),
        }));
        self.publish(SceneEvent::ModuleTransformed { instance_id });
    }

    /// Overwrites the material color, preserving the rest of the material
    /// response. No-op on unknown/locked ids and on modules whose color is
    /// not customizable.
    pub fn change_module_color(&mut self, instance_id: Uuid, color: impl Into<String>) {
        if !self.is_mutable(instance_id) {
            return;
        }
        let Some(placed) = self.configuration.find(instance_id) else {
            return;
        };
        if !placed.module.customizable.color {
            return;
        }
        self.push_command(SceneCommand::RecolorModule(RecolorModule {
            instance_id,
            old_color: placed.material.color.clone(),
            new_color: color.into(),
        }));
        self.publish(SceneEvent::ModuleRestyled { instance_id });
    }

    /// Replaces the floor appearance.
    pub fn set_floor_material(&mut self, material: MaterialAppearance) {
        self.push_command(SceneCommand::SetFloorMaterial(SetFloorMaterial {
            old: self.configuration.floor_material.clone(),
            new: material,
        }));
        self.publish(SceneEvent::FloorChanged);
    }

    // ------------------------------------------------------------------
    // Selection

    /// Selects an instance; selecting an unknown id clears the selection.
    pub fn select(&mut self, instance_id: Option<Uuid>) {
        let resolved = instance_id.filter(|id| self.configuration.contains(*id));
        for placed in &mut self.configuration.modules {
            placed.selected = Some(placed.instance_id) == resolved;
        }
        self.selected_id = resolved;
        self.publish(SceneEvent::SelectionChanged {
            instance_id: resolved,
        });
    }

    /// The primary selection, if any.
    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected_id
    }

    // ------------------------------------------------------------------
    // Clipboard

    /// Copies the selected instance to the clipboard.
    pub fn copy_selected(&mut self) {
        self.clipboard = self
            .configuration
            .modules
            .iter()
            .filter(|m| m.selected)
            .cloned()
            .collect();
    }

    /// Pastes clipboard instances under fresh ids, offset from their
    /// source positions.
    pub fn paste(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        let mut objects = Vec::new();
        let mut instance_ids = Vec::new();
        for source in &self.clipboard {
            let copy = source.duplicated(Vec3::new(DUPLICATE_OFFSET, 0.0, DUPLICATE_OFFSET));
            instance_ids.push(copy.instance_id);
            objects.push(Some(copy));
        }
        self.push_command(SceneCommand::PasteModules(PasteModules {
            objects,
            instance_ids: instance_ids.clone(),
        }));
        for instance_id in instance_ids {
            if let Some(placed) = self.configuration.find(instance_id) {
                self.publish(SceneEvent::ModuleAdded {
                    instance_id,
                    module_id: placed.module.id.clone(),
                });
            }
        }
    }

    // ------------------------------------------------------------------
    // Persistence boundary

    /// Replaces the scene with a loaded configuration.
    ///
    /// The configuration is validated first: positive footprint, unique
    /// instance ids, and every module reference resolvable in the
    /// catalog. On failure the current scene is left untouched.
    pub fn load_configuration(&mut self, configuration: StandConfiguration) -> Result<()> {
        configuration.validate()?;
        for placed in &configuration.modules {
            self.catalog.resolve(&placed.module.id)?;
        }
        let name = configuration.name.clone();
        let module_count = configuration.module_count();
        self.configuration = configuration;
        self.selected_id = None;
        self.clear_history();
        self.is_modified = false;
        self.publish(SceneEvent::ConfigurationReplaced { name, module_count });
        Ok(())
    }

    /// Snapshot of the current configuration for the persistence
    /// collaborator.
    pub fn export_configuration(&self) -> StandConfiguration {
        self.configuration.clone()
    }

    /// Recomputes the aggregate price and caches it on the configuration.
    ///
    /// The cache is derived data, not an edit: it does not land on the
    /// undo stack.
    pub fn refresh_cached_price(&mut self, materials: &CertifiedMaterialLibrary) -> f64 {
        let totals = crate::bom::aggregate(&self.configuration, materials).totals;
        self.configuration.cached_total_price = Some(totals.price);
        totals.price
    }

    // ------------------------------------------------------------------

    /// Groups several operations into one undo step.
    pub fn apply_composite(&mut self, name: impl Into<String>, commands: Vec<SceneCommand>) {
        self.push_command(SceneCommand::Composite(Composite {
            commands,
            name: name.into(),
        }));
    }

    fn is_mutable(&self, instance_id: Uuid) -> bool {
        match self.configuration.find(instance_id) {
            Some(placed) => !placed.locked,
            None => false,
        }
    }

    fn publish(&self, event: SceneEvent) {
        // Delivery problems are not editing problems.
        let _ = self.events.publish(DesignEvent::Scene(event));
    }
}

impl std::fmt::Debug for SceneStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneStore")
            .field("configuration", &self.configuration.name)
            .field("modules", &self.configuration.module_count())
            .field("selected", &self.selected_id)
            .finish()
    }
}
