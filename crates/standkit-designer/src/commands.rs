//! Reversible scene commands.
//!
//! Every store mutation is expressed as a `SceneCommand` that can be
//! applied to and undone against a `StandConfiguration`. Commands capture
//! the state they need for reversal (removed instances, previous scales,
//! previous colors) rather than relying on inverse arithmetic where that
//! would be lossy.

use uuid::Uuid;

use standkit_core::{Axis, MaterialAppearance, PlacedModule, StandConfiguration, Vec3};

/// A patch of permitted instance fields for shallow-merge updates.
///
/// Unset fields leave the instance untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModulePatch {
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
    pub material: Option<MaterialAppearance>,
    pub locked: Option<bool>,
}

impl ModulePatch {
    /// Applies the set fields onto an instance.
    fn apply_to(&self, placed: &mut PlacedModule) {
        if let Some(position) = self.position {
            placed.position = position;
        }
        if let Some(rotation) = self.rotation {
            placed.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            placed.scale = scale;
        }
        if let Some(material) = &self.material {
            placed.material = material.clone();
        }
        if let Some(locked) = self.locked {
            placed.locked = locked;
        }
    }
}

/// A reversible mutation of the stand configuration.
#[derive(Debug, Clone)]
pub enum SceneCommand {
    AddModule(AddModule),
    RemoveModule(RemoveModule),
    MoveModule(MoveModule),
    RotateModule(RotateModule),
    ScaleModule(ScaleModule),
    RecolorModule(RecolorModule),
    UpdateModule(UpdateModule),
    SetFloorMaterial(SetFloorMaterial),
    PasteModules(PasteModules),
    Composite(Composite),
}

#[derive(Debug, Clone)]
pub struct AddModule {
    pub instance_id: Uuid,
    /// The instance to insert; `None` while it lives in the scene.
    pub object: Option<PlacedModule>,
}

#[derive(Debug, Clone)]
pub struct RemoveModule {
    pub instance_id: Uuid,
    /// The removed instance; `Some` while it is off the scene.
    pub object: Option<PlacedModule>,
}

#[derive(Debug, Clone)]
pub struct MoveModule {
    pub instance_id: Uuid,
    pub delta: Vec3,
}

#[derive(Debug, Clone)]
pub struct RotateModule {
    pub instance_id: Uuid,
    pub axis: Axis,
    pub angle_radians: f64,
}

#[derive(Debug, Clone)]
pub struct ScaleModule {
    pub instance_id: Uuid,
    pub old_scale: Vec3,
    pub new_scale: Vec3,
}

#[derive(Debug, Clone)]
pub struct RecolorModule {
    pub instance_id: Uuid,
    pub old_color: String,
    pub new_color: String,
}

#[derive(Debug, Clone)]
pub struct UpdateModule {
    pub instance_id: Uuid,
    pub patch: ModulePatch,
    /// Snapshot of the instance before the patch, for undo.
    pub snapshot: Option<PlacedModule>,
}

#[derive(Debug, Clone)]
pub struct SetFloorMaterial {
    pub old: MaterialAppearance,
    pub new: MaterialAppearance,
}

#[derive(Debug, Clone)]
pub struct PasteModules {
    /// Pasted instances; entries are `None` while they live in the scene.
    pub objects: Vec<Option<PlacedModule>>,
    pub instance_ids: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct Composite {
    pub commands: Vec<SceneCommand>,
    pub name: String,
}

impl SceneCommand {
    /// Name of the command for history display.
    pub fn name(&self) -> &str {
        match self {
            SceneCommand::AddModule(_) => "Add Module",
            SceneCommand::RemoveModule(_) => "Remove Module",
            SceneCommand::MoveModule(_) => "Move Module",
            SceneCommand::RotateModule(_) => "Rotate Module",
            SceneCommand::ScaleModule(_) => "Scale Module",
            SceneCommand::RecolorModule(_) => "Recolor Module",
            SceneCommand::UpdateModule(_) => "Update Module",
            SceneCommand::SetFloorMaterial(_) => "Change Floor",
            SceneCommand::PasteModules(_) => "Paste Modules",
            SceneCommand::Composite(c) => &c.name,
        }
    }

    /// Applies the command to a configuration.
    pub fn apply(&mut self, configuration: &mut StandConfiguration) {
        match self {
            SceneCommand::AddModule(cmd) => {
                if let Some(object) = cmd.object.take() {
                    configuration.modules.push(object);
                }
            }
            SceneCommand::RemoveModule(cmd) => {
                if let Some(index) = configuration
                    .modules
                    .iter()
                    .position(|m| m.instance_id == cmd.instance_id)
                {
                    cmd.object = Some(configuration.modules.remove(index));
                }
            }
            SceneCommand::MoveModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    placed.position = placed.position + cmd.delta;
                }
            }
            SceneCommand::RotateModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    rotate(placed, cmd.axis, cmd.angle_radians);
                }
            }
            SceneCommand::ScaleModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    placed.scale = cmd.new_scale;
                }
            }
            SceneCommand::RecolorModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    placed.material.color = cmd.new_color.clone();
                }
            }
            SceneCommand::UpdateModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    cmd.snapshot = Some(placed.clone());
                    cmd.patch.apply_to(placed);
                }
            }
            SceneCommand::SetFloorMaterial(cmd) => {
                configuration.floor_material = cmd.new.clone();
            }
            SceneCommand::PasteModules(cmd) => {
                for object in &mut cmd.objects {
                    if let Some(object) = object.take() {
                        configuration.modules.push(object);
                    }
                }
            }
            SceneCommand::Composite(cmd) => {
                for command in &mut cmd.commands {
                    command.apply(configuration);
                }
            }
        }
    }

    /// Reverts the command against a configuration.
    pub fn undo(&mut self, configuration: &mut StandConfiguration) {
        match self {
            SceneCommand::AddModule(cmd) => {
                if let Some(index) = configuration
                    .modules
                    .iter()
                    .position(|m| m.instance_id == cmd.instance_id)
                {
                    cmd.object = Some(configuration.modules.remove(index));
                }
            }
            SceneCommand::RemoveModule(cmd) => {
                if let Some(object) = cmd.object.take() {
                    configuration.modules.push(object);
                }
            }
            SceneCommand::MoveModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    placed.position = placed.position - cmd.delta;
                }
            }
            SceneCommand::RotateModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    rotate(placed, cmd.axis, -cmd.angle_radians);
                }
            }
            SceneCommand::ScaleModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    placed.scale = cmd.old_scale;
                }
            }
            SceneCommand::RecolorModule(cmd) => {
                if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                    placed.material.color = cmd.old_color.clone();
                }
            }
            SceneCommand::UpdateModule(cmd) => {
                if let Some(snapshot) = cmd.snapshot.take() {
                    if let Some(placed) = configuration.find_mut(cmd.instance_id) {
                        *placed = snapshot;
                    }
                }
            }
            SceneCommand::SetFloorMaterial(cmd) => {
                configuration.floor_material = cmd.old.clone();
            }
            SceneCommand::PasteModules(cmd) => {
                for (slot, instance_id) in cmd.objects.iter_mut().zip(&cmd.instance_ids) {
                    if let Some(index) = configuration
                        .modules
                        .iter()
                        .position(|m| m.instance_id == *instance_id)
                    {
                        *slot = Some(configuration.modules.remove(index));
                    }
                }
            }
            SceneCommand::Composite(cmd) => {
                for command in cmd.commands.iter_mut().rev() {
                    command.undo(configuration);
                }
            }
        }
    }
}

fn rotate(placed: &mut PlacedModule, axis: Axis, angle_radians: f64) {
    match axis {
        Axis::X => placed.rotation.x += angle_radians,
        Axis::Y => placed.rotation.y += angle_radians,
        Axis::Z => placed.rotation.z += angle_radians,
    }
}
