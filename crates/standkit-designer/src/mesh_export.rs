//! Whole-scene mesh assembly and STL export.
//!
//! Assembles every placed module's mesh (boxes for plain modules, the
//! geometry kernel's output for curved ones) into one triangle soup in
//! stand coordinates, and writes it out as binary STL for offline viewing
//! or fabrication handoff.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::{Rotation3, Vector3};
use tracing::debug;

use standkit_core::StandConfiguration;

use crate::geometry::{build_module_mesh, MeshBuffer};

/// Builds the combined mesh of a configuration in stand coordinates.
///
/// Each module mesh is scaled, rotated (extrinsic X-Y-Z Euler angles),
/// and translated by its instance transform. Curve fallbacks are already
/// handled by the kernel, so assembly never fails.
pub fn scene_mesh(configuration: &StandConfiguration) -> MeshBuffer {
    let mut combined = MeshBuffer::new();
    for placed in &configuration.modules {
        let build = build_module_mesh(&placed.module);
        let rotation = Rotation3::from_euler_angles(
            placed.rotation.x,
            placed.rotation.y,
            placed.rotation.z,
        );
        let translation = Vector3::new(placed.position.x, placed.position.y, placed.position.z);

        let mut mesh = build.mesh;
        for v in &mut mesh.vertices {
            let scaled = Vector3::new(
                v.x * placed.scale.x,
                v.y * placed.scale.y,
                v.z * placed.scale.z,
            );
            let placed_v = rotation * scaled + translation;
            *v = nalgebra::Point3::from(placed_v);
        }
        combined.merge(&mesh);
    }
    debug!(
        modules = configuration.module_count(),
        triangles = combined.triangle_count(),
        "scene mesh assembled"
    );
    combined
}

/// Writes a mesh as binary STL.
pub fn export_stl(mesh: &MeshBuffer, path: impl AsRef<Path>) -> Result<()> {
    let triangles: Vec<stl_io::Triangle> = mesh
        .triangles
        .iter()
        .map(|&[a, b, c]| {
            let va = mesh.vertices[a as usize];
            let vb = mesh.vertices[b as usize];
            let vc = mesh.vertices[c as usize];
            let normal = (vb - va).cross(&(vc - va));
            let normal = if normal.norm() > 1e-12 {
                normal.normalize()
            } else {
                Vector3::y()
            };
            stl_io::Triangle {
                normal: stl_io::Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                vertices: [
                    stl_io::Vertex::new([va.x as f32, va.y as f32, va.z as f32]),
                    stl_io::Vertex::new([vb.x as f32, vb.y as f32, vb.z as f32]),
                    stl_io::Vertex::new([vc.x as f32, vc.y as f32, vc.z as f32]),
                ],
            }
        })
        .collect();

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path.as_ref())
        .context("Failed to create STL file")?;
    stl_io::write_stl(&mut file, triangles.iter()).context("Failed to write STL file")?;
    Ok(())
}

/// Convenience: assembles and exports a configuration in one call.
pub fn export_configuration_stl(
    configuration: &StandConfiguration,
    path: impl AsRef<Path>,
) -> Result<()> {
    let mesh = scene_mesh(configuration);
    export_stl(&mesh, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use standkit_core::{ModuleLibrary, PlacedModule, Vec3};

    #[test]
    fn scene_mesh_translates_modules_into_stand_space() {
        let catalog = ModuleLibrary::standard();
        let mut config = StandConfiguration::new("mesh test", 6.0, 4.0);
        let mut placed =
            PlacedModule::from_base(catalog.get("furniture-002").unwrap(), Vec3::ZERO);
        placed.position = Vec3::new(2.0, 0.0, -1.0);
        config.modules.push(placed);

        let mesh = scene_mesh(&config);
        let (min, max) = mesh.bounding_box().unwrap();
        // 0.7 m table centered at x = 2.
        assert!((min.x - 1.65).abs() < 1e-9);
        assert!((max.x - 2.35).abs() < 1e-9);
        assert!((min.z + 1.35).abs() < 1e-9);
    }
}
