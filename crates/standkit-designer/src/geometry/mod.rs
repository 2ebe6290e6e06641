//! # Geometry Kernel
//!
//! Builds renderable triangle meshes for stand modules from their
//! declarative configuration: plain boxes from nominal dimensions, and
//! curved geometry (arc, bezier, circular, spline) from a `CurveConfig`.
//!
//! Construction never fails hard. Malformed curve parameters degrade to a
//! unit-cube fallback solid, the error is reported on the returned
//! `MeshBuild` and logged as a warning. This keeps the editor responsive
//! when a catalog entry or an AI-generated layout carries bad data.
//!
//! Meshes are built in module-local coordinates: the origin is the center
//! of the horizontal footprint, y = 0 is the floor.

mod profile;
mod spline;
mod sweep;

pub use profile::{sample_arc_profile, sample_bezier_profile, sample_circle_profile};
pub use spline::sample_catmull_rom;
pub use sweep::{sweep_tube, sweep_wall};

use nalgebra::{Point3, Vector3};
use tracing::warn;

use standkit_core::{CurveConfig, Dimensions, GeometryError, ModuleBase};

/// An indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions in meters, module-local coordinates.
    pub vertices: Vec<Point3<f64>>,
    /// Counter-clockwise triangles, indexing into `vertices`.
    pub triangles: Vec<[u32; 3]>,
}

impl MeshBuffer {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, v: Point3<f64>) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    /// Appends a triangle by vertex indices.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &MeshBuffer) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|[a, b, c]| [a + base, b + base, c + base]),
        );
    }

    /// Translates every vertex by an offset.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }
        Some((min, max))
    }
}

/// Result of a geometry build: the mesh, plus the configuration error that
/// forced a fallback, if any.
#[derive(Debug, Clone)]
pub struct MeshBuild {
    pub mesh: MeshBuffer,
    pub warning: Option<GeometryError>,
}

impl MeshBuild {
    fn ok(mesh: MeshBuffer) -> Self {
        Self {
            mesh,
            warning: None,
        }
    }

    /// True if this build fell back to the default solid.
    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}

/// Builds an axis-aligned box mesh: footprint centered on the origin,
/// rising from y = 0 to the given height.
pub fn build_box_mesh(dims: &Dimensions) -> MeshBuffer {
    let hw = dims.width / 2.0;
    let hd = dims.depth / 2.0;
    let h = dims.height;

    let mut mesh = MeshBuffer::new();
    let corners = [
        Point3::new(-hw, 0.0, -hd),
        Point3::new(hw, 0.0, -hd),
        Point3::new(hw, 0.0, hd),
        Point3::new(-hw, 0.0, hd),
        Point3::new(-hw, h, -hd),
        Point3::new(hw, h, -hd),
        Point3::new(hw, h, hd),
        Point3::new(-hw, h, hd),
    ];
    for c in corners {
        mesh.push_vertex(c);
    }
    // bottom, top, then the four sides
    const FACES: [[u32; 4]; 6] = [
        [0, 1, 2, 3],
        [7, 6, 5, 4],
        [4, 5, 1, 0],
        [5, 6, 2, 1],
        [6, 7, 3, 2],
        [7, 4, 0, 3],
    ];
    for [a, b, c, d] in FACES {
        mesh.push_triangle(a, b, c);
        mesh.push_triangle(a, c, d);
    }
    mesh
}

/// The fallback solid substituted when curve parameters are unusable.
pub fn fallback_mesh() -> MeshBuffer {
    build_box_mesh(&Dimensions::new(1.0, 1.0, 1.0))
}

/// Builds the mesh for a curve configuration.
///
/// Any configuration error is recovered locally: the returned build holds
/// the fallback solid and the reported error.
pub fn build_curved_mesh(config: &CurveConfig) -> MeshBuild {
    let result = match config {
        CurveConfig::Arc(arc) => build_arc(arc),
        CurveConfig::Bezier(bezier) => build_bezier(bezier),
        CurveConfig::Circular(circular) => build_circular(circular),
        CurveConfig::Spline(spline) => build_spline(spline),
    };
    match result {
        Ok(mesh) => MeshBuild::ok(mesh),
        Err(err) => {
            warn!(curve = %config.kind(), error = %err, "curve configuration invalid, using fallback solid");
            MeshBuild {
                mesh: fallback_mesh(),
                warning: Some(err),
            }
        }
    }
}

/// Builds the mesh for a catalog module: curved when a curve configuration
/// is present, a plain box otherwise.
pub fn build_module_mesh(module: &ModuleBase) -> MeshBuild {
    match &module.curve {
        Some(config) => build_curved_mesh(config),
        None => MeshBuild::ok(build_box_mesh(&module.dimensions)),
    }
}

fn build_arc(config: &standkit_core::ArcConfig) -> Result<MeshBuffer, GeometryError> {
    if config.radius <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "radius".to_string(),
            value: config.radius,
        });
    }
    if (config.end_angle - config.start_angle).abs() < 1e-9 {
        return Err(GeometryError::DegenerateSweep {
            start_angle: config.start_angle,
            end_angle: config.end_angle,
        });
    }

    if let Some(tube_radius) = config.tube_radius {
        if tube_radius <= 0.0 {
            return Err(GeometryError::NonPositiveParameter {
                parameter: "tube_radius".to_string(),
                value: tube_radius,
            });
        }
        // Swept handrail form: an open tube along the arc path.
        let samples = config.segments.max(32);
        let path: Vec<Point3<f64>> =
            sample_arc_profile(config.radius, config.start_angle, config.end_angle, samples)
                .into_iter()
                .map(|p| Point3::new(p.0, 0.0, p.1))
                .collect();
        return sweep_tube(&path, tube_radius, config.radial_segments.max(3), false);
    }

    if config.extrude_height <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "extrude_height".to_string(),
            value: config.extrude_height,
        });
    }
    if config.extrude_depth <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "extrude_depth".to_string(),
            value: config.extrude_depth,
        });
    }

    let centerline = sample_arc_profile(
        config.radius,
        config.start_angle,
        config.end_angle,
        config.segments.max(2),
    );
    sweep_wall(
        &centerline,
        config.extrude_depth,
        config.extrude_height,
        false,
    )
}

fn build_bezier(config: &standkit_core::BezierConfig) -> Result<MeshBuffer, GeometryError> {
    if config.extrude_height <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "extrude_height".to_string(),
            value: config.extrude_height,
        });
    }
    if config.extrude_depth <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "extrude_depth".to_string(),
            value: config.extrude_depth,
        });
    }
    let centerline = sample_bezier_profile(&config.control_points, config.segments.max(2))?;
    sweep_wall(
        &centerline,
        config.extrude_depth,
        config.extrude_height,
        false,
    )
}

fn build_circular(config: &standkit_core::CircularConfig) -> Result<MeshBuffer, GeometryError> {
    if config.radius <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "radius".to_string(),
            value: config.radius,
        });
    }
    if config.extrude_height <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "extrude_height".to_string(),
            value: config.extrude_height,
        });
    }
    if config.extrude_depth <= 0.0 || config.extrude_depth >= config.radius {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "extrude_depth".to_string(),
            value: config.extrude_depth,
        });
    }

    // Annulus shell: outer radius as configured, inner radius reduced by
    // the wall thickness. The sweep centerline runs midway between them.
    let centerline_radius = config.radius - config.extrude_depth / 2.0;
    let centerline = sample_circle_profile(centerline_radius, config.segments.max(3));
    sweep_wall(
        &centerline,
        config.extrude_depth,
        config.extrude_height,
        true,
    )
}

fn build_spline(config: &standkit_core::SplineConfig) -> Result<MeshBuffer, GeometryError> {
    if config.control_points.len() < 2 {
        return Err(GeometryError::TooFewControlPoints {
            curve: "spline".to_string(),
            required: 2,
            actual: config.control_points.len(),
        });
    }
    if config.tube_radius <= 0.0 {
        return Err(GeometryError::NonPositiveParameter {
            parameter: "tube_radius".to_string(),
            value: config.tube_radius,
        });
    }

    let control: Vec<Point3<f64>> = config
        .control_points
        .iter()
        .map(|p| Point3::new(p.x, p.y, p.z))
        .collect();
    let path = sample_catmull_rom(&control, config.tubular_segments.max(2), config.closed);
    sweep_tube(
        &path,
        config.tube_radius,
        config.radial_segments.max(3),
        config.closed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use standkit_core::{ArcConfig, SplineConfig, Vec3};

    #[test]
    fn box_mesh_has_twelve_triangles() {
        let mesh = build_box_mesh(&Dimensions::new(2.0, 2.5, 0.1));
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangle_count(), 12);

        let (min, max) = mesh.bounding_box().unwrap();
        assert!((min.y).abs() < 1e-12);
        assert!((max.y - 2.5).abs() < 1e-12);
        assert!((max.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn arc_wall_spans_configured_height() {
        let build = build_curved_mesh(&CurveConfig::Arc(ArcConfig::default()));
        assert!(!build.is_fallback());
        let (min, max) = build.mesh.bounding_box().unwrap();
        assert!((max.y - 2.5).abs() < 1e-9);
        assert!(min.y.abs() < 1e-9);
    }

    #[test]
    fn arc_tube_is_built_when_tube_radius_is_set() {
        let build = build_curved_mesh(&CurveConfig::Arc(ArcConfig {
            tube_radius: Some(0.04),
            ..ArcConfig::default()
        }));
        assert!(!build.is_fallback());
        assert!(build.mesh.triangle_count() > 0);
    }

    #[test]
    fn invalid_radius_falls_back_to_unit_cube() {
        let build = build_curved_mesh(&CurveConfig::Arc(ArcConfig {
            radius: -1.0,
            ..ArcConfig::default()
        }));
        assert!(build.is_fallback());
        let (min, max) = build.mesh.bounding_box().unwrap();
        assert!((max.x - min.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn spline_with_one_point_falls_back() {
        let build = build_curved_mesh(&CurveConfig::Spline(SplineConfig {
            control_points: vec![Vec3::new(0.0, 0.0, 0.0)],
            tube_radius: 0.05,
            tubular_segments: 64,
            radial_segments: 16,
            closed: false,
        }));
        assert!(matches!(
            build.warning,
            Some(GeometryError::TooFewControlPoints { .. })
        ));
    }
}
