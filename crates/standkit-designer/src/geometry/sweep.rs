//! Mesh sweeps: extruded walls from 2D profiles and tubes along 3D paths.

use nalgebra::{Point3, Vector3};

use standkit_core::GeometryError;

use super::MeshBuffer;

const EPSILON: f64 = 1e-9;

/// Sweeps a vertical wall along a 2D centerline.
///
/// The centerline is thickened by `thickness` (half on each side, along
/// the local normal) and extruded from y = 0 to `height`. Open centerlines
/// get end caps; `closed` centerlines wrap around (e.g. the circular
/// shell) and have none.
///
/// # Errors
///
/// `GeometryError::DegeneratePath` when the centerline collapses to a
/// point.
pub fn sweep_wall(
    centerline: &[(f64, f64)],
    thickness: f64,
    height: f64,
    closed: bool,
) -> Result<MeshBuffer, GeometryError> {
    if centerline.len() < 2 {
        return Err(GeometryError::DegeneratePath {
            reason: format!("{} centerline samples", centerline.len()),
        });
    }

    let normals = centerline_normals(centerline, closed)?;
    let half = thickness / 2.0;
    let n = centerline.len();

    let mut mesh = MeshBuffer::new();
    // Per sample: outer bottom, outer top, inner bottom, inner top.
    for (i, &(x, z)) in centerline.iter().enumerate() {
        let (nx, nz) = normals[i];
        let outer = (x + nx * half, z + nz * half);
        let inner = (x - nx * half, z - nz * half);
        mesh.push_vertex(Point3::new(outer.0, 0.0, outer.1));
        mesh.push_vertex(Point3::new(outer.0, height, outer.1));
        mesh.push_vertex(Point3::new(inner.0, 0.0, inner.1));
        mesh.push_vertex(Point3::new(inner.0, height, inner.1));
    }

    let segment_count = if closed { n } else { n - 1 };
    for i in 0..segment_count {
        let j = (i + 1) % n;
        let (ob_i, ot_i, ib_i, it_i) = sample_indices(i);
        let (ob_j, ot_j, ib_j, it_j) = sample_indices(j);

        // outer face
        mesh.push_triangle(ob_i, ob_j, ot_j);
        mesh.push_triangle(ob_i, ot_j, ot_i);
        // inner face
        mesh.push_triangle(ib_j, ib_i, it_i);
        mesh.push_triangle(ib_j, it_i, it_j);
        // top cap
        mesh.push_triangle(ot_i, ot_j, it_j);
        mesh.push_triangle(ot_i, it_j, it_i);
        // bottom cap
        mesh.push_triangle(ob_j, ob_i, ib_i);
        mesh.push_triangle(ob_j, ib_i, ib_j);
    }

    if !closed {
        let (ob, ot, ib, it) = sample_indices(0);
        mesh.push_triangle(ob, ot, it);
        mesh.push_triangle(ob, it, ib);
        let (ob, ot, ib, it) = sample_indices(n - 1);
        mesh.push_triangle(ob, ib, it);
        mesh.push_triangle(ob, it, ot);
    }

    Ok(mesh)
}

fn sample_indices(i: usize) -> (u32, u32, u32, u32) {
    let base = (i * 4) as u32;
    (base, base + 1, base + 2, base + 3)
}

/// Per-sample unit normals in the horizontal plane, averaging adjacent
/// segment normals so the thickened band stays smooth around corners.
fn centerline_normals(
    centerline: &[(f64, f64)],
    closed: bool,
) -> Result<Vec<(f64, f64)>, GeometryError> {
    let n = centerline.len();
    let segment_normal = |a: (f64, f64), b: (f64, f64)| -> Option<(f64, f64)> {
        let dx = b.0 - a.0;
        let dz = b.1 - a.1;
        let len = dx.hypot(dz);
        if len < EPSILON {
            None
        } else {
            // Left-hand normal of the direction of travel.
            Some((-dz / len, dx / len))
        }
    };

    let mut normals = Vec::with_capacity(n);
    for i in 0..n {
        let prev = if i > 0 {
            Some((centerline[i - 1], centerline[i]))
        } else if closed {
            Some((centerline[n - 1], centerline[0]))
        } else {
            None
        };
        let next = if i + 1 < n {
            Some((centerline[i], centerline[i + 1]))
        } else if closed {
            Some((centerline[n - 1], centerline[0]))
        } else {
            None
        };

        let before = prev.and_then(|(a, b)| segment_normal(a, b));
        let after = next.and_then(|(a, b)| segment_normal(a, b));
        let normal = match (before, after) {
            (Some(a), Some(b)) => {
                let sum = (a.0 + b.0, a.1 + b.1);
                let len = sum.0.hypot(sum.1);
                if len < EPSILON {
                    a
                } else {
                    (sum.0 / len, sum.1 / len)
                }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => {
                return Err(GeometryError::DegeneratePath {
                    reason: "centerline collapses to a point".to_string(),
                })
            }
        };
        normals.push(normal);
    }
    Ok(normals)
}

/// Sweeps a tube of `radius` along a 3D path.
///
/// Frames are propagated along the path so the cross-section does not
/// twist; `closed` paths connect the last ring back to the first. Open
/// tube ends are left uncapped.
///
/// # Errors
///
/// `GeometryError::DegeneratePath` when consecutive path points coincide
/// everywhere.
pub fn sweep_tube(
    path: &[Point3<f64>],
    radius: f64,
    radial_segments: usize,
    closed: bool,
) -> Result<MeshBuffer, GeometryError> {
    if path.len() < 2 {
        return Err(GeometryError::DegeneratePath {
            reason: format!("{} path samples", path.len()),
        });
    }

    let tangents = path_tangents(path, closed)?;

    // Initial frame: any unit vector perpendicular to the first tangent.
    let mut normal = perpendicular(&tangents[0]);
    let mut rings: Vec<u32> = Vec::new();
    let mut mesh = MeshBuffer::new();

    for (i, center) in path.iter().enumerate() {
        let tangent = tangents[i];
        // Project the previous normal off the tangent to keep frames
        // rotation-minimizing.
        let projected = normal - tangent * normal.dot(&tangent);
        normal = if projected.norm() < EPSILON {
            perpendicular(&tangent)
        } else {
            projected.normalize()
        };
        let binormal = tangent.cross(&normal);

        for s in 0..radial_segments {
            let theta = std::f64::consts::TAU * s as f64 / radial_segments as f64;
            let offset = normal * (radius * theta.cos()) + binormal * (radius * theta.sin());
            let idx = mesh.push_vertex(center + offset);
            if s == 0 {
                rings.push(idx);
            }
        }
    }

    let ring_count = path.len();
    let segment_count = if closed { ring_count } else { ring_count - 1 };
    for i in 0..segment_count {
        let j = (i + 1) % ring_count;
        let ring_i = rings[i];
        let ring_j = rings[j];
        for s in 0..radial_segments {
            let s_next = (s + 1) % radial_segments;
            let a = ring_i + s as u32;
            let b = ring_i + s_next as u32;
            let c = ring_j + s_next as u32;
            let d = ring_j + s as u32;
            mesh.push_triangle(a, b, c);
            mesh.push_triangle(a, c, d);
        }
    }

    Ok(mesh)
}

/// Per-sample unit tangents; interior samples use the central difference.
fn path_tangents(
    path: &[Point3<f64>],
    closed: bool,
) -> Result<Vec<Vector3<f64>>, GeometryError> {
    let n = path.len();
    let mut tangents = Vec::with_capacity(n);
    let mut last_valid: Option<Vector3<f64>> = None;

    for i in 0..n {
        let prev = if i > 0 {
            path[i - 1]
        } else if closed {
            path[n - 1]
        } else {
            path[0]
        };
        let next = if i + 1 < n {
            path[i + 1]
        } else if closed {
            path[0]
        } else {
            path[n - 1]
        };
        let diff = next - prev;
        if diff.norm() < EPSILON {
            tangents.push(Vector3::zeros());
        } else {
            let t = diff.normalize();
            last_valid = Some(t);
            tangents.push(t);
        }
    }

    let fallback = last_valid.ok_or_else(|| GeometryError::DegeneratePath {
        reason: "all path samples coincide".to_string(),
    })?;
    for t in &mut tangents {
        if t.norm() < EPSILON {
            *t = fallback;
        }
    }
    Ok(tangents)
}

/// Any unit vector perpendicular to `v`.
fn perpendicular(v: &Vector3<f64>) -> Vector3<f64> {
    let reference = if v.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    v.cross(&reference).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_sweep_counts_open_faces() {
        let centerline = vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
        let mesh = sweep_wall(&centerline, 0.1, 2.5, false).unwrap();
        // 2 segments x 8 triangles + 2 end caps x 2 triangles
        assert_eq!(mesh.triangle_count(), 20);
        assert_eq!(mesh.vertices.len(), 12);
    }

    #[test]
    fn closed_wall_sweep_has_no_end_caps() {
        let centerline: Vec<(f64, f64)> = (0..16)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / 16.0;
                (a.cos(), a.sin())
            })
            .collect();
        let mesh = sweep_wall(&centerline, 0.1, 2.0, true).unwrap();
        assert_eq!(mesh.triangle_count(), 16 * 8);
    }

    #[test]
    fn tube_ring_vertices_sit_on_radius() {
        let path = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let mesh = sweep_tube(&path, 0.25, 8, false).unwrap();
        assert_eq!(mesh.vertices.len(), 3 * 8);
        for v in &mesh.vertices {
            let r = v.y.hypot(v.z);
            assert!((r - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn degenerate_path_is_reported() {
        let path = vec![Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, 1.0, 1.0)];
        assert!(matches!(
            sweep_tube(&path, 0.1, 8, false),
            Err(GeometryError::DegeneratePath { .. })
        ));
    }
}
