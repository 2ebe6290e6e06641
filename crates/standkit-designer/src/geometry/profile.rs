//! 2D profile sampling for extruded walls.
//!
//! Profiles live in the horizontal plane; a sample is an (x, z) pair in
//! meters. Arcs and circles use direct trigonometric evaluation; bezier
//! segments are sampled through `lyon::geom`.

use lyon::geom::{point, CubicBezierSegment, QuadraticBezierSegment};

use standkit_core::{GeometryError, Vec3};

/// Samples a circular arc of `radius` from `start_angle` to `end_angle`
/// into `segments + 1` points.
pub fn sample_arc_profile(
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    segments: usize,
) -> Vec<(f64, f64)> {
    let sweep = end_angle - start_angle;
    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let angle = start_angle + sweep * t;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Samples a full circle of `radius` into `segments` points (open-ended;
/// the sweep closes the loop).
pub fn sample_circle_profile(radius: f64, segments: usize) -> Vec<(f64, f64)> {
    (0..segments)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / segments as f64;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Samples a quadratic (3 control points) or cubic (4 control points)
/// bezier into `segments + 1` points. Control points are projected onto
/// the horizontal plane; extra points beyond the fourth are ignored.
///
/// # Errors
///
/// `GeometryError::TooFewControlPoints` below 3 points.
pub fn sample_bezier_profile(
    control_points: &[Vec3],
    segments: usize,
) -> Result<Vec<(f64, f64)>, GeometryError> {
    if control_points.len() < 3 {
        return Err(GeometryError::TooFewControlPoints {
            curve: "bezier".to_string(),
            required: 3,
            actual: control_points.len(),
        });
    }

    let sample: Box<dyn Fn(f64) -> lyon::geom::Point<f64>> = if control_points.len() == 3 {
        let seg = QuadraticBezierSegment {
            from: point(control_points[0].x, control_points[0].z),
            ctrl: point(control_points[1].x, control_points[1].z),
            to: point(control_points[2].x, control_points[2].z),
        };
        Box::new(move |t| seg.sample(t))
    } else {
        let seg = CubicBezierSegment {
            from: point(control_points[0].x, control_points[0].z),
            ctrl1: point(control_points[1].x, control_points[1].z),
            ctrl2: point(control_points[2].x, control_points[2].z),
            to: point(control_points[3].x, control_points[3].z),
        };
        Box::new(move |t| seg.sample(t))
    };

    Ok((0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let p = sample(t);
            (p.x, p.y)
        })
        .collect())
}
