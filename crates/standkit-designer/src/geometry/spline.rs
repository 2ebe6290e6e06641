//! Catmull-Rom interpolation for spline tube paths.

use nalgebra::Point3;

/// Samples a Catmull-Rom spline through the control points.
///
/// The curve interpolates every control point. Open curves clamp their end
/// tangents by duplicating the first and last points; closed curves wrap.
/// Returns `segments + 1` samples for open curves and `segments` for
/// closed ones (the sweep closes the loop).
pub fn sample_catmull_rom(
    control_points: &[Point3<f64>],
    segments: usize,
    closed: bool,
) -> Vec<Point3<f64>> {
    let n = control_points.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![control_points[0]];
    }

    let point_at = |i: isize| -> Point3<f64> {
        if closed {
            let idx = i.rem_euclid(n as isize) as usize;
            control_points[idx]
        } else {
            let idx = i.clamp(0, n as isize - 1) as usize;
            control_points[idx]
        }
    };

    let span_count = if closed { n } else { n - 1 };
    let sample_count = if closed { segments } else { segments + 1 };

    (0..sample_count)
        .map(|s| {
            let u = s as f64 / segments as f64 * span_count as f64;
            let span = (u.floor() as isize).min(span_count as isize - 1);
            let t = u - span as f64;

            let p0 = point_at(span - 1);
            let p1 = point_at(span);
            let p2 = point_at(span + 1);
            let p3 = point_at(span + 2);
            catmull_rom(p0, p1, p2, p3, t)
        })
        .collect()
}

/// One Catmull-Rom span evaluation (uniform parameterization, tension 0.5).
fn catmull_rom(
    p0: Point3<f64>,
    p1: Point3<f64>,
    p2: Point3<f64>,
    p3: Point3<f64>,
    t: f64,
) -> Point3<f64> {
    let t2 = t * t;
    let t3 = t2 * t;

    let blend = |a: f64, b: f64, c: f64, d: f64| -> f64 {
        0.5 * ((2.0 * b)
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };

    Point3::new(
        blend(p0.x, p1.x, p2.x, p3.x),
        blend(p0.y, p1.y, p2.y, p3.y),
        blend(p0.z, p1.z, p2.z, p3.z),
    )
}
