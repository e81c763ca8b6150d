//! Primitive pairwise intersection routines for segments and arcs.
//!
//! All functions return local parameters in `[0, 1]` on each primitive
//! and report nothing for parallel, disjoint, or degenerate inputs.

use super::angle::sweep_fraction;
use super::{Point2, Vector2, TOLERANCE};

/// Bounded segment-segment intersection.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = a0 + da * t_clamped;
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Intersection of a line segment with a circular arc.
///
/// The arc has the given `center`, `radius`, `start_angle`, and signed
/// `sweep`. Returns `(point, t_seg, t_arc)` tuples with both parameters
/// in `[0, 1]`.
#[must_use]
pub fn segment_arc(
    a0: &Point2,
    a1: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    if radius < TOLERANCE || sweep.abs() < TOLERANCE {
        return results;
    }

    let d: Vector2 = a1 - a0;
    let seg_len_sq = d.norm_squared();
    if seg_len_sq < TOLERANCE * TOLERANCE {
        return results;
    }

    // Substitute the parametric segment into the circle equation:
    // (a0 + t*d - center)² = r²
    let f: Vector2 = a0 - center;
    let a = seg_len_sq;
    let b = 2.0 * f.dot(&d);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return results;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let eps = TOLERANCE;
    let t_roots = if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent case: single root.
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    };

    for t_seg in t_roots {
        if t_seg < -eps || t_seg > 1.0 + eps {
            continue;
        }
        let t_seg = t_seg.clamp(0.0, 1.0);
        let pt = a0 + d * t_seg;

        // Keep only hits within the arc's angular range.
        let angle = (pt.y - center.y).atan2(pt.x - center.x);
        if let Some(t_arc) = sweep_fraction(angle, start_angle, sweep) {
            results.push((pt, t_seg, t_arc));
        }
    }

    results
}

/// Intersection of two circular arcs.
///
/// Returns `(point, t1, t2)` tuples with both arc parameters in `[0, 1]`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn arc_arc(
    c1: &Point2,
    r1: f64,
    start1: f64,
    sweep1: f64,
    c2: &Point2,
    r2: f64,
    start2: f64,
    sweep2: f64,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    if r1 < TOLERANCE || r2 < TOLERANCE {
        return results;
    }

    let d: Vector2 = c2 - c1;
    let dist_sq = d.norm_squared();
    let dist = dist_sq.sqrt();

    if dist < TOLERANCE {
        // Concentric circles: no discrete intersection points.
        return results;
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if dist > sum + TOLERANCE || dist < diff - TOLERANCE {
        return results;
    }

    // Distance from c1 along the line c1→c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h_sq = r1 * r1 - a * a;
    if h_sq < -TOLERANCE {
        return results;
    }
    let h = h_sq.max(0.0).sqrt();

    // Midpoint on the radical line, and the perpendicular direction.
    let m = c1 + d * (a / dist);
    let perp = Vector2::new(-d.y / dist, d.x / dist);

    let candidates = if h < TOLERANCE {
        vec![m]
    } else {
        vec![m + perp * h, m - perp * h]
    };

    let eps = TOLERANCE;
    for pt in candidates {
        let angle1 = (pt.y - c1.y).atan2(pt.x - c1.x);
        let angle2 = (pt.y - c2.y).atan2(pt.x - c2.x);

        let t1 = sweep_fraction(angle1, start1, sweep1);
        let t2 = sweep_fraction(angle2, start2, sweep2);

        if let (Some(t1), Some(t2)) = (t1, t2) {
            // Verify the point really lies on both circles.
            let d1 = (pt - c1).norm();
            let d2 = (pt - c2).norm();
            if (d1 - r1).abs() < eps && (d2 - r2).abs() < eps {
                results.push((pt, t1, t2));
            }
        }
    }

    results
}
