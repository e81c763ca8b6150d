//! Pairwise intersection dispatch between two simplexes.

use crate::geometry::simplex::{Simplex, SimplexKind};
use crate::math::intersect::{arc_arc, segment_arc, segment_segment};

/// Computes all period pairs `(period_a, period_b)` where the two
/// simplexes cross in space.
///
/// Each primitive hit's local parameter is mapped back to a period via
/// `period = start + (end - start) * ratio`. Degenerate or
/// non-intersecting inputs produce an empty result, never an error.
#[must_use]
pub fn intersection_periods(a: &Simplex, b: &Simplex) -> Vec<(f64, f64)> {
    let hits: Vec<(f64, f64)> = match (*a.kind(), *b.kind()) {
        (
            SimplexKind::Line {
                start: a0,
                end: a1,
            },
            SimplexKind::Line {
                start: b0,
                end: b1,
            },
        ) => segment_segment(&a0, &a1, &b0, &b1)
            .map(|(_, t, u)| vec![(t, u)])
            .unwrap_or_default(),
        (
            SimplexKind::Line {
                start: a0,
                end: a1,
            },
            SimplexKind::Arc {
                center,
                radius,
                start_angle,
                sweep,
            },
        ) => segment_arc(&a0, &a1, &center, radius, start_angle, sweep)
            .into_iter()
            .map(|(_, t_seg, t_arc)| (t_seg, t_arc))
            .collect(),
        (
            SimplexKind::Arc {
                center,
                radius,
                start_angle,
                sweep,
            },
            SimplexKind::Line {
                start: b0,
                end: b1,
            },
        ) => {
            // segment_arc reports (t_seg, t_arc); swap the roles here.
            segment_arc(&b0, &b1, &center, radius, start_angle, sweep)
                .into_iter()
                .map(|(_, t_seg, t_arc)| (t_arc, t_seg))
                .collect()
        }
        (
            SimplexKind::Arc {
                center: c1,
                radius: r1,
                start_angle: s1,
                sweep: sw1,
            },
            SimplexKind::Arc {
                center: c2,
                radius: r2,
                start_angle: s2,
                sweep: sw2,
            },
        ) => arc_arc(&c1, r1, s1, sw1, &c2, r2, s2, sw2)
            .into_iter()
            .map(|(_, t1, t2)| (t1, t2))
            .collect(),
    };

    hits.into_iter()
        .map(|(t, u)| (a.periods().lerp(t), b.periods().lerp(u)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::period::PeriodRange;
    use crate::math::Point2;
    use std::f64::consts::PI;

    #[test]
    fn line_line_crossing_maps_to_periods() {
        let a = Simplex::line(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            PeriodRange::new(0.0, 0.5),
        );
        let b = Simplex::line(
            Point2::new(0.0, 2.0),
            Point2::new(2.0, 0.0),
            PeriodRange::new(0.25, 0.75),
        );
        let hits = intersection_periods(&a, &b);
        assert_eq!(hits.len(), 1);
        // Crossing at the midpoint of both: periods 0.25 and 0.5.
        assert!((hits[0].0 - 0.25).abs() < 1e-9, "pa={}", hits[0].0);
        assert!((hits[0].1 - 0.5).abs() < 1e-9, "pb={}", hits[0].1);
    }

    #[test]
    fn line_arc_entrance_and_exit() {
        let line = Simplex::line(
            Point2::new(-2.0, 0.0),
            Point2::new(2.0, 0.0),
            PeriodRange::new(0.0, 1.0),
        );
        let arc = Simplex::arc(Point2::origin(), 1.0, 0.0, PI, PeriodRange::new(0.0, 1.0));
        let hits = intersection_periods(&line, &arc);
        assert_eq!(hits.len(), 2, "hits={hits:?}");
    }

    #[test]
    fn arc_line_swaps_roles() {
        let line = Simplex::line(
            Point2::new(-2.0, 0.5),
            Point2::new(2.0, 0.5),
            PeriodRange::new(0.0, 1.0),
        );
        let arc = Simplex::arc(Point2::origin(), 1.0, 0.0, PI, PeriodRange::new(0.0, 1.0));

        let forward = intersection_periods(&line, &arc);
        let swapped = intersection_periods(&arc, &line);
        assert_eq!(forward.len(), swapped.len());
        for (pa, pb) in &forward {
            assert!(
                swapped
                    .iter()
                    .any(|(qa, qb)| (qa - pb).abs() < 1e-9 && (qb - pa).abs() < 1e-9),
                "missing swapped pair for ({pa}, {pb})"
            );
        }
    }

    #[test]
    fn intersection_points_agree_under_swap() {
        let a = Simplex::arc(Point2::origin(), 1.0, -PI, 2.0 * PI, PeriodRange::new(0.0, 1.0));
        let b = Simplex::arc(
            Point2::new(1.0, 0.0),
            1.0,
            0.0,
            2.0 * PI,
            PeriodRange::new(0.0, 1.0),
        );

        let forward = intersection_periods(&a, &b);
        let swapped = intersection_periods(&b, &a);
        assert_eq!(forward.len(), 2);
        for (pa, pb) in &forward {
            let p = a.compute(*pa);
            let q = b.compute(*pb);
            assert!((p - q).norm() < 1e-6, "periods disagree spatially: {p:?} vs {q:?}");
            assert!(
                swapped
                    .iter()
                    .any(|(qa, qb)| (b.compute(*qa) - p).norm() < 1e-6
                        && (a.compute(*qb) - q).norm() < 1e-6),
                "swap symmetry violated"
            );
        }
    }

    #[test]
    fn degenerate_inputs_are_empty() {
        let point_line = Simplex::line(Point2::origin(), Point2::origin(), PeriodRange::new(0.0, 1.0));
        let arc = Simplex::arc(Point2::origin(), 1.0, 0.0, PI, PeriodRange::new(0.0, 1.0));
        assert!(intersection_periods(&point_line, &arc).is_empty());

        let zero_arc = Simplex::arc(Point2::origin(), 0.0, 0.0, PI, PeriodRange::new(0.0, 1.0));
        assert!(intersection_periods(&zero_arc, &arc).is_empty());
    }

    #[test]
    fn parallel_lines_are_empty() {
        let a = Simplex::line(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            PeriodRange::new(0.0, 1.0),
        );
        let b = Simplex::line(
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            PeriodRange::new(0.0, 1.0),
        );
        assert!(intersection_periods(&a, &b).is_empty());
    }
}
