use crate::math::bounds::Aabb;
use crate::math::period::PeriodRange;
use crate::math::{Point2, TOLERANCE};

/// The underlying primitive geometry of a [`Simplex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimplexKind {
    /// A straight segment between two points.
    Line {
        /// Start point of the segment.
        start: Point2,
        /// End point of the segment.
        end: Point2,
    },
    /// A circular arc swept from `start_angle` by the signed `sweep`.
    Arc {
        /// Center of the arc circle.
        center: Point2,
        /// Radius of the arc circle.
        radius: f64,
        /// Absolute angle of the arc start, in radians.
        start_angle: f64,
        /// Signed sweep angle in radians; positive is counter-clockwise.
        sweep: f64,
    },
}

/// One atomic piece of a periodic curve: a line segment or circular arc
/// tagged with the half-open period interval it occupies along its
/// parent curve.
///
/// A period inside the interval maps to a point by linearly remapping
/// into the primitive's own local parameter: a line fraction for
/// segments, an angle fraction for arcs (arc-length-agnostic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplex {
    kind: SimplexKind,
    periods: PeriodRange,
}

impl Simplex {
    /// Creates a line simplex over the given period interval.
    #[must_use]
    pub fn line(start: Point2, end: Point2, periods: PeriodRange) -> Self {
        Self {
            kind: SimplexKind::Line { start, end },
            periods,
        }
    }

    /// Creates an arc simplex over the given period interval.
    #[must_use]
    pub fn arc(
        center: Point2,
        radius: f64,
        start_angle: f64,
        sweep: f64,
        periods: PeriodRange,
    ) -> Self {
        Self {
            kind: SimplexKind::Arc {
                center,
                radius,
                start_angle,
                sweep,
            },
            periods,
        }
    }

    /// The primitive geometry of this simplex.
    #[must_use]
    pub fn kind(&self) -> &SimplexKind {
        &self.kind
    }

    /// The period interval this simplex occupies.
    #[must_use]
    pub fn periods(&self) -> PeriodRange {
        self.periods
    }

    /// Start of the period interval.
    #[must_use]
    pub fn start_period(&self) -> f64 {
        self.periods.start
    }

    /// End of the period interval (exclusive).
    #[must_use]
    pub fn end_period(&self) -> f64 {
        self.periods.end
    }

    /// Same geometry, re-tagged with a new period interval.
    #[must_use]
    pub fn with_periods(&self, periods: PeriodRange) -> Self {
        Self {
            kind: self.kind,
            periods,
        }
    }

    /// Evaluates the primitive at a local fraction `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at_fraction(&self, t: f64) -> Point2 {
        match self.kind {
            SimplexKind::Line { start, end } => start + (end - start) * t,
            SimplexKind::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let angle = start_angle + sweep * t;
                Point2::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            }
        }
    }

    /// Maps a period to a spatial point.
    ///
    /// Periods outside the simplex's interval are clamped to it.
    #[must_use]
    pub fn compute(&self, period: f64) -> Point2 {
        self.point_at_fraction(self.periods.fraction_of(period))
    }

    /// The point at the start of the period interval.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at_fraction(0.0)
    }

    /// The point at the end of the period interval.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at_fraction(1.0)
    }

    /// Arc length: exact for lines, `|sweep| * radius` for arcs.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self.kind {
            SimplexKind::Line { start, end } => (end - start).norm(),
            SimplexKind::Arc { radius, sweep, .. } => sweep.abs() * radius,
        }
    }

    /// Squared arc length.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        let len = self.length();
        len * len
    }

    /// Axis-aligned bounding box of the primitive.
    ///
    /// For arcs, the endpoints are extended by every axis extreme
    /// (angles `0, π/2, π, 3π/2`) covered by the sweep.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        match self.kind {
            SimplexKind::Line { start, end } => Aabb::from_corners(start, end),
            SimplexKind::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let mut aabb = Aabb::from_corners(self.start_point(), self.end_point());
                for (a0, a1) in monotone_arc_splits(start_angle, sweep) {
                    // Every split boundary is either an endpoint or an
                    // axis extreme of the circle.
                    for angle in [a0, a1] {
                        aabb.expand(Point2::new(
                            center.x + radius * angle.cos(),
                            center.y + radius * angle.sin(),
                        ));
                    }
                }
                aabb
            }
        }
    }

    /// Restricts the simplex to the overlap of its own interval with
    /// `range`, returning the sub-piece or `None` when disjoint.
    ///
    /// Arc clamping recomputes the start angle and sweep from the new
    /// period fractions.
    #[must_use]
    pub fn clamp(&self, range: PeriodRange) -> Option<Self> {
        let overlap = self.periods.intersection(&range)?;
        let t0 = self.periods.fraction_of(overlap.start);
        let t1 = self.periods.fraction_of(overlap.end);

        let kind = match self.kind {
            SimplexKind::Line { .. } => SimplexKind::Line {
                start: self.point_at_fraction(t0),
                end: self.point_at_fraction(t1),
            },
            SimplexKind::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => SimplexKind::Arc {
                center,
                radius,
                start_angle: start_angle + sweep * t0,
                sweep: sweep * (t1 - t0),
            },
        };

        Some(Self {
            kind,
            periods: overlap,
        })
    }

    /// Same trace with reversed direction, keeping the period interval.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let kind = match self.kind {
            SimplexKind::Line { start, end } => SimplexKind::Line {
                start: end,
                end: start,
            },
            SimplexKind::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => SimplexKind::Arc {
                center,
                radius,
                start_angle: start_angle + sweep,
                sweep: -sweep,
            },
        };
        Self {
            kind,
            periods: self.periods,
        }
    }
}

/// Splits an arc's angular range at every axis extreme of its circle
/// (angles of the form `k * π/2`), yielding consecutive `(from, to)`
/// angle pairs that are monotone in both `x` and `y`.
pub(crate) fn monotone_arc_splits(start_angle: f64, sweep: f64) -> Vec<(f64, f64)> {
    use std::f64::consts::FRAC_PI_2;

    let mut boundaries = vec![start_angle];
    let end = start_angle + sweep;
    let dir = if sweep >= 0.0 { 1.0 } else { -1.0 };

    // First multiple of π/2 strictly beyond the start in the sweep direction.
    let mut k = if dir > 0.0 {
        (start_angle / FRAC_PI_2).floor() + 1.0
    } else {
        (start_angle / FRAC_PI_2).ceil() - 1.0
    };
    loop {
        let critical = k * FRAC_PI_2;
        if (critical - end) * dir >= -TOLERANCE {
            break;
        }
        if (critical - start_angle) * dir > TOLERANCE {
            boundaries.push(critical);
        }
        k += dir;
    }
    boundaries.push(end);

    boundaries.windows(2).map(|w| (w[0], w[1])).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn unit_range() -> PeriodRange {
        PeriodRange::new(0.0, 1.0)
    }

    #[test]
    fn line_compute_remaps_period() {
        let s = Simplex::line(
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 5.0),
            PeriodRange::new(0.5, 1.0),
        );
        let mid = s.compute(0.75);
        assert!((mid.x - 2.0).abs() < TOLERANCE, "x={}", mid.x);
        assert!((mid.y - 3.0).abs() < TOLERANCE, "y={}", mid.y);
        // Out-of-range periods clamp to the interval.
        let clamped = s.compute(0.1);
        assert!((clamped - s.start_point()).norm() < TOLERANCE);
    }

    #[test]
    fn arc_compute_maps_to_angle_fraction() {
        // CCW quarter arc of the unit circle, first quadrant.
        let s = Simplex::arc(Point2::origin(), 1.0, 0.0, FRAC_PI_2, unit_range());
        let mid = s.compute(0.5);
        let expected = (PI / 4.0).cos();
        assert!((mid.x - expected).abs() < 1e-9, "x={}", mid.x);
        assert!((mid.y - expected).abs() < 1e-9, "y={}", mid.y);
    }

    #[test]
    fn lengths() {
        let line = Simplex::line(Point2::origin(), Point2::new(3.0, 4.0), unit_range());
        assert!((line.length() - 5.0).abs() < TOLERANCE);
        assert!((line.length_squared() - 25.0).abs() < TOLERANCE);

        let arc = Simplex::arc(Point2::origin(), 2.0, 0.0, PI, unit_range());
        assert!((arc.length() - 2.0 * PI).abs() < TOLERANCE);
    }

    #[test]
    fn arc_bounding_box_includes_axis_extremes() {
        // CCW semicircle over the top of the unit circle: from angle 0 to π.
        let s = Simplex::arc(Point2::origin(), 1.0, 0.0, PI, unit_range());
        let b = s.bounding_box();
        assert!((b.min.x + 1.0).abs() < 1e-9, "min.x={}", b.min.x);
        assert!(b.min.y.abs() < 1e-9, "min.y={}", b.min.y);
        assert!((b.max.x - 1.0).abs() < 1e-9, "max.x={}", b.max.x);
        assert!((b.max.y - 1.0).abs() < 1e-9, "max.y={}", b.max.y);
    }

    #[test]
    fn cw_arc_bounding_box() {
        // CW quarter arc from angle π/2 down to 0.
        let s = Simplex::arc(Point2::origin(), 2.0, FRAC_PI_2, -FRAC_PI_2, unit_range());
        let b = s.bounding_box();
        assert!(b.min.x.abs() < 1e-9);
        assert!(b.min.y.abs() < 1e-9);
        assert!((b.max.x - 2.0).abs() < 1e-9);
        assert!((b.max.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_line_sub_piece() {
        let s = Simplex::line(Point2::origin(), Point2::new(4.0, 0.0), unit_range());
        let c = s.clamp(PeriodRange::new(0.25, 0.75)).unwrap();
        assert!((c.start_point().x - 1.0).abs() < TOLERANCE);
        assert!((c.end_point().x - 3.0).abs() < TOLERANCE);
        assert!((c.start_period() - 0.25).abs() < TOLERANCE);
        assert!((c.end_period() - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn clamp_arc_recomputes_angles() {
        let s = Simplex::arc(Point2::origin(), 1.0, 0.0, PI, unit_range());
        let c = s.clamp(PeriodRange::new(0.5, 1.0)).unwrap();
        match *c.kind() {
            SimplexKind::Arc {
                start_angle, sweep, ..
            } => {
                assert!((start_angle - FRAC_PI_2).abs() < 1e-9, "sa={start_angle}");
                assert!((sweep - FRAC_PI_2).abs() < 1e-9, "sw={sweep}");
            }
            SimplexKind::Line { .. } => panic!("clamped arc must stay an arc"),
        }
    }

    #[test]
    fn clamp_disjoint_range() {
        let s = Simplex::line(Point2::origin(), Point2::new(1.0, 0.0), PeriodRange::new(0.0, 0.5));
        assert!(s.clamp(PeriodRange::new(0.5, 1.0)).is_none());
        assert!(s.clamp(PeriodRange::new(0.7, 1.0)).is_none());
    }

    #[test]
    fn clamp_is_idempotent_under_composition() {
        let s = Simplex::arc(Point2::new(1.0, 2.0), 3.0, 0.3, 2.0, unit_range());
        let r1 = PeriodRange::new(0.2, 0.9);
        let r2 = PeriodRange::new(0.4, 0.7);
        let composed = s.clamp(r1).unwrap().clamp(r2).unwrap();
        let direct = s.clamp(r1.intersection(&r2).unwrap()).unwrap();

        assert!((composed.start_period() - direct.start_period()).abs() < 1e-9);
        assert!((composed.end_period() - direct.end_period()).abs() < 1e-9);
        assert!((composed.start_point() - direct.start_point()).norm() < 1e-9);
        assert!((composed.end_point() - direct.end_point()).norm() < 1e-9);
    }

    #[test]
    fn reversed_swaps_trace_direction() {
        let arc = Simplex::arc(Point2::origin(), 1.0, 0.0, FRAC_PI_2, unit_range());
        let rev = arc.reversed();
        assert!((rev.start_point() - arc.end_point()).norm() < 1e-9);
        assert!((rev.end_point() - arc.start_point()).norm() < 1e-9);

        let line = Simplex::line(Point2::origin(), Point2::new(1.0, 0.0), unit_range());
        let rev = line.reversed();
        assert!((rev.start_point().x - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn monotone_splits_cover_sweep() {
        let splits = monotone_arc_splits(0.0, PI);
        // Split at π/2 only.
        assert_eq!(splits.len(), 2, "splits={splits:?}");
        assert!((splits[0].1 - FRAC_PI_2).abs() < TOLERANCE);

        let cw = monotone_arc_splits(PI, -PI);
        assert_eq!(cw.len(), 2, "splits={cw:?}");
    }
}
