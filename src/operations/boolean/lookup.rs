//! Precomputed, sorted intersection index for a pair of curves.

use crate::geometry::curve::PeriodicCurve;
use crate::math::period::forward_distance;
use crate::math::Point2;

use super::intersections::intersection_periods;

/// One crossing between the two curves: the period on each curve plus
/// the shared spatial point.
///
/// Tangencies and multiple crossings are legal; uniqueness per curve
/// pair is not guaranteed.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    /// Period of the crossing on the left-hand curve.
    pub lhs_period: f64,
    /// Period of the crossing on the right-hand curve.
    pub rhs_period: f64,
    /// The shared spatial point.
    pub point: Point2,
}

/// Position of a boundary walk: which curve is being traced, and the
/// corresponding periods on *both* curves.
///
/// The inactive curve's period is only meaningful once an intersection
/// has been crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraversalState {
    /// Tracing the left-hand curve.
    OnLhs {
        /// Current period on the left-hand curve.
        lhs_period: f64,
        /// Last known period on the right-hand curve.
        rhs_period: f64,
    },
    /// Tracing the right-hand curve.
    OnRhs {
        /// Last known period on the left-hand curve.
        lhs_period: f64,
        /// Current period on the right-hand curve.
        rhs_period: f64,
    },
}

impl TraversalState {
    /// Whether the left-hand curve is the active one.
    #[must_use]
    pub fn is_on_lhs(&self) -> bool {
        matches!(self, Self::OnLhs { .. })
    }

    /// The period on the curve currently being traced.
    #[must_use]
    pub fn active_period(&self) -> f64 {
        match *self {
            Self::OnLhs { lhs_period, .. } => lhs_period,
            Self::OnRhs { rhs_period, .. } => rhs_period,
        }
    }

    /// Same side, with the active curve's period replaced.
    #[must_use]
    pub fn with_active_period(self, period: f64) -> Self {
        match self {
            Self::OnLhs { rhs_period, .. } => Self::OnLhs {
                lhs_period: period,
                rhs_period,
            },
            Self::OnRhs { lhs_period, .. } => Self::OnRhs {
                lhs_period,
                rhs_period: period,
            },
        }
    }

    /// Same side, with both periods taken from an intersection.
    #[must_use]
    fn at_intersection(self, ix: &Intersection) -> Self {
        match self {
            Self::OnLhs { .. } => Self::OnLhs {
                lhs_period: ix.lhs_period,
                rhs_period: ix.rhs_period,
            },
            Self::OnRhs { .. } => Self::OnRhs {
                lhs_period: ix.lhs_period,
                rhs_period: ix.rhs_period,
            },
        }
    }

    /// The opposite side, keeping both periods.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::OnLhs {
                lhs_period,
                rhs_period,
            } => Self::OnRhs {
                lhs_period,
                rhs_period,
            },
            Self::OnRhs {
                lhs_period,
                rhs_period,
            } => Self::OnLhs {
                lhs_period,
                rhs_period,
            },
        }
    }
}

/// Every intersection between two whole curves, computed once,
/// deduplicated by spatial proximity, and indexed in period order on
/// both curves with wraparound-aware next/previous queries.
#[derive(Debug)]
pub struct IntersectionLookup<'a> {
    lhs: &'a PeriodicCurve,
    rhs: &'a PeriodicCurve,
    tolerance: f64,
    intersections: Vec<Intersection>,
}

impl<'a> IntersectionLookup<'a> {
    /// Builds the lookup with an exhaustive pass over all simplex pairs.
    #[must_use]
    pub fn build(lhs: &'a PeriodicCurve, rhs: &'a PeriodicCurve, tolerance: f64) -> Self {
        let mut intersections: Vec<Intersection> = Vec::new();
        for sa in lhs.simplexes() {
            for sb in rhs.simplexes() {
                for (lhs_period, rhs_period) in intersection_periods(sa, sb) {
                    let point = sa.compute(lhs_period);
                    let duplicate = intersections
                        .iter()
                        .any(|ix| (ix.point - point).norm() < tolerance);
                    if !duplicate {
                        intersections.push(Intersection {
                            lhs_period,
                            rhs_period,
                            point,
                        });
                    }
                }
            }
        }
        intersections.sort_by(|a, b| {
            a.lhs_period
                .partial_cmp(&b.lhs_period)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self {
            lhs,
            rhs,
            tolerance,
            intersections,
        }
    }

    /// The left-hand curve.
    #[must_use]
    pub fn lhs(&self) -> &'a PeriodicCurve {
        self.lhs
    }

    /// The right-hand curve.
    #[must_use]
    pub fn rhs(&self) -> &'a PeriodicCurve {
        self.rhs
    }

    /// The deduplication / matching tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// All intersections, ordered by period on the left-hand curve.
    #[must_use]
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    /// Whether the curves never cross.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    /// Number of distinct crossings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    /// The curve the state is currently tracing.
    fn active_curve(&self, state: TraversalState) -> &'a PeriodicCurve {
        if state.is_on_lhs() {
            self.lhs
        } else {
            self.rhs
        }
    }

    fn period_on_active(&self, ix: &Intersection, on_lhs: bool) -> f64 {
        if on_lhs {
            ix.lhs_period
        } else {
            ix.rhs_period
        }
    }

    /// The earliest intersection strictly after the active period,
    /// wrapping to the first when none is greater. The result stays on
    /// the same curve; flipping is the traversal's decision.
    ///
    /// Returns `None` when the curves never cross.
    #[must_use]
    pub fn next(&self, state: TraversalState) -> Option<TraversalState> {
        let curve = self.active_curve(state);
        let span = curve.period_span();
        let reference = state.active_period();
        let on_lhs = state.is_on_lhs();

        self.intersections
            .iter()
            .min_by(|a, b| {
                let da = forward_distance(span, reference, self.period_on_active(a, on_lhs));
                let db = forward_distance(span, reference, self.period_on_active(b, on_lhs));
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|ix| state.at_intersection(ix))
    }

    /// The latest intersection strictly before the active period
    /// (wrapping backwards).
    ///
    /// Returns `None` when the curves never cross.
    #[must_use]
    pub fn previous(&self, state: TraversalState) -> Option<TraversalState> {
        let curve = self.active_curve(state);
        let span = curve.period_span();
        let reference = state.active_period();
        let on_lhs = state.is_on_lhs();

        self.intersections
            .iter()
            .min_by(|a, b| {
                let da = forward_distance(span, self.period_on_active(a, on_lhs), reference);
                let db = forward_distance(span, self.period_on_active(b, on_lhs), reference);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|ix| state.at_intersection(ix))
    }

    /// The earliest simplex boundary of the active curve strictly after
    /// the active period, independent of any intersection.
    ///
    /// A curve may have internal simplex joints with no crossing at all;
    /// the traversal must still stop there to emit whole pieces.
    #[must_use]
    pub fn next_simplex_end(&self, state: TraversalState) -> TraversalState {
        let curve = self.active_curve(state);
        let span = curve.period_span();
        let reference = state.active_period();

        let mut best = curve.simplexes()[0].end_period();
        let mut best_distance = forward_distance(span, reference, best);
        for simplex in &curve.simplexes()[1..] {
            let d = forward_distance(span, reference, simplex.end_period());
            if d < best_distance {
                best_distance = d;
                best = simplex.end_period();
            }
        }
        state.with_active_period(best)
    }

    /// Whether the active curve's current point lies inside the *other*
    /// curve.
    #[must_use]
    pub fn is_inside_other(&self, state: TraversalState) -> bool {
        let point = self.active_curve(state).compute(state.active_period());
        let other = if state.is_on_lhs() { self.rhs } else { self.lhs };
        other.contains(point)
    }

    /// Whether the left-hand curve lies entirely inside the right-hand
    /// curve. Only meaningful when the intersection set is empty.
    #[must_use]
    pub fn is_lhs_within_rhs(&self) -> bool {
        self.rhs.contains(self.lhs.compute(self.lhs.start_period()))
    }

    /// Whether the right-hand curve lies entirely inside the left-hand
    /// curve. Only meaningful when the intersection set is empty.
    #[must_use]
    pub fn is_rhs_within_lhs(&self) -> bool {
        self.lhs.contains(self.rhs.compute(self.rhs.start_period()))
    }

    /// Cycle-detection identity of a state: the active side plus its
    /// period rounded to the lookup tolerance.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn state_key(&self, state: TraversalState) -> (bool, i64) {
        let curve = self.active_curve(state);
        let wrapped = crate::math::period::wrap(
            curve.period_span(),
            curve.start_period(),
            state.active_period(),
        );
        (state.is_on_lhs(), (wrapped / self.tolerance).round() as i64)
    }
}
