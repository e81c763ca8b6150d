use std::f64::consts::FRAC_PI_2;

use crate::error::{CurveError, GeometryError, Result};
use crate::math::bounds::Aabb;
use crate::math::period::{self, PeriodRange};
use crate::math::{Point2, TOLERANCE};

use super::normalize::normalize_periods;
use super::simplex::{monotone_arc_splits, Simplex, SimplexKind};

/// Rotational sense of a closed curve, used to decide its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise (positive signed area).
    Ccw,
    /// Clockwise (negative signed area).
    Cw,
}

/// One closed boundary: an ordered sequence of simplexes whose period
/// intervals exactly tile `[start_period, end_period)`.
///
/// Period `end_period` of the last simplex wraps around to
/// `start_period` of the first. The curve is an immutable value; it is
/// rebuilt, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicCurve {
    simplexes: Vec<Simplex>,
}

impl PeriodicCurve {
    /// Creates a curve from simplexes, validating the period tiling.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Empty`] for an empty sequence,
    /// [`CurveError::EmptySpan`] when a simplex has no positive period
    /// span, and [`CurveError::PeriodGap`] when consecutive intervals do
    /// not meet.
    pub fn from_simplexes(simplexes: Vec<Simplex>) -> Result<Self> {
        if simplexes.is_empty() {
            return Err(CurveError::Empty.into());
        }
        for (index, simplex) in simplexes.iter().enumerate() {
            if simplex.periods().span() < TOLERANCE {
                return Err(CurveError::EmptySpan { index }.into());
            }
            if index > 0 {
                let expected = simplexes[index - 1].end_period();
                let found = simplex.start_period();
                if (found - expected).abs() > TOLERANCE {
                    return Err(CurveError::PeriodGap {
                        index,
                        expected,
                        found,
                    }
                    .into());
                }
            }
        }
        Ok(Self { simplexes })
    }

    /// Creates a curve with periods retiled to `[0, 1)` proportionally to
    /// arc length.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty or has zero total length.
    pub fn normalized(simplexes: Vec<Simplex>) -> Result<Self> {
        let retiled = normalize_periods(&simplexes, PeriodRange::new(0.0, 1.0))?;
        Self::from_simplexes(retiled)
    }

    /// A counter-clockwise circle built from four quarter arcs over
    /// `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn circle(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("circle radius must be positive".into()).into());
        }
        let quarters = (0..4)
            .map(|i| {
                let i = f64::from(i);
                Simplex::arc(
                    center,
                    radius,
                    i * FRAC_PI_2,
                    FRAC_PI_2,
                    PeriodRange::new(i * 0.25, (i + 1.0) * 0.25),
                )
            })
            .collect();
        Self::from_simplexes(quarters)
    }

    /// A closed line-only loop through the given points, with periods
    /// proportional to edge length over `[0, 1)`.
    ///
    /// Consecutive duplicate points are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three distinct points remain.
    pub fn polygon(points: &[Point2]) -> Result<Self> {
        let mut distinct: Vec<Point2> = Vec::with_capacity(points.len());
        for &p in points {
            if distinct.last().is_none_or(|prev| (p - prev).norm() > TOLERANCE) {
                distinct.push(p);
            }
        }
        if distinct
            .first()
            .zip(distinct.last())
            .is_some_and(|(a, b)| (a - b).norm() < TOLERANCE)
        {
            distinct.pop();
        }
        if distinct.len() < 3 {
            return Err(GeometryError::Degenerate(
                "a polygon requires at least 3 distinct points".into(),
            )
            .into());
        }

        let n = distinct.len();
        let edges: Vec<Simplex> = (0..n)
            .map(|i| {
                Simplex::line(
                    distinct[i],
                    distinct[(i + 1) % n],
                    PeriodRange::new(0.0, 0.0),
                )
            })
            .collect();
        Self::normalized(edges)
    }

    /// The ordered simplex sequence.
    #[must_use]
    pub fn simplexes(&self) -> &[Simplex] {
        &self.simplexes
    }

    /// Start of the curve's period range.
    #[must_use]
    pub fn start_period(&self) -> f64 {
        self.simplexes[0].start_period()
    }

    /// End of the curve's period range (exclusive; wraps to the start).
    #[must_use]
    pub fn end_period(&self) -> f64 {
        self.simplexes[self.simplexes.len() - 1].end_period()
    }

    /// Length of the curve's period range.
    #[must_use]
    pub fn period_span(&self) -> f64 {
        self.end_period() - self.start_period()
    }

    /// The full period range of the curve.
    #[must_use]
    pub fn period_range(&self) -> PeriodRange {
        PeriodRange::new(self.start_period(), self.end_period())
    }

    /// Evaluates the curve at a period, wrapping cyclically into the
    /// curve's range.
    #[must_use]
    pub fn compute(&self, p: f64) -> Point2 {
        let p = period::wrap(self.period_span(), self.start_period(), p);
        for simplex in &self.simplexes {
            if simplex.periods().contains(p) {
                return simplex.compute(p);
            }
        }
        // Rounding at the final boundary lands on the last simplex.
        self.simplexes[self.simplexes.len() - 1].compute(p)
    }

    /// Total arc length of the boundary.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.simplexes.iter().map(Simplex::length).sum()
    }

    /// Axis-aligned bounding box of the whole boundary.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        let mut aabb = self.simplexes[0].bounding_box();
        for simplex in &self.simplexes[1..] {
            aabb = aabb.union(&simplex.bounding_box());
        }
        aabb
    }

    /// Even-odd containment test against the closed boundary.
    ///
    /// Casts a horizontal ray towards `+x` and counts crossings. Lines
    /// use the half-open vertex rule; arcs are split into x/y-monotone
    /// pieces first so the same rule applies to each piece.
    #[must_use]
    pub fn contains(&self, point: Point2) -> bool {
        let mut inside = false;
        for simplex in &self.simplexes {
            match *simplex.kind() {
                SimplexKind::Line { start, end } => {
                    if (start.y > point.y) != (end.y > point.y) {
                        let t = (point.y - start.y) / (end.y - start.y);
                        let x = start.x + t * (end.x - start.x);
                        if x > point.x {
                            inside = !inside;
                        }
                    }
                }
                SimplexKind::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => {
                    for (a0, a1) in monotone_arc_splits(start_angle, sweep) {
                        let y0 = center.y + radius * a0.sin();
                        let y1 = center.y + radius * a1.sin();
                        if (y0 > point.y) == (y1 > point.y) {
                            continue;
                        }
                        let dy = point.y - center.y;
                        let h = (radius * radius - dy * dy).max(0.0);
                        // A monotone piece lies entirely in one x half of
                        // its circle; the mid angle picks the root.
                        let mid = 0.5 * (a0 + a1);
                        let x = if mid.cos() >= 0.0 {
                            center.x + h.sqrt()
                        } else {
                            center.x - h.sqrt()
                        };
                        if x > point.x {
                            inside = !inside;
                        }
                    }
                }
            }
        }
        inside
    }

    /// Signed enclosed area: shoelace over simplex endpoints plus a
    /// circular-segment correction `r²(θ − sin θ)/2` per arc.
    ///
    /// Positive for counter-clockwise boundaries.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let mut area = 0.0;
        for simplex in &self.simplexes {
            let a = simplex.start_point();
            let b = simplex.end_point();
            area += (a.x * b.y - b.x * a.y) * 0.5;
            if let SimplexKind::Arc { radius, sweep, .. } = *simplex.kind() {
                area += 0.5 * radius * radius * (sweep - sweep.sin());
            }
        }
        area
    }

    /// The rotational sense of the boundary.
    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.signed_area() >= 0.0 {
            Winding::Ccw
        } else {
            Winding::Cw
        }
    }

    /// The same boundary traced in the opposite direction, periods
    /// retiled over the original range.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve has zero total length (cannot occur
    /// for a curve built through the validating constructors).
    pub fn reversed(&self) -> Result<Self> {
        let reversed: Vec<Simplex> = self.simplexes.iter().rev().map(Simplex::reversed).collect();
        let retiled = normalize_periods(&reversed, self.period_range())?;
        Self::from_simplexes(retiled)
    }
}
