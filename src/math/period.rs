//! Cyclic period arithmetic.
//!
//! Positions along a closed curve are measured by a *period*: a scalar
//! coordinate on a half-open range (conventionally `[0, 1)` once
//! normalized) that wraps around at the end of the range.

use super::TOLERANCE;

/// A half-open period interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodRange {
    /// Start of the interval (inclusive).
    pub start: f64,
    /// End of the interval (exclusive).
    pub end: f64,
}

impl PeriodRange {
    /// Creates a new period interval.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the interval.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `period` lies within `[start, end)`, with tolerance at the
    /// start boundary.
    #[must_use]
    pub fn contains(&self, period: f64) -> bool {
        period >= self.start - TOLERANCE && period < self.end
    }

    /// The overlap of two intervals, or `None` if they are disjoint or
    /// the overlap has no positive span.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end - start > TOLERANCE {
            Some(Self::new(start, end))
        } else {
            None
        }
    }

    /// Linear interpolation across the interval: `t = 0` maps to `start`,
    /// `t = 1` to `end`.
    #[must_use]
    pub fn lerp(&self, t: f64) -> f64 {
        self.start + self.span() * t
    }

    /// Fractional position of `period` within the interval, clamped to
    /// `[0, 1]`. A zero-span interval maps everything to `0`.
    #[must_use]
    pub fn fraction_of(&self, period: f64) -> f64 {
        let span = self.span();
        if span.abs() < TOLERANCE {
            return 0.0;
        }
        ((period - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Folds a period into `[start, start + span)`.
#[must_use]
pub fn wrap(span: f64, start: f64, period: f64) -> f64 {
    debug_assert!(span > 0.0, "wrap requires a positive span");
    (period - start).rem_euclid(span) + start
}

/// Cyclic ordering test: walking forward from `reference` around a cycle
/// of length `span`, is `a` reached strictly before `b`?
///
/// Periods equal to `reference` (mod span) are treated as a full lap away,
/// so the reference itself never precedes anything.
#[must_use]
pub fn cyclic_precedes(span: f64, reference: f64, a: f64, b: f64) -> bool {
    debug_assert!(span > 0.0, "cyclic_precedes requires a positive span");
    forward_distance(span, reference, a) < forward_distance(span, reference, b)
}

/// Forward distance from `reference` to `period` around a cycle of length
/// `span`; zero distance wraps to a full lap.
#[must_use]
pub fn forward_distance(span: f64, reference: f64, period: f64) -> f64 {
    let d = (period - reference).rem_euclid(span);
    if d < TOLERANCE {
        span
    } else {
        d
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn range_basics() {
        let r = PeriodRange::new(0.25, 0.75);
        assert!((r.span() - 0.5).abs() < TOLERANCE);
        assert!(r.contains(0.25));
        assert!(r.contains(0.5));
        assert!(!r.contains(0.75));
        assert!(!r.contains(0.1));
    }

    #[test]
    fn range_intersection_overlap() {
        let a = PeriodRange::new(0.0, 0.5);
        let b = PeriodRange::new(0.25, 1.0);
        let i = a.intersection(&b).unwrap();
        assert!((i.start - 0.25).abs() < TOLERANCE);
        assert!((i.end - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn range_intersection_disjoint() {
        let a = PeriodRange::new(0.0, 0.25);
        let b = PeriodRange::new(0.5, 1.0);
        assert!(a.intersection(&b).is_none());
        // Touching intervals share no positive span either.
        let c = PeriodRange::new(0.25, 0.5);
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn fraction_and_lerp_roundtrip() {
        let r = PeriodRange::new(0.2, 0.6);
        let p = r.lerp(0.75);
        assert!((p - 0.5).abs() < TOLERANCE);
        assert!((r.fraction_of(p) - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn wrap_folds_into_range() {
        assert!((wrap(1.0, 0.0, 1.25) - 0.25).abs() < TOLERANCE);
        assert!((wrap(1.0, 0.0, -0.25) - 0.75).abs() < TOLERANCE);
        assert!((wrap(2.0, 1.0, 0.5) - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn precedes_simple_order() {
        assert!(cyclic_precedes(1.0, 0.1, 0.3, 0.7));
        assert!(!cyclic_precedes(1.0, 0.1, 0.7, 0.3));
    }

    #[test]
    fn precedes_across_wrap() {
        // Walking from 0.8: 0.9 comes before 0.2 (which wraps).
        assert!(cyclic_precedes(1.0, 0.8, 0.9, 0.2));
        // And 0.2 comes before 0.7.
        assert!(cyclic_precedes(1.0, 0.8, 0.2, 0.7));
    }

    #[test]
    fn reference_is_a_full_lap_away() {
        // The reference itself never precedes another period.
        assert!(!cyclic_precedes(1.0, 0.5, 0.5, 0.6));
        assert!(cyclic_precedes(1.0, 0.5, 0.6, 0.5));
    }

    #[test]
    fn equal_candidates_do_not_precede() {
        assert!(!cyclic_precedes(1.0, 0.0, 0.4, 0.4));
    }
}
