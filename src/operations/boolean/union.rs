use crate::error::Result;
use crate::geometry::curve::PeriodicCurve;

use super::lookup::IntersectionLookup;
use super::traversal;

/// Computes the boolean union of two closed boundary curves.
///
/// A union may legally produce more than one contour: two disjoint
/// shapes keep both of their boundaries.
pub struct Union<'a> {
    lhs: &'a PeriodicCurve,
    rhs: &'a PeriodicCurve,
    tolerance: f64,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    ///
    /// `tolerance` governs intersection deduplication and the traversal's
    /// cycle detection: too tight produces duplicate crossings, too loose
    /// merges distinct ones.
    #[must_use]
    pub fn new(lhs: &'a PeriodicCurve, rhs: &'a PeriodicCurve, tolerance: f64) -> Self {
        Self {
            lhs,
            rhs,
            tolerance,
        }
    }

    /// Executes the union, returning the combined boundary curve(s) with
    /// periods normalized to `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the traversal fails to close into a loop.
    pub fn execute(&self) -> Result<Vec<PeriodicCurve>> {
        let lookup = IntersectionLookup::build(self.lhs, self.rhs, self.tolerance);
        traversal::execute(&lookup)
    }
}
