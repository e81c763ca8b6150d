use crate::error::{CurveError, Result};
use crate::math::period::PeriodRange;
use crate::math::TOLERANCE;

use super::simplex::Simplex;

/// Redistributes a simplex sequence's period intervals proportionally to
/// each piece's arc length, tiling `range` with no gaps or overlaps.
///
/// The running accumulation guarantees each interval starts exactly where
/// the previous one ended; the last interval is snapped to `range.end`.
///
/// # Errors
///
/// Returns [`CurveError::Empty`] for an empty sequence and
/// [`CurveError::ZeroPerimeter`] when the total length vanishes (there is
/// no meaningful proportional share to assign).
pub fn normalize_periods(simplexes: &[Simplex], range: PeriodRange) -> Result<Vec<Simplex>> {
    if simplexes.is_empty() {
        return Err(CurveError::Empty.into());
    }

    let total: f64 = simplexes.iter().map(Simplex::length).sum();
    if total < TOLERANCE {
        return Err(CurveError::ZeroPerimeter.into());
    }

    let mut result = Vec::with_capacity(simplexes.len());
    let mut accumulated = 0.0;
    let mut start = range.start;
    for (i, simplex) in simplexes.iter().enumerate() {
        accumulated += simplex.length();
        let end = if i == simplexes.len() - 1 {
            range.end
        } else {
            range.lerp(accumulated / total)
        };
        result.push(simplex.with_periods(PeriodRange::new(start, end)));
        start = end;
    }

    Ok(result)
}
