//! The boolean traversal engine: an alternating walk along two curves'
//! boundaries, switching curves at crossing points.

use std::collections::HashSet;

use crate::error::{BooleanError, Result};
use crate::geometry::curve::PeriodicCurve;
use crate::geometry::simplex::Simplex;
use crate::math::period::{cyclic_precedes, wrap, PeriodRange};

use super::lookup::{IntersectionLookup, TraversalState};

/// Walks the union boundary of the lookup's two curves.
///
/// With no crossings the traversal is skipped entirely: a nested shape
/// yields the outer boundary, disjoint shapes yield both boundaries
/// unmodified. Otherwise the walk starts at a crossing, alternates
/// curves at each crossing it passes, and closes when a state repeats.
pub(crate) fn execute(lookup: &IntersectionLookup<'_>) -> Result<Vec<PeriodicCurve>> {
    if lookup.is_empty() {
        if lookup.is_lhs_within_rhs() {
            return Ok(vec![lookup.rhs().clone()]);
        }
        if lookup.is_rhs_within_lhs() {
            return Ok(vec![lookup.lhs().clone()]);
        }
        return Ok(vec![lookup.lhs().clone(), lookup.rhs().clone()]);
    }

    // Anchor the walk at the crossing previous to the lhs start, so it
    // begins exactly at a boundary crossing. If the lhs start point is
    // inside the rhs, the union boundary there belongs to the rhs: start
    // on the other side.
    let probe = TraversalState::OnLhs {
        lhs_period: lookup.lhs().start_period(),
        rhs_period: lookup.rhs().start_period(),
    };
    let anchor = lookup
        .previous(probe)
        .ok_or_else(|| BooleanError::Failed("no anchor intersection".into()))?;
    let mut state = if lookup.is_inside_other(probe) {
        anchor.flipped()
    } else {
        anchor
    };

    let mut visited: HashSet<(bool, i64)> = HashSet::new();
    visited.insert(lookup.state_key(state));
    let mut emitted: Vec<Simplex> = Vec::new();

    // Every reachable state sits on a crossing or a simplex joint of one
    // of the two curves, so the walk must close within this many steps.
    let state_count =
        2 * (lookup.len() + lookup.lhs().simplexes().len() + lookup.rhs().simplexes().len());
    let mut closed = false;

    for _ in 0..=state_count {
        let crossing = lookup
            .next(state)
            .ok_or_else(|| BooleanError::Failed("intersection set emptied mid-walk".into()))?;
        let joint = lookup.next_simplex_end(state);

        let span = active_curve(lookup, state).period_span();
        // Strict cyclic precedence. On an exact tie the crossing wins:
        // stopping at the joint instead would leave the co-located
        // crossing a full lap away and the flip would never happen.
        let crossing_wins = !cyclic_precedes(
            span,
            state.active_period(),
            joint.active_period(),
            crossing.active_period(),
        );

        let target = if crossing_wins { &crossing } else { &joint };
        emit_run(lookup, state, target.active_period(), &mut emitted);

        let next_state = if crossing_wins { crossing.flipped() } else { joint };
        if !visited.insert(lookup.state_key(next_state)) {
            closed = true;
            break;
        }
        state = next_state;
    }

    if !closed {
        return Err(BooleanError::Failed("traversal did not close into a loop".into()).into());
    }
    if emitted.is_empty() {
        return Err(BooleanError::Failed("traversal emitted no boundary".into()).into());
    }

    Ok(vec![PeriodicCurve::normalized(emitted)?])
}

fn active_curve<'a>(lookup: &IntersectionLookup<'a>, state: TraversalState) -> &'a PeriodicCurve {
    if state.is_on_lhs() {
        lookup.lhs()
    } else {
        lookup.rhs()
    }
}

/// Emits the clamped simplex run of the active curve from the state's
/// period up to `target`, splitting at the wrap boundary when the run
/// crosses the end of the curve's range.
fn emit_run(
    lookup: &IntersectionLookup<'_>,
    state: TraversalState,
    target: f64,
    out: &mut Vec<Simplex>,
) {
    let curve = active_curve(lookup, state);
    let span = curve.period_span();
    let start = curve.start_period();
    let current = wrap(span, start, state.active_period());
    let target = wrap(span, start, target);

    if current < target {
        push_clamped(curve, PeriodRange::new(current, target), out);
    } else {
        push_clamped(curve, PeriodRange::new(current, curve.end_period()), out);
        push_clamped(curve, PeriodRange::new(start, target), out);
    }
}

fn push_clamped(curve: &PeriodicCurve, range: PeriodRange, out: &mut Vec<Simplex>) {
    for simplex in curve.simplexes() {
        if let Some(clamped) = simplex.clamp(range) {
            out.push(clamped);
        }
    }
}
