//! Angle utilities shared by the arc primitives and intersection code.
use std::f64::consts::TAU;

use super::TOLERANCE;

/// Folds an angle into the half-open range `[start, start + 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64, start: f64) -> f64 {
    let folded = (angle - start).rem_euclid(TAU) + start;
    if folded >= start + TAU {
        folded - TAU
    } else {
        folded
    }
}

/// Converts an absolute angle to a fractional position `t` in `[0, 1]`
/// within a signed sweep starting at `start_angle`.
///
/// Returns `None` if the angle is not within the swept range.
#[must_use]
pub fn sweep_fraction(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    if sweep.abs() < TOLERANCE {
        return None;
    }
    let eps = TOLERANCE * 100.0;

    // Angular offset from start_angle measured in the sweep direction.
    let mut delta = angle - start_angle;
    if sweep > 0.0 {
        while delta < -eps {
            delta += TAU;
        }
        while delta > TAU + eps {
            delta -= TAU;
        }
    } else {
        while delta > eps {
            delta -= TAU;
        }
        while delta < -TAU - eps {
            delta += TAU;
        }
    }

    let t = delta / sweep;
    if t >= -eps && t <= 1.0 + eps {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}
