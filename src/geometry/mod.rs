pub mod curve;
pub mod normalize;
pub mod simplex;

pub use curve::{PeriodicCurve, Winding};
pub use normalize::normalize_periods;
pub use simplex::{Simplex, SimplexKind};
