mod intersections;
mod lookup;
mod traversal;
mod union;

pub use intersections::intersection_periods;
pub use lookup::{Intersection, IntersectionLookup, TraversalState};
pub use union::Union;
